//! Field-relative pose types.
//!
//! Angles are stored in radians and surfaced in degrees where the bus expects
//! them. Equality is tolerance based (`1e-9`) so values that survive a
//! degrees -> radians -> degrees trip still compare equal.

use nalgebra::{Isometry2, Isometry3, Translation3, UnitQuaternion, Vector2};
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// Compares on the unit circle so that -180 and 180 are the same heading.
fn same_angle(a: f64, b: f64) -> bool {
    (a.cos() - b.cos()).hypot(a.sin() - b.sin()) < EPSILON
}

/// Planar translation in meters.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Translation2d {
    pub x: f64,
    pub y: f64,
}

impl Translation2d {
    /// Builds a translation from meters.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Translation2d {
    fn eq(&self, other: &Self) -> bool {
        approx(self.x, other.x) && approx(self.y, other.y)
    }
}

/// Spatial translation in meters.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Translation3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Translation3d {
    /// Builds a translation from meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl PartialEq for Translation3d {
    fn eq(&self, other: &Self) -> bool {
        approx(self.x, other.x) && approx(self.y, other.y) && approx(self.z, other.z)
    }
}

/// Heading in the plane.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Rotation2d {
    radians: f64,
}

impl Rotation2d {
    /// Builds a rotation from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Builds a rotation from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Angle in radians.
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }
}

impl PartialEq for Rotation2d {
    fn eq(&self, other: &Self) -> bool {
        same_angle(self.radians, other.radians)
    }
}

/// Extrinsic roll (X), pitch (Y), yaw (Z) rotation, stored in radians.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Rotation3d {
    roll: f64,
    pitch: f64,
    yaw: f64,
}

impl Rotation3d {
    /// Builds a rotation from Euler angles in radians.
    pub fn from_radians(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Builds a rotation from Euler angles in degrees.
    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::from_radians(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    /// Roll, radians.
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// Pitch, radians.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Yaw, radians.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Returns `(roll, pitch, yaw)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64, f64) {
        (
            self.roll.to_degrees(),
            self.pitch.to_degrees(),
            self.yaw.to_degrees(),
        )
    }

    /// Converts to a unit quaternion using nalgebra's roll/pitch/yaw convention,
    /// which matches the extrinsic X-Y-Z order the camera reports.
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(self.roll, self.pitch, self.yaw)
    }

    /// Recovers roll, pitch and yaw from a unit quaternion.
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let (roll, pitch, yaw) = q.euler_angles();
        Self { roll, pitch, yaw }
    }
}

impl PartialEq for Rotation3d {
    fn eq(&self, other: &Self) -> bool {
        same_angle(self.roll, other.roll)
            && same_angle(self.pitch, other.pitch)
            && same_angle(self.yaw, other.yaw)
    }
}

/// Robot pose on the field plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2d {
    pub translation: Translation2d,
    pub rotation: Rotation2d,
}

impl Pose2d {
    /// Builds a planar pose from meters and a heading.
    pub fn new(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self {
            translation: Translation2d::new(x, y),
            rotation,
        }
    }

    /// Field x, meters.
    pub fn x(&self) -> f64 {
        self.translation.x
    }

    /// Field y, meters.
    pub fn y(&self) -> f64 {
        self.translation.y
    }

    /// Converts to an nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(
            Vector2::new(self.translation.x, self.translation.y),
            self.rotation.radians(),
        )
    }

    /// Converts from an nalgebra isometry.
    pub fn from_isometry(iso: &Isometry2<f64>) -> Self {
        Self::new(
            iso.translation.vector.x,
            iso.translation.vector.y,
            Rotation2d::from_radians(iso.rotation.angle()),
        )
    }
}

/// Full six degree of freedom pose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose3d {
    pub translation: Translation3d,
    pub rotation: Rotation3d,
}

impl Pose3d {
    /// Builds a pose from its parts.
    pub fn new(translation: Translation3d, rotation: Rotation3d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Drops z, roll and pitch.
    pub fn to_pose2d(&self) -> Pose2d {
        Pose2d::new(
            self.translation.x,
            self.translation.y,
            Rotation2d::from_radians(self.rotation.yaw()),
        )
    }

    /// Converts to an nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation.to_quaternion(),
        )
    }

    /// Converts from an nalgebra isometry.
    pub fn from_isometry(iso: &Isometry3<f64>) -> Self {
        let t = &iso.translation;
        Self {
            translation: Translation3d::new(t.x, t.y, t.z),
            rotation: Rotation3d::from_quaternion(&iso.rotation),
        }
    }
}
