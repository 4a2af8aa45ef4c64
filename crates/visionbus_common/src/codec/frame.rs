//! Six-slot pose encoding: `[x, y, z, roll, pitch, yaw]`, meters and degrees.

use crate::pose::{Pose2d, Pose3d, Rotation2d, Rotation3d, Translation3d};

/// Slots in a flattened pose.
pub const POSE_LEN: usize = 6;

/// Reads `data[index]`, or `0.0` past the end of the slice.
#[inline]
pub fn extract_entry(data: &[f64], index: usize) -> f64 {
    data.get(index).copied().unwrap_or(0.0)
}

/// Returns the identity pose when `data` has fewer than six slots.
pub fn pose3d_from_array(data: &[f64]) -> Pose3d {
    if data.len() < POSE_LEN {
        return Pose3d::default();
    }
    Pose3d::new(
        Translation3d::new(data[0], data[1], data[2]),
        Rotation3d::from_degrees(data[3], data[4], data[5]),
    )
}

/// Reads x, y and yaw only. Returns the identity pose when `data` has fewer
/// than six slots.
pub fn pose2d_from_array(data: &[f64]) -> Pose2d {
    if data.len() < POSE_LEN {
        return Pose2d::default();
    }
    Pose2d::new(data[0], data[1], Rotation2d::from_degrees(data[5]))
}

/// Flattens a pose. Angles are written in degrees.
///
/// ```rust
/// use visionbus_common::codec::pose3d_to_array;
/// use visionbus_common::{Pose3d, Rotation3d, Translation3d};
///
/// let pose = Pose3d::new(
///     Translation3d::new(1.0, 2.0, 0.5),
///     Rotation3d::from_radians(0.0, 0.0, std::f64::consts::FRAC_PI_2),
/// );
/// let data = pose3d_to_array(&pose);
/// assert_eq!(&data[..3], &[1.0, 2.0, 0.5]);
/// assert!((data[5] - 90.0).abs() < 1e-9);
/// ```
pub fn pose3d_to_array(pose: &Pose3d) -> [f64; POSE_LEN] {
    let (roll, pitch, yaw) = pose.rotation.to_degrees();
    [
        pose.translation.x,
        pose.translation.y,
        pose.translation.z,
        roll,
        pitch,
        yaw,
    ]
}

/// z, roll and pitch are written as zero.
pub fn pose2d_to_array(pose: &Pose2d) -> [f64; POSE_LEN] {
    [pose.x(), pose.y(), 0.0, 0.0, 0.0, pose.rotation.degrees()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_short_arrays_give_identity() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        for len in 0..POSE_LEN {
            assert_eq!(pose3d_from_array(&data[..len]), Pose3d::default());
            assert_eq!(pose2d_from_array(&data[..len]), Pose2d::default());
        }
    }

    #[test]
    fn test_pose3d_from_array_converts_degrees() {
        let pose = pose3d_from_array(&[1.0, -2.0, 0.5, 90.0, 0.0, -90.0]);
        assert!((pose.translation.x - 1.0).abs() < TOL);
        assert!((pose.translation.y + 2.0).abs() < TOL);
        assert!((pose.translation.z - 0.5).abs() < TOL);
        assert!((pose.rotation.roll() - FRAC_PI_2).abs() < TOL);
        assert!(pose.rotation.pitch().abs() < TOL);
        assert!((pose.rotation.yaw() + FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn test_pose2d_reads_only_x_y_yaw() {
        let pose = pose2d_from_array(&[1.2, -3.4, 9.0, 45.0, 45.0, 90.0]);
        assert_eq!(pose, Pose2d::new(1.2, -3.4, Rotation2d::from_degrees(90.0)));
        assert!((pose.rotation.radians() - FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn test_extra_slots_ignored() {
        let pose = pose2d_from_array(&[1.0, 2.0, 0.0, 0.0, 0.0, 30.0, 99.0, 7.0]);
        assert_eq!(pose, Pose2d::new(1.0, 2.0, Rotation2d::from_degrees(30.0)));
    }

    #[test]
    fn test_pose3d_array_roundtrip() {
        let data = [0.25, 4.5, -1.0, 10.0, -20.0, 170.0];
        let back = pose3d_to_array(&pose3d_from_array(&data));
        for (a, b) in data.iter().zip(back.iter()) {
            assert!((a - b).abs() < TOL, "{} != {}", a, b);
        }
    }

    #[test]
    fn test_pose2d_to_array_zeroes_unused_slots() {
        let pose = Pose2d::new(3.0, 4.0, Rotation2d::from_degrees(-45.0));
        let data = pose2d_to_array(&pose);
        assert_eq!(&data[..5], &[3.0, 4.0, 0.0, 0.0, 0.0]);
        assert!((data[5] + 45.0).abs() < TOL);
        assert_eq!(pose2d_from_array(&data), pose);
    }

    #[test]
    fn test_extract_entry_soft_reads() {
        let data = [1.0, 2.0];
        assert_eq!(extract_entry(&data, 1), 2.0);
        assert_eq!(extract_entry(&data, 2), 0.0);
        assert_eq!(extract_entry(&[], 0), 0.0);
    }
}
