//! Layouts written by the robot to configure the camera.

use serde::{Deserialize, Serialize};

/// Crop rectangle in normalized image coordinates, each in -1..=1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl CropWindow {
    /// Builds a window from its normalized edges.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// `[x_min, x_max, y_min, y_max]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

impl Default for CropWindow {
    /// Fully open.
    fn default() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0)
    }
}

/// Camera mounting pose in robot space. Meters and degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub forward: f64,
    pub side: f64,
    pub up: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl CameraPose {
    /// `[forward, side, up, roll, pitch, yaw]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.forward,
            self.side,
            self.up,
            self.roll,
            self.pitch,
            self.yaw,
        ]
    }
}

/// Robot orientation fed to MegaTag2. Degrees and degrees per second.
///
/// Only `yaw` is required by the firmware; 0 yaw faces the red alliance wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotOrientation {
    pub yaw: f64,
    pub yaw_rate: f64,
    pub pitch: f64,
    pub pitch_rate: f64,
    pub roll: f64,
    pub roll_rate: f64,
}

impl RobotOrientation {
    /// Orientation with only the heading set.
    pub fn from_yaw(yaw: f64) -> Self {
        Self {
            yaw,
            ..Default::default()
        }
    }

    /// `[yaw, yaw_rate, pitch, pitch_rate, roll, roll_rate]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.yaw,
            self.yaw_rate,
            self.pitch,
            self.pitch_rate,
            self.roll,
            self.roll_rate,
        ]
    }
}

/// Point-of-interest offset from the tag center, meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FiducialOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FiducialOffset {
    /// Offset from the tag center, meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// One slot per allowed tag id, in the order given.
pub fn encode_id_filters(ids: &[i32]) -> Vec<f64> {
    ids.iter().copied().map(f64::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_layout() {
        let orientation = RobotOrientation {
            yaw: 1.0,
            yaw_rate: 2.0,
            pitch: 3.0,
            pitch_rate: 4.0,
            roll: 5.0,
            roll_rate: 6.0,
        };
        assert_eq!(orientation.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(RobotOrientation::from_yaw(90.0).to_array(), [90.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_crop_and_offset_layout() {
        assert_eq!(CropWindow::new(-0.5, 0.5, -0.25, 0.75).to_array(), [-0.5, 0.5, -0.25, 0.75]);
        assert_eq!(CropWindow::default().to_array(), [-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(FiducialOffset::new(0.1, 0.2, 0.3).to_array(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_camera_pose_layout() {
        let pose = CameraPose {
            forward: 0.3,
            side: -0.1,
            up: 0.5,
            roll: 0.0,
            pitch: 20.0,
            yaw: 180.0,
        };
        assert_eq!(pose.to_array(), [0.3, -0.1, 0.5, 0.0, 20.0, 180.0]);
    }

    #[test]
    fn test_id_filters() {
        assert_eq!(encode_id_filters(&[1, 2, 16]), vec![1.0, 2.0, 16.0]);
        assert!(encode_id_filters(&[]).is_empty());
    }
}
