use serde::{Deserialize, Serialize};

/// A single AprilTag detection as reported by the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FiducialDetection {
    /// Tag id.
    pub id: i32,
    /// Horizontal offset from the principal pixel, degrees. Positive is right.
    pub txnc: f64,
    /// Vertical offset from the principal pixel, degrees. Positive is down.
    pub tync: f64,
    /// Target area as a fraction of the image, 0 to 1.
    pub ta: f64,
    /// Camera to tag distance, meters.
    pub dist_to_camera: f64,
    /// Robot to tag distance, meters.
    pub dist_to_robot: f64,
    /// 0 to 1. Higher values mean the pose solution is more likely to flip
    /// between two candidate solutions.
    pub ambiguity: f64,
}

impl FiducialDetection {
    /// Builds a detection from its seven slot values.
    pub fn new(
        id: i32,
        txnc: f64,
        tync: f64,
        ta: f64,
        dist_to_camera: f64,
        dist_to_robot: f64,
        ambiguity: f64,
    ) -> Self {
        Self {
            id,
            txnc,
            tync,
            ta,
            dist_to_camera,
            dist_to_robot,
            ambiguity,
        }
    }
}
