//! Bus entry names published or consumed by the camera firmware.
//!
//! These strings are part of the firmware contract and must not change.

use serde::{Deserialize, Serialize};

pub const BOTPOSE: &str = "botpose";
pub const BOTPOSE_ORB_WPIBLUE: &str = "botpose_orb_wpiblue";
pub const BOTPOSE_ORB_WPIRED: &str = "botpose_orb_wpired";
pub const BOTPOSE_WPIBLUE: &str = "botpose_wpiblue";
pub const BOTPOSE_WPIRED: &str = "botpose_wpired";
pub const BOTPOSE_TARGETSPACE: &str = "botpose_targetspace";
pub const CAMERAPOSE_ROBOTSPACE: &str = "camerapose_robotspace";
pub const CAMERAPOSE_ROBOTSPACE_SET: &str = "camerapose_robotspace_set";
pub const CAMERAPOSE_TARGETSPACE: &str = "camerapose_targetspace";
pub const CL: &str = "cl";
pub const CROP: &str = "crop";
pub const IMU: &str = "imu";
pub const IMU_ASSIST_ALPHA_SET: &str = "imuassistalpha_set";
pub const IMU_MODE_SET: &str = "imumode_set";
pub const FIDUCIAL_DOWNSCALE_SET: &str = "fiducial_downscale_set";
pub const FIDUCIAL_ID_FILTERS_SET: &str = "fiducial_id_filters_set";
pub const FIDUCIAL_OFFSET_SET: &str = "fiducial_offset_set";
pub const PRIORITY_ID: &str = "priorityid";
pub const RAW_FIDUCIALS: &str = "rawfiducials";
pub const ROBOT_ORIENTATION_SET: &str = "robot_orientation_set";
pub const TARGETPOSE_CAMERASPACE: &str = "targetpose_cameraspace";
pub const TARGETPOSE_ROBOTSPACE: &str = "targetpose_robotspace";
pub const THROTTLE_SET: &str = "throttle_set";
pub const TA: &str = "ta";
pub const TID: &str = "tid";
pub const TL: &str = "tl";
pub const TV: &str = "tv";
pub const TY: &str = "ty";
pub const TYNC: &str = "tync";
pub const TX: &str = "tx";
pub const TXNC: &str = "txnc";

/// Entries that carry a six-slot `[x, y, z, roll, pitch, yaw]` pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseSpace {
    /// Robot in field space, field-center origin.
    BotPose,
    /// Robot in field space, blue-wall origin.
    BotPoseWpiBlue,
    /// Robot in field space, red-wall origin.
    BotPoseWpiRed,
    /// Robot relative to the primary tag.
    BotPoseTargetSpace,
    /// Camera relative to the primary tag.
    CameraPoseTargetSpace,
    /// Primary tag relative to the camera.
    TargetPoseCameraSpace,
    /// Primary tag relative to the robot.
    TargetPoseRobotSpace,
    /// Camera mounting pose relative to the robot.
    CameraPoseRobotSpace,
}

impl PoseSpace {
    pub fn key_name(&self) -> &'static str {
        match self {
            PoseSpace::BotPose => BOTPOSE,
            PoseSpace::BotPoseWpiBlue => BOTPOSE_WPIBLUE,
            PoseSpace::BotPoseWpiRed => BOTPOSE_WPIRED,
            PoseSpace::BotPoseTargetSpace => BOTPOSE_TARGETSPACE,
            PoseSpace::CameraPoseTargetSpace => CAMERAPOSE_TARGETSPACE,
            PoseSpace::TargetPoseCameraSpace => TARGETPOSE_CAMERASPACE,
            PoseSpace::TargetPoseRobotSpace => TARGETPOSE_ROBOTSPACE,
            PoseSpace::CameraPoseRobotSpace => CAMERAPOSE_ROBOTSPACE,
        }
    }
}
