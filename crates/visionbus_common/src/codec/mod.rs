//! Flat `f64` array codecs for every record the camera exchanges over the bus.
//!
//! Decoders never fail. Missing input gives the record's zero/identity value,
//! short input is zero-filled per slot, and a pose-estimate frame whose length
//! disagrees with its header keeps the header and drops the fiducial detail.

pub mod command;
pub mod downscale;
pub mod estimate;
pub mod fiducial;
pub mod frame;
pub mod imu;

pub use command::{CameraPose, CropWindow, FiducialOffset, RobotOrientation};
pub use downscale::quantize;
pub use frame::{pose2d_from_array, pose2d_to_array, pose3d_from_array, pose3d_to_array};
