use tracing::warn;
use visionbus_common::codec::{self, CameraPose, CropWindow, FiducialOffset, RobotOrientation};
use visionbus_common::{
    FiducialDetection, ImuMode, ImuRecord, Pose2d, Pose3d, PoseEstimate, PoseSpace,
    TelemetryVariant, keys,
};

use crate::bus::VisionBus;
use crate::error::StoreError;
use crate::store::{ArrayEntry, TableStore};

/// One camera's table on a [`VisionBus`].
///
/// Reads never fail: a store error is logged and the record's empty value is
/// returned. Writes report store errors to the caller.
pub struct Camera<'a, S: TableStore> {
    bus: &'a VisionBus<S>,
    table: String,
}

impl<S: TableStore> std::fmt::Debug for Camera<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Camera [{}]", self.table)
    }
}

impl<'a, S: TableStore> Camera<'a, S> {
    pub(crate) fn new(bus: &'a VisionBus<S>, table: String) -> Self {
        Self { bus, table }
    }

    /// The table this camera publishes under.
    pub fn name(&self) -> &str {
        &self.table
    }

    // ------------------------------------------------------------------
    // Raw entries
    // ------------------------------------------------------------------

    /// Reads a scalar entry, or `0.0` if it is absent or unreadable.
    pub fn double(&self, key: &str) -> f64 {
        match self.bus.store().get_double(&self.table, key) {
            Ok(value) => value.unwrap_or(0.0),
            Err(e) => {
                warn!("[{}] Failed to read {}/{}: {}", S::STORE_NAME, self.table, key, e);
                0.0
            }
        }
    }

    /// Reads an array entry, or an empty array if it is absent or unreadable.
    pub fn double_array(&self, key: &str) -> Vec<f64> {
        match self.bus.store().get_double_array(&self.table, key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("[{}] Failed to read {}/{}: {}", S::STORE_NAME, self.table, key, e);
                Vec::new()
            }
        }
    }

    /// Publishes a scalar entry.
    pub fn set_double(&self, key: &str, value: f64) -> Result<(), StoreError> {
        self.bus.store().set_double(&self.table, key, value)
    }

    /// Publishes an array entry.
    pub fn set_double_array(&self, key: &str, value: &[f64]) -> Result<(), StoreError> {
        self.bus.store().set_double_array(&self.table, key, value)
    }

    // ------------------------------------------------------------------
    // Targeting
    // ------------------------------------------------------------------

    /// True when the camera reports a valid target.
    pub fn has_target(&self) -> bool {
        self.double(keys::TV) == 1.0
    }

    /// Horizontal offset from the crosshair, degrees.
    pub fn tx(&self) -> f64 {
        self.double(keys::TX)
    }

    /// Vertical offset from the crosshair, degrees.
    pub fn ty(&self) -> f64 {
        self.double(keys::TY)
    }

    /// Horizontal offset from the principal pixel, degrees.
    pub fn txnc(&self) -> f64 {
        self.double(keys::TXNC)
    }

    /// Vertical offset from the principal pixel, degrees.
    pub fn tync(&self) -> f64 {
        self.double(keys::TYNC)
    }

    /// Target area, 0 to 100 percent of the image.
    pub fn ta(&self) -> f64 {
        self.double(keys::TA)
    }

    /// Pipeline latency, milliseconds.
    pub fn pipeline_latency_ms(&self) -> f64 {
        self.double(keys::TL)
    }

    /// Capture latency, milliseconds.
    pub fn capture_latency_ms(&self) -> f64 {
        self.double(keys::CL)
    }

    /// Id of the primary tag in view.
    pub fn fiducial_id(&self) -> i32 {
        self.double(keys::TID) as i32
    }

    /// Every tag detection from the latest frame.
    pub fn raw_fiducials(&self) -> Vec<FiducialDetection> {
        codec::fiducial::decode_list(&self.double_array(keys::RAW_FIDUCIALS))
    }

    /// Publishes a detection list, as the camera would.
    pub fn set_raw_fiducials(&self, fiducials: &[FiducialDetection]) -> Result<(), StoreError> {
        self.set_double_array(keys::RAW_FIDUCIALS, &codec::fiducial::encode_list(fiducials))
    }

    // ------------------------------------------------------------------
    // Localization
    // ------------------------------------------------------------------

    /// The raw six-slot array for `space`.
    pub fn pose_array(&self, space: PoseSpace) -> Vec<f64> {
        self.double_array(space.key_name())
    }

    /// The pose published for `space`, or the identity pose.
    pub fn pose3d(&self, space: PoseSpace) -> Pose3d {
        codec::pose3d_from_array(&self.pose_array(space))
    }

    /// The planar robot pose for `variant`, or the identity pose.
    pub fn bot_pose2d(&self, variant: TelemetryVariant) -> Pose2d {
        codec::pose2d_from_array(&self.double_array(variant.key_name()))
    }

    /// The full estimate for `variant`, timestamped from the bus arrival time.
    pub fn bot_pose_estimate(&self, variant: TelemetryVariant) -> PoseEstimate {
        let entry = self.bus.array_entry(&self.table, variant.key_name());
        match entry.get_atomic() {
            Ok(atomic) => codec::estimate::decode(variant, &atomic.value, atomic.timestamp_micros),
            Err(e) => {
                warn!(
                    "[{}] Failed to read {}/{}: {}",
                    S::STORE_NAME,
                    self.table,
                    variant.key_name(),
                    e
                );
                PoseEstimate::empty(variant)
            }
        }
    }

    /// Publishes `estimate` under `variant`'s entry. z, roll and pitch are
    /// written as zero.
    pub fn set_bot_pose_estimate(
        &self,
        estimate: &PoseEstimate,
        variant: TelemetryVariant,
    ) -> Result<(), StoreError> {
        self.bus
            .array_entry(&self.table, variant.key_name())
            .set(&codec::estimate::encode(estimate))
    }

    // ------------------------------------------------------------------
    // IMU
    // ------------------------------------------------------------------

    /// The internal IMU snapshot combined with the configured IMU mode.
    pub fn imu_data(&self) -> ImuRecord {
        let mode_code = self.double(keys::IMU_MODE_SET) as i32;
        codec::imu::decode(&self.double_array(keys::IMU), mode_code)
    }

    /// Selects how MegaTag2 sources orientation.
    pub fn set_imu_mode(&self, mode: ImuMode) -> Result<(), StoreError> {
        self.set_double(keys::IMU_MODE_SET, f64::from(mode.code()))
    }

    /// Complementary filter weight used by the assisted IMU modes.
    pub fn set_imu_assist_alpha(&self, alpha: f64) -> Result<(), StoreError> {
        self.set_double(keys::IMU_ASSIST_ALPHA_SET, alpha)
    }

    /// Feeds the robot orientation to MegaTag2.
    pub fn set_robot_orientation(&self, orientation: RobotOrientation) -> Result<(), StoreError> {
        self.set_double_array(keys::ROBOT_ORIENTATION_SET, &orientation.to_array())?;
        if self.bus.settings().flush_on_orientation {
            self.bus.flush()?;
        }
        Ok(())
    }

    /// Feeds only the robot yaw, zeroing every other orientation slot.
    pub fn set_robot_yaw(&self, yaw: f64) -> Result<(), StoreError> {
        self.set_robot_orientation(RobotOrientation::from_yaw(yaw))
    }

    // ------------------------------------------------------------------
    // Camera configuration
    // ------------------------------------------------------------------

    /// Prefers `id` when choosing the primary tag.
    pub fn set_priority_tag_id(&self, id: i32) -> Result<(), StoreError> {
        self.set_double(keys::PRIORITY_ID, f64::from(id))
    }

    /// Restricts processing to `window`. The crop in the camera UI must be
    /// fully open for this to take effect.
    pub fn set_crop_window(&self, window: CropWindow) -> Result<(), StoreError> {
        self.set_double_array(keys::CROP, &window.to_array())
    }

    /// Moves the tracked point of interest away from the tag center.
    pub fn set_fiducial_3d_offset(&self, offset: FiducialOffset) -> Result<(), StoreError> {
        self.set_double_array(keys::FIDUCIAL_OFFSET_SET, &offset.to_array())
    }

    /// Processes one frame, then skips `skip_frames`. Zero processes every frame.
    pub fn set_throttle(&self, skip_frames: i32) -> Result<(), StoreError> {
        self.set_double(keys::THROTTLE_SET, f64::from(skip_frames))
    }

    /// Limits localization to the listed tag ids.
    pub fn set_fiducial_id_filters_override(&self, ids: &[i32]) -> Result<(), StoreError> {
        self.set_double_array(
            keys::FIDUCIAL_ID_FILTERS_SET,
            &codec::command::encode_id_filters(ids),
        )
    }

    /// Overrides the detection downscale factor. Factors other than 1.0, 1.5,
    /// 2.0, 3.0 and 4.0 hand control back to the pipeline.
    pub fn set_fiducial_downscaling_override(&self, factor: f32) -> Result<(), StoreError> {
        self.set_double(
            keys::FIDUCIAL_DOWNSCALE_SET,
            f64::from(codec::downscale::quantize(factor)),
        )
    }

    /// Sets where the camera is mounted on the robot.
    pub fn set_camera_pose_robot_space(&self, pose: CameraPose) -> Result<(), StoreError> {
        self.set_double_array(keys::CAMERAPOSE_ROBOTSPACE_SET, &pose.to_array())
    }
}
