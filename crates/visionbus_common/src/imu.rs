use serde::{Deserialize, Serialize};

/// How the camera sources orientation for MegaTag2.
///
/// Integer codes match what the firmware reads from `imumode_set`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImuMode {
    /// Use only the orientation written to `robot_orientation_set`.
    #[default]
    ExternalImu = 0,
    /// Use the external orientation and seed the internal IMU with it.
    /// Used to zero the internal IMU.
    ExternalImuSeedInternal = 1,
    /// Use only the internal IMU.
    InternalImu = 2,
    /// Internal IMU, with MegaTag1 assisting convergence.
    InternalMt1Assisted = 3,
    /// Internal IMU, with the external IMU assisting convergence.
    InternalExternalAssisted = 4,
}

impl ImuMode {
    /// Every mode, in code order.
    pub const ALL: [ImuMode; 5] = [
        ImuMode::ExternalImu,
        ImuMode::ExternalImuSeedInternal,
        ImuMode::InternalImu,
        ImuMode::InternalMt1Assisted,
        ImuMode::InternalExternalAssisted,
    ];

    /// Value written to `imumode_set`.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Returns `None` for codes outside 0..=4.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ImuMode::ExternalImu),
            1 => Some(ImuMode::ExternalImuSeedInternal),
            2 => Some(ImuMode::InternalImu),
            3 => Some(ImuMode::InternalMt1Assisted),
            4 => Some(ImuMode::InternalExternalAssisted),
            _ => None,
        }
    }
}

/// Snapshot of the camera's internal IMU.
///
/// All zeros is the "no data" value. The accelerometer unit is not documented
/// by the firmware (g or m/s^2), so `accel_*` are passed through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImuRecord {
    /// Robot yaw, degrees.
    pub robot_yaw: f64,
    pub roll: f64,
    pub pitch: f64,
    /// IMU yaw, degrees.
    pub yaw: f64,
    /// Degrees per second.
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    /// Mode configured when the snapshot was read.
    pub mode: ImuMode,
}

impl ImuRecord {
    /// True when every measurement is zero.
    pub fn is_empty(&self) -> bool {
        [
            self.robot_yaw,
            self.roll,
            self.pitch,
            self.yaw,
            self.gyro_x,
            self.gyro_y,
            self.gyro_z,
            self.accel_x,
            self.accel_y,
            self.accel_z,
        ]
        .iter()
        .all(|v| *v == 0.0)
    }
}
