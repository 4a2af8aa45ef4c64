//! IMU encoding:
//! `[robotYaw, roll, pitch, yaw, gyroX, gyroY, gyroZ, accelX, accelY, accelZ]`.

use tracing::debug;

use crate::imu::{ImuMode, ImuRecord};

/// Slots in an IMU array.
pub const IMU_LEN: usize = 10;

/// Combines the `imu` array with the separately published mode code.
///
/// Arrays shorter than [`IMU_LEN`] give the all-zero record; the mode is
/// still attached. Unknown mode codes fall back to [`ImuMode::default`].
pub fn decode(data: &[f64], mode_code: i32) -> ImuRecord {
    let mode = ImuMode::from_code(mode_code).unwrap_or_else(|| {
        debug!("unknown IMU mode code {}, using {:?}", mode_code, ImuMode::default());
        ImuMode::default()
    });

    let Some(v) = data.get(..IMU_LEN) else {
        return ImuRecord {
            mode,
            ..Default::default()
        };
    };

    ImuRecord {
        robot_yaw: v[0],
        roll: v[1],
        pitch: v[2],
        yaw: v[3],
        gyro_x: v[4],
        gyro_y: v[5],
        gyro_z: v[6],
        accel_x: v[7],
        accel_y: v[8],
        accel_z: v[9],
        mode,
    }
}

/// The mode is not part of the array and is dropped.
pub fn encode(record: &ImuRecord) -> [f64; IMU_LEN] {
    [
        record.robot_yaw,
        record.roll,
        record.pitch,
        record.yaw,
        record.gyro_x,
        record.gyro_y,
        record.gyro_z,
        record.accel_x,
        record.accel_y,
        record.accel_z,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; IMU_LEN] = [90.0, 1.0, -2.0, 89.5, 0.1, 0.2, 15.0, 0.01, -0.02, 0.98];

    #[test]
    fn test_decode_field_order() {
        let record = decode(&DATA, 2);
        assert_eq!(record.robot_yaw, 90.0);
        assert_eq!(record.roll, 1.0);
        assert_eq!(record.pitch, -2.0);
        assert_eq!(record.yaw, 89.5);
        assert_eq!(record.gyro_z, 15.0);
        assert_eq!(record.accel_z, 0.98);
        assert_eq!(record.mode, ImuMode::InternalImu);
        assert_eq!(encode(&record), DATA);
    }

    #[test]
    fn test_short_array_gives_zero_record() {
        let record = decode(&DATA[..9], 4);
        assert!(record.is_empty());
        assert_eq!(record.mode, ImuMode::InternalExternalAssisted);
        assert!(decode(&[], 0).is_empty());
    }

    #[test]
    fn test_extra_slots_ignored() {
        let mut data = DATA.to_vec();
        data.push(42.0);
        assert_eq!(decode(&data, 0), decode(&DATA, 0));
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        assert_eq!(decode(&DATA, 17).mode, ImuMode::ExternalImu);
    }
}
