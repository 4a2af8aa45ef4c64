//! Records exchanged with a vision camera over a key-value telemetry bus, and
//! the codecs that pack them into the flat `f64` arrays the bus carries.
//!
//! Everything here is pure: each decode or encode call allocates its output
//! and touches no shared state, so callers may decode the same array from
//! several threads without coordination.
//!
//! ```rust
//! use visionbus_common::{codec, FiducialDetection, PoseEstimate, Pose2d, Rotation2d, TelemetryVariant};
//!
//! let estimate = PoseEstimate {
//!     pose: Pose2d::new(1.2, -3.4, Rotation2d::from_degrees(90.0)),
//!     latency_ms: 20.0,
//!     tag_count: 1,
//!     fiducials: vec![FiducialDetection::new(7, 2.5, -1.1, 0.08, 1.5, 1.2, 0.05)],
//!     ..PoseEstimate::empty(TelemetryVariant::BlueMegaTag2)
//! };
//!
//! let data = codec::estimate::encode(&estimate);
//! assert_eq!(data.len(), 18);
//!
//! let decoded = codec::estimate::decode(TelemetryVariant::BlueMegaTag2, &data, 5_000_000);
//! assert_eq!(decoded, estimate);
//! assert!((decoded.timestamp_seconds - 4.98).abs() < 1e-9);
//! ```

pub mod codec;
pub mod estimate;
pub mod fiducial;
pub mod imu;
pub mod keys;
pub mod pose;
pub mod variant;

pub use estimate::PoseEstimate;
pub use fiducial::FiducialDetection;
pub use imu::{ImuMode, ImuRecord};
pub use keys::PoseSpace;
pub use pose::{Pose2d, Pose3d, Rotation2d, Rotation3d, Translation2d, Translation3d};
pub use variant::{Algorithm, Alliance, TelemetryVariant, UnknownVariantKey};
