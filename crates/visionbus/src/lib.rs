#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/*!
Typed access to a vision camera that publishes its results to a key-value
telemetry bus.

A [`VisionBus`] wraps any [`TableStore`] and hands out [`Camera`] views, one
per camera table. Reads on a camera never fail: a missing or unreadable entry
gives the record's empty value (zero, an empty list, the identity pose, or an
estimate with `tag_count == 0`). Writes return a [`StoreError`] when the store
rejects them.

Array entries that carry pose estimates are read through cached handles so
the value and its arrival time come back together, which is what the capture
timestamp on a [`PoseEstimate`] is computed from.

## Example
```rust
use visionbus::{MemoryStore, TelemetryVariant, VisionBus};

let bus = VisionBus::new(MemoryStore::new());
let camera = bus.camera("");
assert_eq!(camera.name(), "limelight");

// Nothing published yet
let estimate = camera.bot_pose_estimate(TelemetryVariant::BlueMegaTag2);
assert!(!estimate.is_valid());

camera.set_robot_yaw(90.0)?;
camera.set_fiducial_downscaling_override(2.0)?;
assert_eq!(camera.double("fiducial_downscale_set"), 3.0);
# Ok::<(), visionbus::StoreError>(())
```
*/

mod bus;
mod camera;
/// Thread-safe cache of resolved entry handles.
pub mod entries;
/// Errors raised by stores and settings loading.
pub mod error;
#[cfg(feature = "memory")]
/// An in-process store for tests and simulation.
pub mod memory;
/// Bus configuration, loadable from JSON.
pub mod settings;
/// The table store capability a bus runs on.
pub mod store;

pub use bus::VisionBus;
pub use camera::Camera;
pub use entries::EntryCache;
pub use error::StoreError;
#[cfg(feature = "memory")]
pub use memory::{MemoryEntry, MemoryStore};
pub use settings::BusSettings;
pub use store::{ArrayEntry, TableStore, TimestampedArray};

pub use visionbus_common::*;
