//! Pose-estimate encoding.
//!
//! An 11-slot header followed by one 7-slot block per fiducial:
//!
//! ```text
//! [x, y, z, roll, pitch, yaw, latencyMs, tagCount, tagSpan, avgTagDist, avgTagArea,
//!  id, txnc, tync, ta, distToCamera, distToRobot, ambiguity, ...]
//! ```

use tracing::debug;

use super::fiducial::{self, FIDUCIAL_LEN};
use super::frame::{self, POSE_LEN, extract_entry};
use crate::estimate::PoseEstimate;
use crate::variant::TelemetryVariant;

/// Slots before the first fiducial block.
pub const HEADER_LEN: usize = 11;

const LATENCY: usize = 6;
const TAG_COUNT: usize = 7;
const TAG_SPAN: usize = 8;
const AVG_TAG_DIST: usize = 9;
const AVG_TAG_AREA: usize = 10;

/// Array length implied by a header tag count, or `None` when no array can
/// satisfy it.
pub fn expected_len(tag_count: i32) -> Option<usize> {
    let count = usize::try_from(tag_count).ok()?;
    count
        .checked_mul(FIDUCIAL_LEN)
        .and_then(|n| n.checked_add(HEADER_LEN))
}

/// Estimated capture time in seconds.
///
/// The bus stamps arrival time in microseconds; the camera's reported latency
/// is subtracted to get back to exposure time.
pub fn capture_timestamp_seconds(raw_timestamp_micros: i64, latency_ms: f64) -> f64 {
    raw_timestamp_micros as f64 / 1_000_000.0 - latency_ms / 1000.0
}

/// Decodes a pose-estimate array published for `variant`.
///
/// Never fails:
/// - an empty array gives [`PoseEstimate::empty`];
/// - missing header slots read as zero;
/// - a length that disagrees with the header tag count keeps the header and
///   drops the fiducial detail.
pub fn decode(variant: TelemetryVariant, data: &[f64], raw_timestamp_micros: i64) -> PoseEstimate {
    if data.is_empty() {
        return PoseEstimate::empty(variant);
    }

    let latency_ms = extract_entry(data, LATENCY);
    let tag_count = extract_entry(data, TAG_COUNT) as i32;

    let fiducials = match expected_len(tag_count) {
        Some(len) if len == data.len() => (0..tag_count as usize)
            .map(|i| fiducial::decode(data, HEADER_LEN + i * FIDUCIAL_LEN))
            .collect(),
        expected => {
            debug!(
                "{}: array length {} does not match tag count {} (expected {:?}), dropping fiducials",
                variant,
                data.len(),
                tag_count,
                expected
            );
            Vec::new()
        }
    };

    PoseEstimate {
        pose: frame::pose2d_from_array(data),
        timestamp_seconds: capture_timestamp_seconds(raw_timestamp_micros, latency_ms),
        latency_ms,
        tag_count,
        tag_span: extract_entry(data, TAG_SPAN),
        avg_tag_dist: extract_entry(data, AVG_TAG_DIST),
        avg_tag_area: extract_entry(data, AVG_TAG_AREA),
        fiducials,
        is_algorithm_v2: variant.is_algorithm_v2(),
        variant,
    }
}

/// Flattens `estimate` for publishing.
///
/// The tag-count slot is written from `estimate.fiducials.len()`, not from
/// `estimate.tag_count`, so the output always satisfies its own header.
pub fn encode(estimate: &PoseEstimate) -> Vec<f64> {
    let count = estimate.fiducials.len();
    let mut out = Vec::with_capacity(HEADER_LEN + FIDUCIAL_LEN * count);

    out.extend_from_slice(&frame::pose2d_to_array(&estimate.pose));
    debug_assert_eq!(out.len(), POSE_LEN);
    out.push(estimate.latency_ms);
    out.push(count as f64);
    out.push(estimate.tag_span);
    out.push(estimate.avg_tag_dist);
    out.push(estimate.avg_tag_area);

    for fiducial in &estimate.fiducials {
        out.extend_from_slice(&fiducial::encode(fiducial));
    }
    out
}
