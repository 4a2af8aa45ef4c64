use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fiducial::FiducialDetection;
use crate::pose::Pose2d;
use crate::variant::TelemetryVariant;

/// A robot pose estimate read from one of the `botpose_*` entries.
///
/// Built fresh on every decode. `fiducials.len() == tag_count` whenever the
/// detail block was decoded; a frame whose length disagrees with its header
/// keeps the header values and carries no fiducials.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoseEstimate {
    /// Robot pose on the field.
    pub pose: Pose2d,
    /// Estimated capture time: bus arrival time minus `latency_ms`.
    pub timestamp_seconds: f64,
    /// Pipeline plus capture latency, milliseconds.
    pub latency_ms: f64,
    /// Number of tags used for the solve.
    pub tag_count: i32,
    /// Largest distance between any two tags used, meters.
    pub tag_span: f64,
    /// Mean camera to tag distance, meters.
    pub avg_tag_dist: f64,
    /// Mean tag area as a fraction of the image.
    pub avg_tag_area: f64,
    /// Per-tag detail. Empty when the frame failed its length check.
    pub fiducials: Vec<FiducialDetection>,
    /// True for MegaTag2 estimates.
    pub is_algorithm_v2: bool,
    /// Entry this estimate was read from.
    pub variant: TelemetryVariant,
}

impl PoseEstimate {
    /// The "no data yet" estimate for `variant`: identity pose, zero metrics,
    /// no fiducials.
    pub fn empty(variant: TelemetryVariant) -> Self {
        Self {
            is_algorithm_v2: variant.is_algorithm_v2(),
            variant,
            ..Default::default()
        }
    }

    /// True when at least one tag contributed to the estimate.
    pub fn is_valid(&self) -> bool {
        !self.fiducials.is_empty()
    }

    /// Ids of the contributing tags, in frame order.
    pub fn fiducial_ids(&self) -> Vec<i32> {
        self.fiducials.iter().map(|f| f.id).collect()
    }
}

// Capture time is derived on decode, so it is left out of equality.
impl PartialEq for PoseEstimate {
    fn eq(&self, other: &Self) -> bool {
        self.pose == other.pose
            && self.latency_ms == other.latency_ms
            && self.tag_count == other.tag_count
            && self.tag_span == other.tag_span
            && self.avg_tag_dist == other.avg_tag_dist
            && self.avg_tag_area == other.avg_tag_area
            && self.fiducials == other.fiducials
            && self.is_algorithm_v2 == other.is_algorithm_v2
            && self.variant == other.variant
    }
}

impl fmt::Display for PoseEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoseEstimate {{ pose: ({:.3}, {:.3}, {:.2} deg), timestamp_seconds: {}, latency_ms: {}, \
             tag_count: {}, tag_span: {}, avg_tag_dist: {}, avg_tag_area: {}, fiducials: {:?}, \
             is_algorithm_v2: {}, variant: {} }}",
            self.pose.x(),
            self.pose.y(),
            self.pose.rotation.degrees(),
            self.timestamp_seconds,
            self.latency_ms,
            self.tag_count,
            self.tag_span,
            self.avg_tag_dist,
            self.avg_tag_area,
            self.fiducial_ids(),
            self.is_algorithm_v2,
            self.variant,
        )
    }
}
