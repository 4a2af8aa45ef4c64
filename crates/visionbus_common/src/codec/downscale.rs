//! Fiducial detection downscale factor -> firmware control code.

/// Code that leaves downscaling to the active pipeline.
pub const PIPELINE_CONTROL: i32 = 0;

const TABLE: [(f32, i32); 5] = [(1.0, 1), (1.5, 2), (2.0, 3), (3.0, 4), (4.0, 5)];

/// Maps one of the canonical factors (1.0, 1.5, 2.0, 3.0, 4.0) to its code.
///
/// Matching is exact; anything else, including near misses, gives
/// [`PIPELINE_CONTROL`].
pub fn quantize(factor: f32) -> i32 {
    TABLE
        .iter()
        .find(|(k, _)| *k == factor)
        .map_or(PIPELINE_CONTROL, |(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_factors() {
        assert_eq!(quantize(1.0), 1);
        assert_eq!(quantize(1.5), 2);
        assert_eq!(quantize(2.0), 3);
        assert_eq!(quantize(3.0), 4);
        assert_eq!(quantize(4.0), 5);
    }

    #[test]
    fn test_other_values_use_pipeline() {
        assert_eq!(quantize(0.37), PIPELINE_CONTROL);
        assert_eq!(quantize(0.0), PIPELINE_CONTROL);
        assert_eq!(quantize(2.0001), PIPELINE_CONTROL);
        assert_eq!(quantize(f32::NAN), PIPELINE_CONTROL);
    }
}
