//! Seven-slot fiducial encoding:
//! `[id, txnc, tync, ta, distToCamera, distToRobot, ambiguity]`.

use super::frame::extract_entry;
use crate::fiducial::FiducialDetection;

/// Slots per fiducial.
pub const FIDUCIAL_LEN: usize = 7;

/// Packs one detection into its seven slots.
pub fn encode(fiducial: &FiducialDetection) -> [f64; FIDUCIAL_LEN] {
    [
        f64::from(fiducial.id),
        fiducial.txnc,
        fiducial.tync,
        fiducial.ta,
        fiducial.dist_to_camera,
        fiducial.dist_to_robot,
        fiducial.ambiguity,
    ]
}

/// Decodes the record starting at `base`.
///
/// Slots past the end of `data` read as zero, so a truncated buffer yields a
/// partially zeroed record. Callers that need a complete record must check
/// the length themselves.
pub fn decode(data: &[f64], base: usize) -> FiducialDetection {
    let at = |offset: usize| extract_entry(data, base.saturating_add(offset));
    FiducialDetection {
        // Truncates toward zero, saturating at the i32 bounds.
        id: at(0) as i32,
        txnc: at(1),
        tync: at(2),
        ta: at(3),
        dist_to_camera: at(4),
        dist_to_robot: at(5),
        ambiguity: at(6),
    }
}

/// Decodes the `rawfiducials` list form. Returns nothing unless the length is
/// a whole number of records.
pub fn decode_list(data: &[f64]) -> Vec<FiducialDetection> {
    if data.len() % FIDUCIAL_LEN != 0 {
        return Vec::new();
    }
    (0..data.len() / FIDUCIAL_LEN)
        .map(|i| decode(data, i * FIDUCIAL_LEN))
        .collect()
}

/// Concatenates the seven-slot form of every detection.
pub fn encode_list(fiducials: &[FiducialDetection]) -> Vec<f64> {
    let mut out = Vec::with_capacity(fiducials.len() * FIDUCIAL_LEN);
    for fiducial in fiducials {
        out.extend_from_slice(&encode(fiducial));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FiducialDetection {
        FiducialDetection::new(7, 2.5, -1.1, 0.08, 1.5, 1.2, 0.05)
    }

    #[test]
    fn test_encode_order() {
        assert_eq!(encode(&sample()), [7.0, 2.5, -1.1, 0.08, 1.5, 1.2, 0.05]);
    }

    #[test]
    fn test_decode_at_offset() {
        let mut data = vec![9.0, 9.0, 9.0];
        data.extend_from_slice(&encode(&sample()));
        assert_eq!(decode(&data, 3), sample());
    }

    #[test]
    fn test_decode_truncated_zero_fills() {
        let data = [4.0, 1.0, 2.0];
        let decoded = decode(&data, 0);
        assert_eq!(decoded, FiducialDetection::new(4, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(decode(&data, 10), FiducialDetection::default());
        assert_eq!(decode(&data, usize::MAX), FiducialDetection::default());
    }

    #[test]
    fn test_decode_id_truncates() {
        let decoded = decode(&[12.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 0);
        assert_eq!(decoded.id, 12);
        let decoded = decode(&[f64::NAN], 0);
        assert_eq!(decoded.id, 0);
    }

    #[test]
    fn test_decode_list() {
        let second = FiducialDetection::new(12, -4.0, 3.0, 0.2, 2.0, 2.1, 0.4);
        let data = encode_list(&[sample(), second]);
        assert_eq!(data.len(), 14);
        assert_eq!(decode_list(&data), vec![sample(), second]);
    }

    #[test]
    fn test_decode_list_rejects_partial_record() {
        let mut data = encode_list(&[sample()]);
        data.push(1.0);
        assert!(decode_list(&data).is_empty());
        assert!(decode_list(&[]).is_empty());
    }
}
