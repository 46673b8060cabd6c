use math::prelude::P;

/// Longest secret for which every byte string encodes below the modulus:
/// 256^3 - 1 < P < 256^4 - 1.
pub const MAX_SECRET_BYTES: usize = 3;

/// Share x-coordinates are the nonzero field elements 1..P-1, so at most
/// P-1 shares can ever be issued.
pub const MAX_SHARE_COUNT: usize = (P - 1) as usize;

/// A (threshold, share_count) pair is usable iff reconstruction needs at
/// least one share, no more shares than are issued, and every share gets
/// a distinct nonzero x-coordinate.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    threshold >= 1 && threshold <= share_count && share_count <= MAX_SHARE_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_configs() {
        assert!(validate_threshold_config(3, 5));
        assert!(validate_threshold_config(1, 1));
        assert!(validate_threshold_config(2, 2));
        assert!(validate_threshold_config(10, 15));
    }

    #[test]
    fn rejects_zero_threshold() {
        assert!(!validate_threshold_config(0, 5));
        assert!(!validate_threshold_config(0, 0));
    }

    #[test]
    fn rejects_threshold_above_share_count() {
        assert!(!validate_threshold_config(5, 3));
        assert!(!validate_threshold_config(6, 5));
        assert!(!validate_threshold_config(1, 0));
    }

    #[test]
    fn rejects_share_counts_past_the_field_size() {
        assert!(validate_threshold_config(2, MAX_SHARE_COUNT));
        assert!(!validate_threshold_config(2, MAX_SHARE_COUNT + 1));
    }

    #[test]
    fn every_three_byte_value_is_below_the_modulus() {
        assert!((256u64.pow(MAX_SECRET_BYTES as u32) - 1) < P as u64);
        assert!((256u64.pow(MAX_SECRET_BYTES as u32 + 1) - 1) >= P as u64);
    }
}
