//! Decode-time downsample planning
//!
//! Computes the power-of-two sample size a host should pass to its image
//! decoder so that the decoded bitmap lands near the requested target size.
//! Pure arithmetic; no pixel access.

/// Compute a power-of-two downsample factor for decoding.
///
/// Returns 1 when the source already fits the target box; otherwise doubles
/// the factor while the full source dimensions still cover the target at the
/// doubled factor. The result is always a power of two >= 1.
pub fn plan_sample_size(src_width: u32, src_height: u32, target_width: u32, target_height: u32) -> u32 {
    if src_width <= target_width && src_height <= target_height {
        return 1;
    }

    let target_width = target_width.max(1);
    let target_height = target_height.max(1);

    let mut factor = 1u32;
    while factor <= u32::MAX / 2
        && src_height / factor >= target_height
        && src_width / factor >= target_width
    {
        factor *= 2;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_photo() {
        assert_eq!(plan_sample_size(4000, 3000, 1024, 1024), 4);
    }

    #[test]
    fn test_source_fits_target() {
        assert_eq!(plan_sample_size(800, 600, 1024, 1024), 1);
        assert_eq!(plan_sample_size(1024, 1024, 1024, 1024), 1);
    }

    #[test]
    fn test_always_power_of_two() {
        for (w, h) in [(1u32, 1u32), (5000, 3), (3, 5000), (8192, 8192), (1920, 1080)] {
            let f = plan_sample_size(w, h, 512, 512);
            assert!(f >= 1);
            assert!(f.is_power_of_two(), "factor {f} for {w}x{h}");
        }
    }

    #[test]
    fn test_one_axis_small() {
        // Height never covers the target, no halving wanted
        assert_eq!(plan_sample_size(2048, 100, 1024, 1024), 1);
    }

    #[test]
    fn test_zero_target_does_not_hang() {
        assert!(plan_sample_size(4000, 3000, 0, 0) >= 1);
    }

    #[test]
    fn test_huge_source_tiny_target() {
        // The factor tops out at 2^31 instead of overflowing
        assert_eq!(plan_sample_size(3_000_000_000, 3_000_000_000, 1, 1), 1 << 31);
        assert_eq!(plan_sample_size(u32::MAX, u32::MAX, 1, 1), 1 << 31);
        assert!(plan_sample_size(u32::MAX, u32::MAX, 0, 0).is_power_of_two());
    }
}
