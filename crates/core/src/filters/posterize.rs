use crate::shared::frame::Frame;

/// Quantization level count for the posterize filter:
/// `max(2, floor(intensity / 25) + 2)`.
pub fn level_count(intensity: u8) -> u32 {
    (intensity as u32 / 25 + 2).max(2)
}

/// 256-entry lookup table mapping each value to its nearest quantized level.
pub fn build_lut(intensity: u8) -> [u8; 256] {
    let levels = level_count(intensity);
    let step = 255.0 / (levels - 1) as f64;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = ((i as f64 / step).round() * step).round().min(255.0) as u8;
    }
    lut
}

/// Per-channel lookup-table quantization.
pub fn apply(src: &Frame, dst: &mut Frame, intensity: u8) {
    let lut = build_lut(intensity);
    let out = dst.data_mut();
    for (&s, d) in src.data().iter().zip(out.iter_mut()) {
        *d = lut[s as usize];
    }
    dst.set_index(src.index());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 2)]
    #[case(24, 2)]
    #[case(25, 3)]
    #[case(50, 4)]
    #[case(75, 5)]
    #[case(100, 6)]
    fn test_level_count(#[case] intensity: u8, #[case] expected: u32) {
        assert_eq!(level_count(intensity), expected);
    }

    #[test]
    fn test_level_count_non_decreasing() {
        let mut prev = level_count(0);
        for intensity in 0..=100u8 {
            let levels = level_count(intensity);
            assert!(levels >= 2);
            assert!(levels >= prev);
            prev = levels;
        }
    }

    #[test]
    fn test_lut_endpoints_preserved() {
        for intensity in [0u8, 30, 60, 100] {
            let lut = build_lut(intensity);
            assert_eq!(lut[0], 0);
            assert_eq!(lut[255], 255);
        }
    }

    #[test]
    fn test_two_levels_is_binary() {
        let lut = build_lut(0);
        assert_eq!(lut[100], 0); // 100/255 rounds down
        assert_eq!(lut[200], 255);
    }

    #[test]
    fn test_lut_output_restricted_to_levels() {
        let lut = build_lut(50); // 4 levels, step 85
        for &v in lut.iter() {
            assert!(v == 0 || v == 85 || v == 170 || v == 255, "value {v}");
        }
    }

    #[test]
    fn test_apply_quantizes_all_channels() {
        let mut src = Frame::rgba(2, 2);
        src.data_mut().copy_from_slice(&[
            10, 90, 170, 255, 40, 130, 220, 255, 0, 85, 250, 255, 60, 100, 200, 255,
        ]);
        let mut dst = Frame::rgba(2, 2);
        apply(&src, &mut dst, 50); // step 85
        for &v in dst.data() {
            assert_eq!(v % 85, 0);
        }
    }
}
