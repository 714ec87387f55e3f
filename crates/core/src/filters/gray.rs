use crate::filters::ops::{gray_to_rgba, rgba_to_gray};
use crate::shared::frame::Frame;

/// Brightness factor for the gray filter: `1 - intensity/120`.
///
/// Stays strictly positive over the 0..=100 range (~0.17 at full
/// intensity), so higher intensity darkens but never blacks out.
pub fn brightness_factor(intensity: u8) -> f32 {
    1.0 - intensity as f32 / 120.0
}

/// Grayscale conversion followed by a brightness scale.
pub fn apply(src: &Frame, gray: &mut Frame, dst: &mut Frame, intensity: u8) {
    rgba_to_gray(src, gray);
    let factor = brightness_factor(intensity);
    if factor < 1.0 {
        for v in gray.data_mut() {
            *v = (*v as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    gray_to_rgba(gray, dst);
}
