use crate::filters::ops::{jet_color, rgba_to_gray};
use crate::shared::frame::Frame;

/// Blend ratio for the colorize filter: `intensity / 100`.
pub fn blend_ratio(intensity: u8) -> f32 {
    intensity.min(100) as f32 / 100.0
}

/// Grayscale-to-pseudocolor palette mapping blended with the source.
///
/// At intensity 0 the output equals the source; at 100 it is the full
/// jet palette of the luma channel.
pub fn apply(src: &Frame, gray: &mut Frame, dst: &mut Frame, intensity: u8) {
    rgba_to_gray(src, gray);
    let t = blend_ratio(intensity);
    let inv = 1.0 - t;

    let out = dst.data_mut();
    for ((pixel, &g), out_pixel) in src
        .data()
        .chunks_exact(4)
        .zip(gray.data().iter())
        .zip(out.chunks_exact_mut(4))
    {
        let palette = jet_color(g);
        for c in 0..3 {
            out_pixel[c] =
                (pixel[c] as f32 * inv + palette[c] as f32 * t).round().min(255.0) as u8;
        }
        out_pixel[3] = 255;
    }
    dst.set_index(src.index());
}
