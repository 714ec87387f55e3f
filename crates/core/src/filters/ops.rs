//! Shared pixel operations used by several filters.

use crate::shared::frame::Frame;

/// RGBA to single-channel grayscale using the Rec.601 luma weights.
pub fn rgba_to_gray(src: &Frame, gray: &mut Frame) {
    debug_assert_eq!(src.channels(), 4);
    debug_assert_eq!(gray.channels(), 1);
    let out = gray.data_mut();
    for (pixel, g) in src.data().chunks_exact(4).zip(out.iter_mut()) {
        let luma =
            0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
        *g = luma.round().clamp(0.0, 255.0) as u8;
    }
    gray.set_index(src.index());
}

/// Expands a grayscale frame to RGBA with opaque alpha.
pub fn gray_to_rgba(gray: &Frame, dst: &mut Frame) {
    debug_assert_eq!(gray.channels(), 1);
    debug_assert_eq!(dst.channels(), 4);
    let out = dst.data_mut();
    for (&g, pixel) in gray.data().iter().zip(out.chunks_exact_mut(4)) {
        pixel[0] = g;
        pixel[1] = g;
        pixel[2] = g;
        pixel[3] = 255;
    }
    dst.set_index(gray.index());
}

/// Square median filter over a single-channel buffer, replicate borders.
///
/// `kernel_size` must be odd. `window` is a reusable scratch vector for
/// the per-pixel neighborhood.
pub fn median_blur(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    kernel_size: usize,
    window: &mut Vec<u8>,
) {
    debug_assert_eq!(src.len(), width * height);
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(kernel_size % 2 == 1);
    if kernel_size <= 1 {
        dst.copy_from_slice(src);
        return;
    }
    let half = (kernel_size / 2) as isize;

    for y in 0..height as isize {
        for x in 0..width as isize {
            window.clear();
            for dy in -half..=half {
                let sy = (y + dy).clamp(0, height as isize - 1) as usize;
                for dx in -half..=half {
                    let sx = (x + dx).clamp(0, width as isize - 1) as usize;
                    window.push(src[sy * width + sx]);
                }
            }
            let mid = window.len() / 2;
            let (_, median, _) = window.select_nth_unstable(mid);
            dst[y as usize * width + x as usize] = *median;
        }
    }
}

/// Adaptive mean threshold: a pixel becomes 255 when it exceeds the mean
/// of its `block_size` x `block_size` neighborhood minus `c`, else 0.
pub fn adaptive_threshold_mean(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    block_size: usize,
    c: f64,
) {
    debug_assert_eq!(src.len(), width * height);
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(block_size % 2 == 1);
    let half = (block_size / 2) as isize;
    let samples = (block_size * block_size) as f64;

    for y in 0..height as isize {
        for x in 0..width as isize {
            let mut sum = 0u32;
            for dy in -half..=half {
                let sy = (y + dy).clamp(0, height as isize - 1) as usize;
                for dx in -half..=half {
                    let sx = (x + dx).clamp(0, width as isize - 1) as usize;
                    sum += src[sy * width + sx] as u32;
                }
            }
            let threshold = sum as f64 / samples - c;
            let idx = y as usize * width + x as usize;
            dst[idx] = if (src[idx] as f64) > threshold { 255 } else { 0 };
        }
    }
}

/// Jet pseudocolor palette entry for a grayscale value: dark blue through
/// cyan, yellow and red, as RGB.
pub fn jet_color(value: u8) -> [u8; 3] {
    let t = value as f64 / 255.0;
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [
        channel(1.5 - (4.0 * t - 3.0).abs()),
        channel(1.5 - (4.0 * t - 2.0).abs()),
        channel(1.5 - (4.0 * t - 1.0).abs()),
    ]
}
