use crate::filters::ops::{adaptive_threshold_mean, median_blur, rgba_to_gray};
use crate::masking::gaussian::{blur_in_place, gaussian_kernel_1d};
use crate::shared::frame::Frame;

/// Neighborhood size for the adaptive edge threshold.
const EDGE_BLOCK_SIZE: usize = 9;

/// Smoothing kernel for the cartoon filter:
/// `max(3, floor(intensity/10) * 2 + 1)`, always odd.
pub fn smoothing_kernel_size(intensity: u8) -> usize {
    ((intensity as usize / 10) * 2 + 1).max(3)
}

/// Edge threshold constant: `intensity / 10`.
pub fn edge_threshold(intensity: u8) -> f64 {
    intensity as f64 / 10.0
}

/// Scratch buffers for the cartoon filter, allocated once per resolution.
pub struct CartoonScratch {
    smoothed: Frame,
    edges: Frame,
    median_window: Vec<u8>,
    kernel: Vec<f32>,
    kernel_size: usize,
    blur_temp: Vec<f32>,
}

impl CartoonScratch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            smoothed: Frame::gray(width, height),
            edges: Frame::gray(width, height),
            median_window: Vec::new(),
            kernel: Vec::new(),
            kernel_size: 0,
            blur_temp: Vec::new(),
        }
    }
}

/// Cartoon effect: median-smoothed luma drives an adaptive edge mask that
/// is ANDed onto a Gaussian-softened copy of the color image. Edge pixels
/// (mask 0) go black, everything else keeps the softened color.
pub fn apply(
    src: &Frame,
    gray: &mut Frame,
    scratch: &mut CartoonScratch,
    dst: &mut Frame,
    intensity: u8,
) {
    let k = smoothing_kernel_size(intensity);
    let width = src.width() as usize;
    let height = src.height() as usize;

    rgba_to_gray(src, gray);
    median_blur(
        gray.data(),
        scratch.smoothed.data_mut(),
        width,
        height,
        k,
        &mut scratch.median_window,
    );
    adaptive_threshold_mean(
        scratch.smoothed.data(),
        scratch.edges.data_mut(),
        width,
        height,
        EDGE_BLOCK_SIZE,
        edge_threshold(intensity),
    );

    dst.copy_from(src);
    if k != scratch.kernel_size {
        scratch.kernel = gaussian_kernel_1d(k);
        scratch.kernel_size = k;
    }
    blur_in_place(
        dst.data_mut(),
        width,
        height,
        4,
        &scratch.kernel,
        &mut scratch.blur_temp,
    );

    // Edge mask AND: the mask is 0 or 255 per pixel, so this either
    // blanks the pixel or leaves the blurred color untouched.
    let out = dst.data_mut();
    for (i, &edge) in scratch.edges.data().iter().enumerate() {
        if edge == 0 {
            let off = i * 4;
            out[off] = 0;
            out[off + 1] = 0;
            out[off + 2] = 0;
        }
    }
}
