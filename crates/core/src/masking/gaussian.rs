/// Precompute a normalized 1D Gaussian kernel of the given size.
///
/// `kernel_size` must be odd and >= 1. Sigma is derived as `kernel_size / 6.0`
/// (matching OpenCV's sigma=0 convention).
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let mut kernel: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel.iter().map(|&v| v as f32).collect()
}

/// Separable Gaussian blur over an interleaved-channel buffer, in place.
///
/// Edge handling clamps sample coordinates to the buffer (replicate
/// border). `temp` is resized as needed and reused across calls so the
/// per-face hot path stays allocation-free after warm-up.
pub fn blur_in_place(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    if kernel.len() <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = kernel.len() / 2;
    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data -> temp
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x + k).saturating_sub(half).min(width - 1);
                    acc += data[(row + sx) * channels + c] as f32 * w;
                }
                temp[(row + x) * channels + c] = acc;
            }
        }
    }

    // Vertical pass: temp -> data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y + k).saturating_sub(half).min(height - 1);
                    acc += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
