use crate::masking::alpha_mask::fill_feathered_ellipse;
use crate::masking::gaussian::{blur_in_place, gaussian_kernel_1d};
use crate::shared::face_rect::FaceRect;
use crate::shared::frame::Frame;

/// Maps the user intensity (0..=100) to the Gaussian kernel size used for
/// face anonymization: `k = floor(intensity * 0.6) + 5`, bumped to the
/// next odd value when even. Always a positive odd integer >= 5.
pub fn blur_kernel_size(intensity: u8) -> usize {
    let mut k = (intensity as f64 * 0.6).floor() as usize + 5;
    if k % 2 == 0 {
        k += 1;
    }
    k
}

/// Blurs elliptical face regions into a frame with a feathered edge.
///
/// Scratch buffers (ROI copy, blurred copy, alpha mask, blur temp) are
/// owned here and reused face to face, so steady-state processing does
/// not allocate. The 1D kernel is cached and rebuilt only when the
/// intensity-derived size changes.
pub struct FaceAnonymizer {
    kernel: Vec<f32>,
    kernel_size: usize,
    roi: Vec<u8>,
    blurred: Vec<u8>,
    mask: Vec<f32>,
    blur_temp: Vec<f32>,
}

impl FaceAnonymizer {
    pub fn new() -> Self {
        Self {
            kernel: Vec::new(),
            kernel_size: 0,
            roi: Vec::new(),
            blurred: Vec::new(),
            mask: Vec::new(),
            blur_temp: Vec::new(),
        }
    }

    /// Anonymizes one face region in place.
    ///
    /// Out-of-bounds rectangles are clamped to the frame; degenerate
    /// rectangles are skipped.
    pub fn anonymize(&mut self, frame: &mut Frame, rect: &FaceRect, intensity: u8) {
        let clamped = match rect.clamped_to(frame.width(), frame.height()) {
            Some(r) => r,
            None => {
                log::debug!(
                    "skipping degenerate or out-of-bounds face rect {:?} on frame {}",
                    rect,
                    frame.index()
                );
                return;
            }
        };

        let k = blur_kernel_size(intensity);
        if k != self.kernel_size {
            self.kernel = gaussian_kernel_1d(k);
            self.kernel_size = k;
        }

        let channels = frame.channels() as usize;
        let frame_width = frame.width() as usize;
        let rw = clamped.width as usize;
        let rh = clamped.height as usize;
        let rx = clamped.x as usize;
        let ry = clamped.y as usize;

        // Original ROI stays untouched in `roi` until compositing; the
        // blur runs on a separate copy.
        self.roi.resize(rw * rh * channels, 0);
        let data = frame.data_mut();
        for row in 0..rh {
            let src = ((ry + row) * frame_width + rx) * channels;
            let dst = row * rw * channels;
            self.roi[dst..dst + rw * channels].copy_from_slice(&data[src..src + rw * channels]);
        }
        self.blurred.clear();
        self.blurred.extend_from_slice(&self.roi);
        blur_in_place(
            &mut self.blurred,
            rw,
            rh,
            channels,
            &self.kernel,
            &mut self.blur_temp,
        );

        fill_feathered_ellipse(&mut self.mask, &clamped);

        // Per-pixel, per-channel blend: original*(1-alpha) + blurred*alpha.
        for row in 0..rh {
            for col in 0..rw {
                let alpha = self.mask[row * rw + col];
                if alpha <= 0.0 {
                    continue;
                }
                let roi_off = (row * rw + col) * channels;
                let frame_off = ((ry + row) * frame_width + rx + col) * channels;
                for c in 0..channels {
                    let orig = self.roi[roi_off + c] as f32;
                    let blur = self.blurred[roi_off + c] as f32;
                    let blended = orig * (1.0 - alpha) + blur * alpha;
                    data[frame_off + c] = blended.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

impl Default for FaceAnonymizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gradient_frame(width: u32, height: u32) -> Frame {
        let mut frame = Frame::rgba(width, height);
        let data = frame.data_mut();
        for y in 0..height as usize {
            for x in 0..width as usize {
                let off = (y * width as usize + x) * 4;
                data[off] = (x * 7 % 256) as u8;
                data[off + 1] = (y * 13 % 256) as u8;
                data[off + 2] = ((x + y) % 256) as u8;
                data[off + 3] = 255;
            }
        }
        frame
    }

    #[rstest]
    #[case(0, 5)]
    #[case(1, 5)]
    #[case(10, 11)]
    #[case(50, 35)]
    #[case(100, 65)]
    fn test_kernel_size_spot_values(#[case] intensity: u8, #[case] expected: usize) {
        assert_eq!(blur_kernel_size(intensity), expected);
    }

    #[test]
    fn test_kernel_size_always_odd_and_at_least_five() {
        for intensity in 0..=100u8 {
            let k = blur_kernel_size(intensity);
            assert!(k >= 5, "k={k} at intensity {intensity}");
            assert_eq!(k % 2, 1, "k={k} even at intensity {intensity}");
        }
    }

    #[test]
    fn test_anonymize_modifies_center_not_corner() {
        let mut frame = gradient_frame(200, 200);
        let original = frame.data().to_vec();
        let rect = FaceRect::new(50, 50, 80, 80);

        let mut anon = FaceAnonymizer::new();
        anon.anonymize(&mut frame, &rect, 80);

        // Ellipse center gets the full blur.
        let center = frame.pixel_offset(90, 90);
        assert_ne!(&frame.data()[center..center + 3], &original[center..center + 3]);
        // Rect corner (alpha 0) and pixels outside the rect are untouched.
        let corner = frame.pixel_offset(50, 50);
        assert_eq!(&frame.data()[corner..corner + 4], &original[corner..corner + 4]);
        let outside = frame.pixel_offset(10, 10);
        assert_eq!(&frame.data()[outside..outside + 4], &original[outside..outside + 4]);
    }

    #[test]
    fn test_degenerate_rect_skipped() {
        let mut frame = gradient_frame(100, 100);
        let original = frame.data().to_vec();
        let mut anon = FaceAnonymizer::new();
        anon.anonymize(&mut frame, &FaceRect::new(10, 10, 0, 50), 50);
        assert_eq!(frame.data(), &original[..]);
    }

    #[test]
    fn test_out_of_bounds_rect_clamped() {
        let mut frame = gradient_frame(100, 100);
        let mut anon = FaceAnonymizer::new();
        // Extends past both edges; must not panic and must still blur.
        anon.anonymize(&mut frame, &FaceRect::new(70, 70, 60, 60), 50);
    }

    #[test]
    fn test_uniform_region_survives_anonymization() {
        // Blurring a flat color then feather-blending it changes nothing.
        let mut frame = Frame::rgba(100, 100);
        frame.data_mut().fill(90);
        let original = frame.data().to_vec();
        let mut anon = FaceAnonymizer::new();
        anon.anonymize(&mut frame, &FaceRect::new(20, 20, 40, 40), 100);
        for (&got, &want) in frame.data().iter().zip(original.iter()) {
            assert!((got as i32 - want as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_alpha_extremes_roundtrip() {
        // alpha == 0 everywhere keeps the original; alpha == 1 yields the
        // blurred copy. Exercised directly against the blend formula.
        let orig = 200.0f32;
        let blur = 40.0f32;
        assert_eq!((orig * (1.0 - 0.0) + blur * 0.0).round() as u8, 200);
        assert_eq!((orig * (1.0 - 1.0) + blur * 1.0).round() as u8, 40);
    }

    #[test]
    fn test_kernel_cached_across_calls() {
        let mut frame = gradient_frame(100, 100);
        let mut anon = FaceAnonymizer::new();
        anon.anonymize(&mut frame, &FaceRect::new(10, 10, 30, 30), 50);
        let ptr = anon.kernel.as_ptr();
        anon.anonymize(&mut frame, &FaceRect::new(40, 40, 30, 30), 50);
        assert_eq!(anon.kernel.as_ptr(), ptr);
        assert_eq!(anon.kernel_size, 35);
    }
}
