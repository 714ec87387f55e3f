use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::detection::domain::face_detector::{DetectOptions, FaceDetector};
use crate::detection::infrastructure::throttled_detector::ThrottledDetector;
use crate::filters::cartoon::{self, CartoonScratch};
use crate::filters::error::FilterError;
use crate::filters::kind::FilterKind;
use crate::filters::{colorize, gray, noise, ops, posterize};
use crate::masking::anonymizer::FaceAnonymizer;
use crate::shared::frame::Frame;

/// Throttled detection plus feathered blur, run once per cached face.
struct FacePipeline {
    detector: ThrottledDetector,
    anonymizer: FaceAnonymizer,
}

/// Applies a selected effect to a source frame, writing the result into a
/// pre-sized destination frame.
///
/// All scratch buffers (grayscale/edge planes, blur temps, the RNG) are
/// allocated once for a fixed resolution and reused every tick. The face
/// pipeline is optional: when the detector failed to initialize the rest
/// of the filter set keeps working and only faceblur reports an error.
pub struct FilterEngine {
    width: u32,
    height: u32,
    gray: Frame,
    cartoon: CartoonScratch,
    rng: StdRng,
    face: Option<FacePipeline>,
}

impl FilterEngine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            gray: Frame::gray(width, height),
            cartoon: CartoonScratch::new(width, height),
            rng: StdRng::from_os_rng(),
            face: None,
        }
    }

    /// Wires a face detector behind the detection throttler, enabling the
    /// faceblur filter.
    pub fn attach_face_pipeline(
        &mut self,
        detector: Box<dyn FaceDetector>,
        interval: usize,
    ) -> Result<(), &'static str> {
        let throttled = ThrottledDetector::new(detector, interval, DetectOptions::default())?;
        self.face = Some(FacePipeline {
            detector: throttled,
            anonymizer: FaceAnonymizer::new(),
        });
        Ok(())
    }

    pub fn has_face_pipeline(&self) -> bool {
        self.face.is_some()
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Runs one filter over `src` into `dst`.
    ///
    /// Both frames must match the engine's fixed RGBA resolution;
    /// intensity above 100 is clamped. faceblur is the only stateful
    /// filter (its face cache advances once per call).
    pub fn apply(
        &mut self,
        kind: FilterKind,
        src: &Frame,
        dst: &mut Frame,
        intensity: u8,
    ) -> Result<(), FilterError> {
        self.check_layout(src)?;
        self.check_layout(dst)?;
        let intensity = intensity.min(100);

        match kind {
            FilterKind::None => dst.copy_from(src),
            FilterKind::Gray => gray::apply(src, &mut self.gray, dst, intensity),
            FilterKind::Noisy => noise::apply(src, dst, intensity, &mut self.rng),
            FilterKind::Colorize => colorize::apply(src, &mut self.gray, dst, intensity),
            FilterKind::Cartoon => {
                cartoon::apply(src, &mut self.gray, &mut self.cartoon, dst, intensity)
            }
            FilterKind::Posterize => posterize::apply(src, dst, intensity),
            FilterKind::FaceBlur => self.apply_face_blur(src, dst, intensity)?,
        }
        Ok(())
    }

    fn apply_face_blur(
        &mut self,
        src: &Frame,
        dst: &mut Frame,
        intensity: u8,
    ) -> Result<(), FilterError> {
        let FacePipeline {
            detector,
            anonymizer,
        } = match self.face.as_mut() {
            Some(pipeline) => pipeline,
            None => return Err(FilterError::DetectorUnavailable),
        };

        ops::rgba_to_gray(src, &mut self.gray);
        let faces = detector.maybe_detect(&self.gray);

        dst.copy_from(src);
        // Overlapping faces blend sequentially in cache order; the last
        // one wins in the overlap, which is an accepted artifact.
        for face in faces {
            anonymizer.anonymize(dst, face, intensity);
        }
        Ok(())
    }

    fn check_layout(&self, frame: &Frame) -> Result<(), FilterError> {
        if frame.width() != self.width || frame.height() != self.height || frame.channels() != 4
        {
            return Err(FilterError::BufferMismatch {
                expected_width: self.width,
                expected_height: self.height,
                expected_channels: 4,
                width: frame.width(),
                height: frame.height(),
                channels: frame.channels(),
            });
        }
        Ok(())
    }
}
