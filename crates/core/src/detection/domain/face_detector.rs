use crate::shared::constants::{DETECT_MIN_NEIGHBORS, DETECT_SCALE_FACTOR, MIN_FACE_SIZE};
use crate::shared::face_rect::FaceRect;
use crate::shared::frame::Frame;

/// Tuning parameters forwarded to the classifier on every detection tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectOptions {
    pub scale_factor: f64,
    pub min_neighbors: u32,
    /// Minimum face size in pixels (square).
    pub min_size: u32,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            scale_factor: DETECT_SCALE_FACTOR,
            min_neighbors: DETECT_MIN_NEIGHBORS,
            min_size: MIN_FACE_SIZE,
        }
    }
}

/// Domain interface for face detection over a grayscale frame.
///
/// Implementations may be stateful, hence `&mut self`. The classifier
/// itself is a black box behind this seam; only the detect contract
/// matters to the rest of the pipeline.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        gray: &Frame,
        opts: &DetectOptions,
    ) -> Result<Vec<FaceRect>, Box<dyn std::error::Error>>;
}
