use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a detected face, in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamps the rectangle to frame bounds.
    ///
    /// Returns `None` when the rectangle is degenerate or lies entirely
    /// outside the frame; callers skip such faces rather than propagate
    /// an error.
    pub fn clamped_to(&self, frame_width: u32, frame_height: u32) -> Option<FaceRect> {
        if self.is_degenerate() || self.x >= frame_width || self.y >= frame_height {
            return None;
        }
        let width = self.width.min(frame_width - self.x);
        let height = self.height.min(frame_height - self.y);
        if width == 0 || height == 0 {
            return None;
        }
        Some(FaceRect {
            x: self.x,
            y: self.y,
            width,
            height,
        })
    }

    /// Rectangle center in rectangle-relative coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}
