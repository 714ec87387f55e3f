use crate::shared::frame::Frame;

/// Domain interface for whatever supplies RGBA frames, one per tick.
///
/// Camera capture is outside this crate; file-backed implementations
/// stand in for it. A source guarantees a fixed resolution for its whole
/// lifetime and indexes frames monotonically from 0.
pub trait FrameSource: Send {
    /// Fixed (width, height) of every frame this source yields.
    fn resolution(&self) -> (u32, u32);

    /// Fills `frame` with the next frame's pixels, or returns `Ok(false)`
    /// when the source is exhausted. `frame` must already have the
    /// source's resolution and RGBA layout.
    fn next_frame(&mut self, frame: &mut Frame) -> Result<bool, Box<dyn std::error::Error>>;
}
