use crate::shared::frame::Frame;

/// Domain interface for whatever consumes processed RGBA frames.
///
/// Display presentation is outside this crate; presentation latency and
/// color management belong to the implementation.
pub trait FrameSink: Send {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
