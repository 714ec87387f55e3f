use thiserror::Error;

/// Failures surfaced by a single tick's filter application.
///
/// The frame loop treats every variant as non-fatal: the tick is logged
/// and skipped, and the previous output is shown again.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("buffer layout mismatch: expected {expected_width}x{expected_height}x{expected_channels}, got {width}x{height}x{channels}")]
    BufferMismatch {
        expected_width: u32,
        expected_height: u32,
        expected_channels: u8,
        width: u32,
        height: u32,
        channels: u8,
    },

    #[error("face detector unavailable; faceblur is disabled")]
    DetectorUnavailable,
}
