/// Run face detection on every Nth frame; reuse cached results in between.
pub const DETECT_INTERVAL: usize = 4;

/// Minimum face size (square, pixels) passed to the detector.
pub const MIN_FACE_SIZE: u32 = 30;

/// Image pyramid scale factor passed to the detector.
pub const DETECT_SCALE_FACTOR: f64 = 1.1;

/// Minimum neighboring detections required to keep a candidate.
pub const DETECT_MIN_NEIGHBORS: u32 = 4;

/// The anonymization ellipse over-extends the detector's tight bounding
/// box so forehead/chin/ears fall inside the blurred area.
pub const ELLIPSE_SCALE: f64 = 1.25;
