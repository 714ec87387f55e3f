pub mod replay_detector;
pub mod throttled_detector;
