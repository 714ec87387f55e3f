use crate::detection::domain::face_detector::{DetectOptions, FaceDetector};
use crate::shared::face_rect::FaceRect;
use crate::shared::frame::Frame;

/// Runs the expensive detector every N frames and caches the results.
///
/// Detection ticks overwrite the cache wholesale (an empty result is
/// valid and means "no faces"); intermediate frames reuse the cached
/// rectangles verbatim. Faces do not move far across a few frames at
/// typical camera rates, so the staleness is invisible while the
/// throughput win is large.
///
/// A failing detector never takes the frame loop down: the error is
/// logged and the last-known-good cache stays in place.
pub struct ThrottledDetector {
    inner: Box<dyn FaceDetector>,
    interval: usize,
    opts: DetectOptions,
    frame_count: usize,
    cache: Vec<FaceRect>,
}

impl ThrottledDetector {
    pub fn new(
        inner: Box<dyn FaceDetector>,
        interval: usize,
        opts: DetectOptions,
    ) -> Result<Self, &'static str> {
        if interval < 1 {
            return Err("detect interval must be >= 1");
        }
        Ok(Self {
            inner,
            interval,
            opts,
            frame_count: 0,
            cache: Vec::new(),
        })
    }

    /// Advances the frame counter and returns the current face cache.
    ///
    /// Invokes the underlying detector only on every `interval`-th call
    /// (the first call included).
    pub fn maybe_detect(&mut self, gray: &Frame) -> &[FaceRect] {
        if self.frame_count % self.interval == 0 {
            match self.inner.detect(gray, &self.opts) {
                Ok(faces) => {
                    log::debug!(
                        "detection tick at frame {}: {} face(s)",
                        self.frame_count,
                        faces.len()
                    );
                    self.cache = faces;
                }
                Err(e) => {
                    log::warn!(
                        "face detection failed at frame {}, keeping {} cached face(s): {e}",
                        self.frame_count,
                        self.cache.len()
                    );
                }
            }
        }
        self.frame_count += 1;
        &self.cache
    }

    pub fn cached_faces(&self) -> &[FaceRect] {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct ScriptedDetector {
        results: Vec<Vec<FaceRect>>,
        calls: Arc<Mutex<Vec<usize>>>,
    }

    impl ScriptedDetector {
        fn new(results: Vec<Vec<FaceRect>>) -> (Self, Arc<Mutex<Vec<usize>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    results,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl FaceDetector for ScriptedDetector {
        fn detect(
            &mut self,
            gray: &Frame,
            _opts: &DetectOptions,
        ) -> Result<Vec<FaceRect>, Box<dyn std::error::Error>> {
            let mut calls = self.calls.lock().unwrap();
            let n = calls.len();
            calls.push(gray.index());
            Ok(self.results[n % self.results.len()].clone())
        }
    }

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(
            &mut self,
            _gray: &Frame,
            _opts: &DetectOptions,
        ) -> Result<Vec<FaceRect>, Box<dyn std::error::Error>> {
            Err("classifier not loaded".into())
        }
    }

    fn gray_frame(index: usize) -> Frame {
        let mut f = Frame::gray(64, 48);
        f.set_index(index);
        f
    }

    fn face(x: u32) -> FaceRect {
        FaceRect::new(x, 10, 30, 30)
    }

    #[test]
    fn test_detects_exactly_on_interval_boundaries() {
        let (inner, calls) = ScriptedDetector::new(vec![vec![face(0)]]);
        let mut throttled =
            ThrottledDetector::new(Box::new(inner), 4, DetectOptions::default()).unwrap();

        for i in 0..8 {
            throttled.maybe_detect(&gray_frame(i));
        }
        assert_eq!(*calls.lock().unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_intermediate_frames_reuse_detection_tick_result() {
        let (inner, _calls) =
            ScriptedDetector::new(vec![vec![face(10)], vec![face(200)]]);
        let mut throttled =
            ThrottledDetector::new(Box::new(inner), 4, DetectOptions::default()).unwrap();

        let first: Vec<_> = throttled.maybe_detect(&gray_frame(0)).to_vec();
        assert_eq!(first, vec![face(10)]);
        for i in 1..4 {
            assert_eq!(throttled.maybe_detect(&gray_frame(i)), &first[..]);
        }
        let second: Vec<_> = throttled.maybe_detect(&gray_frame(4)).to_vec();
        assert_eq!(second, vec![face(200)]);
        for i in 5..8 {
            assert_eq!(throttled.maybe_detect(&gray_frame(i)), &second[..]);
        }
    }

    #[test]
    fn test_empty_detection_replaces_cache() {
        let (inner, _calls) = ScriptedDetector::new(vec![vec![face(10)], vec![]]);
        let mut throttled =
            ThrottledDetector::new(Box::new(inner), 2, DetectOptions::default()).unwrap();

        assert_eq!(throttled.maybe_detect(&gray_frame(0)).len(), 1);
        assert_eq!(throttled.maybe_detect(&gray_frame(1)).len(), 1);
        // Next detection tick finds nothing: cache is wiped, not merged.
        assert!(throttled.maybe_detect(&gray_frame(2)).is_empty());
        assert!(throttled.maybe_detect(&gray_frame(3)).is_empty());
    }

    #[test]
    fn test_detector_failure_keeps_last_known_good() {
        struct FlakyDetector {
            calls: usize,
        }
        impl FaceDetector for FlakyDetector {
            fn detect(
                &mut self,
                _gray: &Frame,
                _opts: &DetectOptions,
            ) -> Result<Vec<FaceRect>, Box<dyn std::error::Error>> {
                self.calls += 1;
                if self.calls == 1 {
                    Ok(vec![FaceRect::new(5, 5, 30, 30)])
                } else {
                    Err("transient failure".into())
                }
            }
        }

        let mut throttled = ThrottledDetector::new(
            Box::new(FlakyDetector { calls: 0 }),
            2,
            DetectOptions::default(),
        )
        .unwrap();

        assert_eq!(throttled.maybe_detect(&gray_frame(0)).len(), 1);
        throttled.maybe_detect(&gray_frame(1));
        // Detection tick fails: the previous cache survives.
        assert_eq!(throttled.maybe_detect(&gray_frame(2)).len(), 1);
        assert_eq!(throttled.cached_faces().len(), 1);
    }

    #[test]
    fn test_always_failing_detector_yields_empty_cache() {
        let mut throttled =
            ThrottledDetector::new(Box::new(FailingDetector), 4, DetectOptions::default())
                .unwrap();
        for i in 0..8 {
            assert!(throttled.maybe_detect(&gray_frame(i)).is_empty());
        }
    }

    #[test]
    fn test_interval_one_detects_every_frame() {
        let (inner, calls) = ScriptedDetector::new(vec![vec![face(0)]]);
        let mut throttled =
            ThrottledDetector::new(Box::new(inner), 1, DetectOptions::default()).unwrap();
        for i in 0..3 {
            throttled.maybe_detect(&gray_frame(i));
        }
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_interval_zero_rejected() {
        let (inner, _calls) = ScriptedDetector::new(vec![vec![]]);
        assert!(ThrottledDetector::new(Box::new(inner), 0, DetectOptions::default()).is_err());
    }
}
