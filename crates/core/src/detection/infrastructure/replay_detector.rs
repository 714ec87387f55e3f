use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::face_detector::{DetectOptions, FaceDetector};
use crate::shared::face_rect::FaceRect;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum ReplayLoadError {
    #[error("failed to open face file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse face file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct FaceFileEntry {
    frame: usize,
    faces: Vec<FaceRect>,
}

/// Replays pre-computed face rectangles by frame index.
///
/// Stands in for a live classifier when processing recorded frame
/// sequences: a sidecar JSON file maps frame indices to rectangles, and
/// frames without an entry yield no faces. Rectangles smaller than the
/// requested minimum size are dropped, mirroring the live detect
/// contract.
#[derive(Debug)]
pub struct ReplayDetector {
    by_frame: HashMap<usize, Vec<FaceRect>>,
}

impl ReplayDetector {
    pub fn new(by_frame: HashMap<usize, Vec<FaceRect>>) -> Self {
        Self { by_frame }
    }

    /// Loads a face file: a JSON array of `{ "frame": n, "faces": [...] }`.
    pub fn from_json_file(path: &Path) -> Result<Self, ReplayLoadError> {
        let file = File::open(path).map_err(|source| ReplayLoadError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<FaceFileEntry> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ReplayLoadError::Parse {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        let mut by_frame = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_frame.insert(entry.frame, entry.faces);
        }
        log::info!("loaded face annotations for {} frame(s)", by_frame.len());
        Ok(Self { by_frame })
    }
}

impl FaceDetector for ReplayDetector {
    fn detect(
        &mut self,
        gray: &Frame,
        opts: &DetectOptions,
    ) -> Result<Vec<FaceRect>, Box<dyn std::error::Error>> {
        let faces = self
            .by_frame
            .get(&gray.index())
            .map(|faces| {
                faces
                    .iter()
                    .filter(|f| f.width >= opts.min_size && f.height >= opts.min_size)
                    .copied()
                    .collect()
            })
            .unwrap_or_default();
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn gray_frame(index: usize) -> Frame {
        let mut f = Frame::gray(64, 48);
        f.set_index(index);
        f
    }

    #[test]
    fn test_returns_faces_for_known_frame() {
        let faces = vec![FaceRect::new(10, 10, 40, 40)];
        let mut detector = ReplayDetector::new(HashMap::from([(3, faces.clone())]));
        let result = detector
            .detect(&gray_frame(3), &DetectOptions::default())
            .unwrap();
        assert_eq!(result, faces);
    }

    #[test]
    fn test_unknown_frame_yields_no_faces() {
        let mut detector = ReplayDetector::new(HashMap::new());
        let result = detector
            .detect(&gray_frame(0), &DetectOptions::default())
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_min_size_filters_small_faces() {
        let faces = vec![FaceRect::new(0, 0, 20, 20), FaceRect::new(0, 0, 40, 40)];
        let mut detector = ReplayDetector::new(HashMap::from([(0, faces)]));
        let result = detector
            .detect(&gray_frame(0), &DetectOptions::default())
            .unwrap();
        assert_eq!(result, vec![FaceRect::new(0, 0, 40, 40)]);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faces.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"frame": 0, "faces": [{{"x": 100, "y": 100, "width": 80, "height": 80}}]}},
                {{"frame": 4, "faces": []}}]"#
        )
        .unwrap();

        let mut detector = ReplayDetector::from_json_file(&path).unwrap();
        let opts = DetectOptions::default();
        assert_eq!(
            detector.detect(&gray_frame(0), &opts).unwrap(),
            vec![FaceRect::new(100, 100, 80, 80)]
        );
        assert!(detector.detect(&gray_frame(4), &opts).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = ReplayDetector::from_json_file(Path::new("/nonexistent/faces.json"))
            .unwrap_err();
        assert!(matches!(err, ReplayLoadError::Open { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faces.json");
        std::fs::write(&path, "not json").unwrap();
        let err = ReplayDetector::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ReplayLoadError::Parse { .. }));
    }
}
