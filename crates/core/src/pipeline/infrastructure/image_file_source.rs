use std::path::{Path, PathBuf};

use crate::pipeline::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// Adapts an image file or a directory of numbered frames to the
/// [`FrameSource`] interface.
///
/// A single image behaves as a one-frame capture; a directory is read in
/// lexicographic order, so zero-padded frame numbering plays back in
/// sequence. Every frame is decoded to RGBA; all frames must share the
/// resolution of the first one.
pub struct ImageFileSource {
    paths: Vec<PathBuf>,
    cursor: usize,
    width: u32,
    height: u32,
}

impl ImageFileSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let paths = if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| has_image_extension(p))
                .collect();
            entries.sort();
            entries
        } else {
            vec![path.to_path_buf()]
        };

        let first = paths
            .first()
            .ok_or_else(|| format!("no image files found in {}", path.display()))?;
        let (width, height) = image::image_dimensions(first)?;
        log::info!(
            "frame source: {} frame(s) at {}x{} from {}",
            paths.len(),
            width,
            height,
            path.display()
        );

        Ok(Self {
            paths,
            cursor: 0,
            width,
            height,
        })
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

impl FrameSource for ImageFileSource {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn next_frame(&mut self, frame: &mut Frame) -> Result<bool, Box<dyn std::error::Error>> {
        let path = match self.paths.get(self.cursor) {
            Some(path) => path,
            None => return Ok(false),
        };

        let decoded = image::open(path)?.to_rgba8();
        if decoded.dimensions() != (self.width, self.height) {
            return Err(format!(
                "frame {} has resolution {}x{}, expected {}x{}",
                path.display(),
                decoded.width(),
                decoded.height(),
                self.width,
                self.height
            )
            .into());
        }

        frame.data_mut().copy_from_slice(decoded.as_raw());
        frame.set_index(self.cursor);
        self.cursor += 1;
        Ok(true)
    }
}
