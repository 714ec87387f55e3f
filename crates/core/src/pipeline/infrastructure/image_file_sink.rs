use std::path::{Path, PathBuf};

use crate::pipeline::domain::frame_sink::FrameSink;
use crate::shared::frame::Frame;

enum SinkTarget {
    /// Every presented frame overwrites this file (single-image runs).
    File(PathBuf),
    /// Frames land as `frame_NNNNNN.png` inside this directory.
    Directory(PathBuf),
}

/// Writes presented frames to PNG files via the `image` crate.
pub struct ImageFileSink {
    target: SinkTarget,
}

impl ImageFileSink {
    pub fn to_file(path: &Path) -> Self {
        Self {
            target: SinkTarget::File(path.to_path_buf()),
        }
    }

    pub fn to_directory(path: &Path) -> Self {
        Self {
            target: SinkTarget::Directory(path.to_path_buf()),
        }
    }
}

impl FrameSink for ImageFileSink {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let path = match &self.target {
            SinkTarget::File(path) => path.clone(),
            SinkTarget::Directory(dir) => dir.join(format!("frame_{:06}.png", frame.index())),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbaImage::from_raw(
            frame.width(),
            frame.height(),
            frame.data().to_vec(),
        )
        .ok_or("frame data does not match its dimensions")?;
        img.save(&path)?;
        Ok(())
    }
}
