//! Debug artifacts
//!
//! Intermediate images can be handed to a [`DebugSink`]. Sinks must not
//! block or fail the request that produced the image.

use crate::RecogResult;
use digitscan_core::Pix;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Receives intermediate images
pub trait DebugSink: Send + Sync {
    /// Accept an image tagged with a short name such as `"input"` or `"tile"`
    fn submit(&self, tag: &str, pix: &Pix);
}

/// Writes each image as `<dir>/<tag>_<unix-millis>.png` on a background thread
#[derive(Debug, Clone)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one image synchronously and return its path
    pub fn write_now(&self, tag: &str, pix: &Pix) -> RecogResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(digitscan_io::IoError::from)?;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        let path = self.dir.join(format!("{tag}_{millis}.png"));
        digitscan_io::write_image_png(pix, &path)?;
        debug!(path = %path.display(), "debug image written");
        Ok(path)
    }
}

impl DebugSink for PngDirSink {
    fn submit(&self, tag: &str, pix: &Pix) {
        let sink = self.clone();
        let tag = tag.to_string();
        let pix = pix.clone();
        std::thread::spawn(move || {
            if let Err(e) = sink.write_now(&tag, &pix) {
                warn!(tag = %tag, error = %e, "failed to write debug image");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitscan_core::PixelDepth;

    #[test]
    fn test_write_now() {
        let dir = std::env::temp_dir().join(format!("digitscan-sink-{}", std::process::id()));
        let sink = PngDirSink::new(&dir);
        let pix = Pix::new(28, 28, PixelDepth::Bit8).unwrap();
        let path = sink.write_now("tile", &pix).unwrap();
        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("tile_") && name.ends_with(".png"));
        let back = digitscan_io::read_image(&path).unwrap();
        assert_eq!((back.width(), back.height()), (28, 28));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_dir_is_error() {
        let file = std::env::temp_dir().join(format!("digitscan-file-{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();
        let sink = PngDirSink::new(file.join("sub"));
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(sink.write_now("tile", &pix).is_err());
        // the background variant only logs
        sink.submit("tile", &pix);
        let _ = std::fs::remove_file(&file);
    }
}
