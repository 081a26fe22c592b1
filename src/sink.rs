use crate::framebuffer::Framebuffer;
use crate::*;

use log::*;
use std::path::{Path, PathBuf};

/// Receives per-row progress from the renderer. Calls are serialized.
pub trait ProgressSink: Send {
    fn notify(&mut self, rows_done: usize, total_rows: usize);

    /// Checked after every completed row; `true` stops the render.
    fn cancelled(&self) -> bool {
        false
    }
}

pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn notify(&mut self, rows_done: usize, total_rows: usize) {
        info!("{}/{}", rows_done, total_rows);
    }
}

pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn notify(&mut self, _rows_done: usize, _total_rows: usize) {}
}

pub trait ImageSink {
    fn write(&mut self, image: &Framebuffer) -> Result<()>;
}

/// 8-bit RGB PNG writer.
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PngSink {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, image: &Framebuffer) -> Result<()> {
        let out = ::image::RgbImage::from_fn(image.w() as u32, image.h() as u32, |x, y| {
            ::image::Rgb(image.at(y as usize, x as usize).to_rgb8())
        });
        out.save_with_format(&self.path, ::image::ImageFormat::Png)?;
        info!("wrote {}", self.path.display());
        Ok(())
    }
}
