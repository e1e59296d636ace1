//! Encoders turning a [`FrameBuffer`] into an image file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use image::{Rgb, RgbImage};

use crate::renderer::FrameBuffer;

/// How linear channel values become bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMapping {
    /// Saturate at 1.0.
    #[default]
    Clamp,
    /// Divide by the frame's brightest channel.
    Scale,
}

impl ColorMapping {
    pub fn byte(&self, channel: f32, max: f32) -> u8 {
        let value = match self {
            ColorMapping::Clamp => channel.min(1.0),
            ColorMapping::Scale => channel / max,
        };
        // `as` saturates, negatives land on 0
        (value * 255.0) as u8
    }

    pub fn rgb(&self, color: glam::Vec3, max: f32) -> [u8; 3] {
        [
            self.byte(color.x, max),
            self.byte(color.y, max),
            self.byte(color.z, max),
        ]
    }
}

pub trait ImageSink {
    fn write(&self, frame: &FrameBuffer) -> Result<()>;
}

/// 24-bit uncompressed Targa, bottom-left origin, BGR pixels.
#[derive(Debug, Clone)]
pub struct TgaSink {
    path: PathBuf,
    mapping: ColorMapping,
}

impl TgaSink {
    pub fn new(path: impl Into<PathBuf>, mapping: ColorMapping) -> Self {
        Self {
            path: path.into(),
            mapping,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(width: u16, height: u16) -> [u8; 18] {
        let [width_lo, width_hi] = width.to_le_bytes();
        let [height_lo, height_hi] = height.to_le_bytes();
        #[rustfmt::skip]
        let header = [
            0, // id length
            0, // no color map
            2, // uncompressed truecolor
            0, 0, 0, 0, 0, // color map spec
            0, 0, // x origin
            0, 0, // y origin
            width_lo, width_hi,
            height_lo, height_hi,
            24, // bits per pixel
            0, // descriptor
        ];
        header
    }

    pub fn encode<W: Write>(&self, frame: &FrameBuffer, out: &mut W) -> Result<()> {
        let too_large = || format!("{}x{} does not fit in a targa header", frame.width(), frame.height());
        let width = u16::try_from(frame.width()).with_context(too_large)?;
        let height = u16::try_from(frame.height()).with_context(too_large)?;

        out.write_all(&Self::header(width, height))?;
        let max = frame.max();
        for row in frame.rows() {
            for &color in row {
                let [r, g, b] = self.mapping.rgb(color, max);
                out.write_all(&[b, g, r])?;
            }
        }
        Ok(())
    }
}

impl ImageSink for TgaSink {
    fn write(&self, frame: &FrameBuffer) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        let mut out = BufWriter::new(file);
        self.encode(frame, &mut out)
            .with_context(|| format!("failed to write targa to {}", self.path.display()))?;
        out.flush()?;
        tracing::info!("wrote {}", self.path.display());
        Ok(())
    }
}

/// PNG through the `image` crate, same byte mapping as [`TgaSink`].
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
    mapping: ColorMapping,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>, mapping: ColorMapping) -> Self {
        Self {
            path: path.into(),
            mapping,
        }
    }

    /// Top-down image, frame row 0 ends up as the last image row.
    pub fn to_image(&self, frame: &FrameBuffer) -> RgbImage {
        let max = frame.max();
        let height = frame.height();
        RgbImage::from_fn(frame.width(), height, |x, y| {
            Rgb(self.mapping.rgb(frame.pixel(x, height - 1 - y), max))
        })
    }
}

impl ImageSink for PngSink {
    fn write(&self, frame: &FrameBuffer) -> Result<()> {
        self.to_image(frame)
            .save_with_format(&self.path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write png to {}", self.path.display()))?;
        tracing::info!("wrote {}", self.path.display());
        Ok(())
    }
}

/// Sink picked from the file extension; anything but `.png` is written as
/// targa.
pub fn sink_for_path(path: &Path, mapping: ColorMapping) -> Box<dyn ImageSink> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        Box::new(PngSink::new(path, mapping))
    } else {
        Box::new(TgaSink::new(path, mapping))
    }
}

/// Rejects paths whose parent directory is missing before any rendering work.
pub fn check_writable(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure!(parent.is_dir(), "output directory {} does not exist", parent.display());
    }
    Ok(())
}
