//! Skin texture decoding.
//!
//! A skin is a 64x64 (or legacy 64x32) RGBA image with a fixed body-part
//! layout. This module only decodes and inspects skins; it never modifies them.

use crate::error::{Result, TotemError};
use crate::types::{Rect, SkinFormat};

/// A decoded player skin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinImage {
    width: u32,
    height: u32,
    format: SkinFormat,
    /// RGBA8 pixel data (4 bytes per pixel).
    pixels: Vec<u8>,
}

impl SkinImage {
    /// Create a skin from raw RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let format = SkinFormat::from_dimensions(width, height)
            .ok_or(TotemError::UnsupportedSkinSize { width, height })?;

        if pixels.len() != (width * height * 4) as usize {
            return Err(TotemError::InvalidPixelData(format!(
                "Expected {} bytes of RGBA data for a {}x{} skin, got {}",
                width * height * 4,
                width,
                height,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Create a fully transparent skin of the given format.
    pub fn blank(format: SkinFormat) -> Self {
        let width = SkinFormat::WIDTH;
        let height = format.height();
        Self {
            width,
            height,
            format,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    /// Create a skin from an already decoded image.
    pub fn from_rgba(image: image::RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Decode a skin from PNG bytes.
    pub fn from_png_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
        Self::from_rgba(img.to_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> SkinFormat {
        self.format
    }

    /// Raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Check whether a source rectangle can be sampled from this skin.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.fits_within(self.width, self.height)
    }

    /// Check if this skin has any transparent pixels.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks(4).any(|pixel| pixel[3] < 255)
    }

    /// Fill a rectangle with a solid color. Out of range pixels are ignored.
    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                let idx = ((y * self.width + x) * 4) as usize;
                self.pixels[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }
}
