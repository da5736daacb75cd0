//! Totem texture rendering.
//!
//! This module turns a decoded skin into the 16x16 item texture of a totem
//! of undying by replaying the region table over a transparent canvas.

mod blit;
pub mod regions;

pub use blit::{render, render_report, render_with, RenderReport};
pub use regions::{RegionMap, TextureRegion};

use crate::error::{Result, TotemError};
use image::ImageEncoder;

/// Width and height of the totem texture.
pub const TOTEM_SIZE: u32 = 16;

/// A rendered 16x16 totem texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotemImage {
    /// RGBA8 pixel data.
    pixels: Vec<u8>,
}

impl TotemImage {
    /// Create a fully transparent canvas.
    pub fn new() -> Self {
        Self {
            pixels: vec![0u8; (TOTEM_SIZE * TOTEM_SIZE * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        TOTEM_SIZE
    }

    pub fn height(&self) -> u32 {
        TOTEM_SIZE
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = Self::index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let idx = Self::index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }

    /// Check whether nothing has been drawn.
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks(4).all(|pixel| pixel[3] == 0)
    }

    /// Copy into an `image` buffer.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(TOTEM_SIZE, TOTEM_SIZE, self.pixels.clone())
            .unwrap_or_else(|| image::RgbaImage::new(TOTEM_SIZE, TOTEM_SIZE))
    }

    /// Export the totem as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder
            .write_image(
                &self.pixels,
                TOTEM_SIZE,
                TOTEM_SIZE,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| TotemError::Encoding(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }

    fn index(x: u32, y: u32) -> usize {
        ((y * TOTEM_SIZE + x) * 4) as usize
    }
}

impl Default for TotemImage {
    fn default() -> Self {
        Self::new()
    }
}
