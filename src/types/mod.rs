//! Shared types used throughout the library.

use serde::{Deserialize, Serialize};

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Check whether this rectangle lies entirely inside a `width`x`height` image.
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    /// Check whether the pixel (x, y) is inside this rectangle.
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Player arm model.
///
/// Classic ("Steve") skins have 4 pixel wide arms, slim ("Alex") skins 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmModel {
    #[default]
    Classic,
    Slim,
}

impl ArmModel {
    pub fn from_slim(slim: bool) -> Self {
        if slim {
            ArmModel::Slim
        } else {
            ArmModel::Classic
        }
    }

    pub fn is_slim(&self) -> bool {
        matches!(self, ArmModel::Slim)
    }

    /// Human readable label used in pack metadata.
    pub fn label(&self) -> &'static str {
        match self {
            ArmModel::Classic => "Normal",
            ArmModel::Slim => "Slim",
        }
    }
}

/// Skin texture layout, determined by image height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinFormat {
    /// 64x32 skins from before 1.8: no second layer except the hat,
    /// and no separate left limbs.
    Legacy,
    /// 64x64 skins with overlay layers for every body part.
    Modern,
}

impl SkinFormat {
    pub const WIDTH: u32 = 64;

    /// Detect the format from image dimensions.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (64, 32) => Some(SkinFormat::Legacy),
            (64, 64) => Some(SkinFormat::Modern),
            _ => None,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            SkinFormat::Legacy => 32,
            SkinFormat::Modern => 64,
        }
    }
}
