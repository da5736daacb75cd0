//! # Skin Totem
//!
//! A Rust library for turning Minecraft player skins into totem of undying
//! textures.
//!
//! ## Overview
//!
//! A 64x64 (or legacy 64x32) skin is sampled region by region into a 16x16
//! totem icon: face, torso, arms, palms and three segments per leg, each
//! with its second-layer overlay painted on top. The result can be exported
//! as a PNG or wrapped in an installable Bedrock resource pack (`.mcpack`).
//!
//! ## Quick Start
//!
//! ```ignore
//! use skin_totem::{build_pack, convert_skin, ArmModel, PackConfig};
//!
//! let skin_png = std::fs::read("steve.png")?;
//!
//! // Just the texture
//! let totem = convert_skin(&skin_png, ArmModel::Classic)?;
//! std::fs::write("totem.png", totem.to_png()?)?;
//!
//! // A full resource pack
//! let pack = build_pack(&skin_png, &PackConfig::default().with_slim_arms(true))?;
//! std::fs::write(pack.file_name, &pack.archive)?;
//! ```
//!
//! ## Lower level access
//!
//! The region tables and the blit engine are public, so a caller holding an
//! already decoded skin can render without any PNG round trip:
//!
//! ```ignore
//! use skin_totem::{render_with, RegionMap, SkinImage};
//!
//! let skin = SkinImage::from_rgba(decoded)?;
//! let totem = render_with(&skin, RegionMap::slim());
//! ```

pub mod error;
pub mod types;
pub mod skin;
pub mod totem;
pub mod pack;

// Re-export main types for convenience
pub use error::{Result, TotemError};
pub use types::{ArmModel, Rect, SkinFormat};
pub use skin::SkinImage;
pub use totem::{render, render_report, render_with, RegionMap, RenderReport, TextureRegion, TotemImage, TOTEM_SIZE};
pub use pack::{Manifest, PackConfig};

/// Decode a skin PNG and render its totem texture.
pub fn convert_skin(skin_png: &[u8], model: ArmModel) -> Result<TotemImage> {
    let skin = SkinImage::from_png_bytes(skin_png)?;
    Ok(render_with(&skin, RegionMap::for_model(model)))
}

/// A finished resource pack.
#[derive(Debug, Clone)]
pub struct PackOutput {
    /// The rendered totem.
    pub totem: TotemImage,
    /// The totem encoded as PNG, exactly as stored in the archive.
    pub totem_png: Vec<u8>,
    /// The manifest written into the archive.
    pub manifest: Manifest,
    /// ZIP archive bytes.
    pub archive: Vec<u8>,
    /// Suggested download file name.
    pub file_name: &'static str,
}

/// Convert a skin PNG and package the result as a resource pack.
///
/// Every call generates new pack identifiers; the texture bytes only depend
/// on the skin and the arm model.
pub fn build_pack(skin_png: &[u8], config: &PackConfig) -> Result<PackOutput> {
    let skin = SkinImage::from_png_bytes(skin_png)?;
    let (totem, report) = render_report(&skin, RegionMap::for_model(config.arm_model));
    if !report.skipped.is_empty() {
        log::info!(
            "{:?} skin: {} regions have no source pixels",
            skin.format(),
            report.skipped.len()
        );
    }

    let totem_png = totem.to_png()?;
    let manifest = Manifest::generate(config);
    let manifest_json = manifest.to_json()?;

    let custom_totem_png: &[u8] = if config.include_source_skin {
        skin_png
    } else {
        &totem_png
    };

    let archive = pack::write_pack(&pack::PackEntries {
        manifest: &manifest_json,
        totem_png: &totem_png,
        custom_totem_png,
        geometry: config.entity_geometry.as_deref(),
    })?;

    log::info!(
        "Built {} ({} bytes, pack id {})",
        config.file_name(),
        archive.len(),
        manifest.header.uuid
    );

    Ok(PackOutput {
        totem,
        totem_png,
        manifest,
        archive,
        file_name: config.file_name(),
    })
}

#[cfg(feature = "wasm")]
pub mod wasm;
