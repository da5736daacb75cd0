//! Resource pack archive writing.

use crate::error::{Result, TotemError};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub const MANIFEST_PATH: &str = "manifest.json";
pub const CUSTOM_TOTEM_PATH: &str = "textures/custom_totem/totem.png";
pub const ITEM_TEXTURE_PATH: &str = "textures/items/totem.png";
pub const PACK_ICON_PATH: &str = "pack_icon.png";
pub const GEOMETRY_PATH: &str = "models/entity/totem.geo.json";

/// Files that make up a totem resource pack.
#[derive(Debug, Clone)]
pub struct PackEntries<'a> {
    /// Serialized `manifest.json`.
    pub manifest: &'a str,
    /// Encoded totem texture, used for the item texture and the pack icon.
    pub totem_png: &'a [u8],
    /// Bytes stored at `textures/custom_totem/totem.png`.
    pub custom_totem_png: &'a [u8],
    /// Optional entity geometry JSON.
    pub geometry: Option<&'a str>,
}

/// Write the pack as an in-memory ZIP archive.
///
/// Entries get a fixed timestamp so the same inputs always yield the same
/// entry bytes.
pub fn write_pack(entries: &PackEntries<'_>) -> Result<Vec<u8>> {
    if let Some(geometry) = entries.geometry {
        serde_json::from_str::<serde_json::Value>(geometry)
            .map_err(|e| TotemError::InvalidGeometry(e.to_string()))?;
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let mut files: Vec<(&str, &[u8])> = vec![
        (MANIFEST_PATH, entries.manifest.as_bytes()),
        (CUSTOM_TOTEM_PATH, entries.custom_totem_png),
        (ITEM_TEXTURE_PATH, entries.totem_png),
        (PACK_ICON_PATH, entries.totem_png),
    ];
    if let Some(geometry) = entries.geometry {
        files.push((GEOMETRY_PATH, geometry.as_bytes()));
    }

    for (path, data) in files {
        zip.start_file(path, options)?;
        zip.write_all(data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
