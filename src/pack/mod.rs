//! Bedrock resource pack assembly.
//!
//! The rendered totem is written three times into the pack: as the totem
//! item texture, as the pack icon, and (unless the uploaded skin is kept)
//! as the custom totem texture.

pub mod manifest;
pub mod writer;

pub use manifest::{Manifest, ManifestHeader, ManifestModule};
pub use writer::{write_pack, PackEntries};

use crate::types::ArmModel;
use serde::{Deserialize, Serialize};

/// Semantic version triple used throughout the manifest.
pub type VersionTriple = [u32; 3];

/// Options controlling pack generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Arm width used both for sampling and for pack naming.
    pub arm_model: ArmModel,
    /// Pack name shown in game. Derived from the arm model when unset.
    pub name: Option<String>,
    /// Pack description. Derived from the arm model when unset.
    pub description: Option<String>,
    /// Pack and module version.
    pub version: VersionTriple,
    /// Minimum Bedrock engine version.
    pub min_engine_version: VersionTriple,
    /// Store the uploaded skin as `textures/custom_totem/totem.png`.
    pub include_source_skin: bool,
    /// Entity geometry stored as `models/entity/totem.geo.json`.
    #[serde(skip)]
    pub entity_geometry: Option<String>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            arm_model: ArmModel::Classic,
            name: None,
            description: None,
            version: [1, 0, 0],
            min_engine_version: [1, 16, 0],
            include_source_skin: true,
            entity_geometry: None,
        }
    }
}

impl PackConfig {
    /// Use the slim (3 pixel) arm table.
    pub fn with_slim_arms(mut self, slim: bool) -> Self {
        self.arm_model = ArmModel::from_slim(slim);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an entity geometry JSON document.
    pub fn with_entity_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.entity_geometry = Some(geometry.into());
        self
    }

    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name shown in the in-game pack list.
    pub fn pack_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None if self.arm_model.is_slim() => "§gCustom Totem (Slim) §7".to_string(),
            None => "§gCustom Totem §7".to_string(),
        }
    }

    pub fn pack_description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("{} totem model", self.arm_model.label()),
        }
    }

    /// Download file name for the archive.
    pub fn file_name(&self) -> &'static str {
        if self.arm_model.is_slim() {
            "custom_totem_slim.mcpack"
        } else {
            "custom_totem.mcpack"
        }
    }
}
