//! `manifest.json` generation.

use super::{PackConfig, VersionTriple};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bedrock resource pack manifest (format version 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub description: String,
    pub name: String,
    pub uuid: Uuid,
    pub version: VersionTriple,
    pub min_engine_version: VersionTriple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: Uuid,
    pub version: VersionTriple,
}

impl Manifest {
    /// Build a manifest with freshly generated identifiers.
    pub fn generate(config: &PackConfig) -> Self {
        Self::with_ids(config, Uuid::new_v4(), Uuid::new_v4())
    }

    /// Build a manifest with the given header and module identifiers.
    pub fn with_ids(config: &PackConfig, header_id: Uuid, module_id: Uuid) -> Self {
        Self {
            format_version: 2,
            header: ManifestHeader {
                description: config.pack_description(),
                name: config.pack_name(),
                uuid: header_id,
                version: config.version,
                min_engine_version: config.min_engine_version,
            },
            modules: vec![ManifestModule {
                description: format!("{} totem model resources", config.arm_model.label()),
                module_type: "resources".to_string(),
                uuid: module_id,
                version: config.version,
            }],
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
