//! WASM bindings for skin-totem.
//!
//! This module provides JavaScript-friendly APIs for use in the browser.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// Converted totem and resource pack.
#[wasm_bindgen]
pub struct ConversionResult {
    totem_png: Vec<u8>,
    pack_data: Vec<u8>,
    file_name: String,
    pack_uuid: String,
}

#[wasm_bindgen]
impl ConversionResult {
    /// Get the 16x16 totem texture as PNG bytes.
    #[wasm_bindgen(getter)]
    pub fn totem_png(&self) -> Vec<u8> {
        self.totem_png.clone()
    }

    /// Get the `.mcpack` archive bytes.
    #[wasm_bindgen(getter)]
    pub fn pack_data(&self) -> Vec<u8> {
        self.pack_data.clone()
    }

    /// Get the suggested download file name.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    /// Get the generated pack identifier.
    #[wasm_bindgen(getter)]
    pub fn pack_uuid(&self) -> String {
        self.pack_uuid.clone()
    }

    /// Get the totem texture as a `Uint8Array` without an extra copy on the JS side.
    pub fn totem_png_array(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.totem_png.as_slice())
    }
}

/// Convert skin PNG bytes into a totem texture and resource pack.
///
/// `geometry` is an optional entity geometry JSON document bundled as
/// `models/entity/totem.geo.json`.
#[wasm_bindgen]
pub fn convert_skin(
    data: &[u8],
    slim: bool,
    geometry: Option<String>,
) -> Result<ConversionResult, JsError> {
    let mut config = crate::PackConfig::default().with_slim_arms(slim);
    if let Some(geometry) = geometry {
        config = config.with_entity_geometry(geometry);
    }

    let pack = crate::build_pack(data, &config).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(ConversionResult {
        totem_png: pack.totem_png,
        pack_data: pack.archive,
        file_name: pack.file_name.to_string(),
        pack_uuid: pack.manifest.header.uuid.to_string(),
    })
}

/// Convert skin PNG bytes into totem PNG bytes only.
#[wasm_bindgen]
pub fn render_totem(data: &[u8], slim: bool) -> Result<Vec<u8>, JsError> {
    let totem = crate::convert_skin(data, crate::ArmModel::from_slim(slim))
        .map_err(|e| JsError::new(&e.to_string()))?;
    totem.to_png().map_err(|e| JsError::new(&e.to_string()))
}
