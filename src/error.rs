//! Error types for skin to totem conversion.

use thiserror::Error;

/// Result type alias using TotemError.
pub type Result<T> = std::result::Result<T, TotemError>;

/// Main error type for conversion and packaging operations.
#[derive(Error, Debug)]
pub enum TotemError {
    /// The uploaded file could not be decoded into pixels.
    #[error("Unreadable image: {0}")]
    UnreadableImage(#[from] image::ImageError),

    /// The decoded image does not have a skin layout.
    #[error("Unsupported skin size {width}x{height} (expected 64x64 or 64x32)")]
    UnsupportedSkinSize { width: u32, height: u32 },

    /// Raw pixel data does not match the declared dimensions.
    #[error("Invalid pixel data: {0}")]
    InvalidPixelData(String),

    /// Failed to encode the finished totem.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Failed to write the ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to serialize or parse JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The supplied entity geometry is not a JSON document.
    #[error("Invalid entity geometry: {0}")]
    InvalidGeometry(String),
}
