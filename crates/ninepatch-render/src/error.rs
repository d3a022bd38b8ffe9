//! Error types for ninepatch-render

use ninepatch_core::ScaleError;
use thiserror::Error;

/// Errors surfaced by loading, rendering and exporting nine-patches.
#[derive(Error, Debug)]
pub enum NinepatchError {
    /// Source bytes are not a decodable image
    #[error("decode error: {0}")]
    Decode(String),

    /// A rendered bitmap could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// Source image too small to carry the one-pixel marker border
    #[error("source image too small for a marker border: {width}x{height}")]
    SourceTooSmall { width: u32, height: u32 },

    /// Requested render size outside what the markers allow
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for render operations
pub type NinepatchResult<T> = std::result::Result<T, NinepatchError>;
