//! Error types for ninepatch-core
//!
//! The only failure the core can produce is a render request that the
//! marker geometry cannot satisfy. Everything else (empty marks, malformed
//! fill runs) degrades to a valid degenerate result instead of erroring.

use thiserror::Error;

/// A requested output size the sliced grid cannot be scaled to.
///
/// The reported minimum is the integer floor of the computed bound, matching
/// the message format the reference nine-patch assets were validated against.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// Requested width below the minimum the markers allow
    #[error("width cannot be smaller than {0}")]
    Width(u32),

    /// Requested height below the minimum the markers allow
    #[error("height cannot be smaller than {0}")]
    Height(u32),

    /// No stretchable columns: only the source width renders
    #[error("width must be exactly {0} for an image with no stretchable columns")]
    FixedWidth(u32),

    /// No stretchable rows: only the source height renders
    #[error("height must be exactly {0} for an image with no stretchable rows")]
    FixedHeight(u32),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, ScaleError>;
