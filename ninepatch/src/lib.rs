//! Ninepatch - Slice and scale nine-patch bitmaps
//!
//! A nine-patch is a bitmap with marker pixels on its border encoding
//! which regions stretch when the image is resized and where arbitrary
//! content fits. This crate slices such a bitmap once and renders it at
//! any size at or above the marker-derived minimum, stretching only the
//! marked tiles.
//!
//! # Example
//!
//! ```no_run
//! use ninepatch::Ninepatch;
//!
//! let patch = Ninepatch::open("button.9.png")?;
//! let bitmap = patch.render(200, 60)?;
//! bitmap.save("button_200x60.png").unwrap();
//! # Ok::<(), ninepatch::NinepatchError>(())
//! ```

// Re-export core types (geometry and planning)
pub use ninepatch_core::{
    Axis, AxisMarks, ContentArea, Distributor, MARKER_COLOR, Marks, PerAxis, Run, ScaleError,
    ScalePlan, TileGrid, TileMetrics, cut_points, find_marks, is_stretchable,
};

// Re-export the render surface
pub use ninepatch_render::{Ninepatch, NinepatchError, NinepatchResult, RenderCache, compress_tile};
