//! ninepatch-core - Slicing and scale planning for nine-patch bitmaps
//!
//! A nine-patch is a bitmap whose border pixels encode how it scales: runs
//! of pure opaque black on the top and left border name the stretchable
//! regions, runs on the bottom and right border name the content area.
//! This crate provides the pipeline from raw pixels to a render plan:
//!
//! - [`find_marks`] - scan the border lines for marker runs
//! - [`cut_points`] - turn scale marks into slice boundaries
//! - [`TileGrid`] / [`TileMetrics`] - cut the bitmap and measure the grid
//! - [`ScalePlan`] / [`Distributor`] - distribute a requested output size
//!   over the stretchable lanes with no rounding drift
//!
//! Compositing the planned tiles into an output bitmap lives in
//! `ninepatch-render`; this crate is pure geometry over immutable inputs.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use ninepatch_core::{ScalePlan, TileGrid, TileMetrics, cut_points, find_marks};
//!
//! // a blank 26x18 source with one stretch run per axis
//! let mut src = RgbaImage::from_pixel(26, 18, Rgba([255, 255, 255, 255]));
//! for x in 11..=14 {
//!     src.put_pixel(x, 0, Rgba([0, 0, 0, 255]));
//! }
//! for y in 7..=10 {
//!     src.put_pixel(0, y, Rgba([0, 0, 0, 255]));
//! }
//!
//! let marks = find_marks(&src);
//! let grid = TileGrid::slice(
//!     &src,
//!     &cut_points(&marks.x.scale, 26),
//!     &cut_points(&marks.y.scale, 18),
//! );
//! let metrics = TileMetrics::measure(&grid);
//! assert_eq!(metrics.min_size.x, 21.0);
//!
//! let plan = ScalePlan::for_size(40, 30, &metrics).unwrap();
//! assert_eq!(plan.unit.x, 20);
//! ```

pub mod axis;
pub mod error;
pub mod grid;
pub mod marks;
pub mod plan;
pub mod slice;

pub use axis::{Axis, PerAxis};
pub use error::{Result, ScaleError};
pub use grid::{TileGrid, TileMetrics, is_stretchable};
pub use marks::{AxisMarks, ContentArea, MARKER_COLOR, Marks, Run, find_marks};
pub use plan::{Distributor, ScalePlan};
pub use slice::cut_points;
