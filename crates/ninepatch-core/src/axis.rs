//! Axis abstraction
//!
//! Every slicing routine runs once per image axis with only the coordinate
//! orientation changing. [`Axis`] supplies the orientation-dependent pieces
//! (axis length, which border line carries which marks) so the scan and
//! plan logic is written once.

use image::RgbaImage;

/// The two slicing axes of a nine-patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal: scale marks on the top border, fill marks on the bottom.
    X,
    /// Vertical: scale marks on the left border, fill marks on the right.
    Y,
}

impl Axis {
    /// Both axes, in scan order.
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Length of the image along this axis.
    pub fn length(self, image: &RgbaImage) -> u32 {
        match self {
            Axis::X => image.width(),
            Axis::Y => image.height(),
        }
    }

    /// Coordinate of position `i` on the scale-mark border line
    /// (row 0 for X, column 0 for Y).
    pub fn scale_line(self, i: u32) -> (u32, u32) {
        match self {
            Axis::X => (i, 0),
            Axis::Y => (0, i),
        }
    }

    /// Coordinate of position `i` on the fill-mark border line
    /// (last row for X, last column for Y).
    pub fn fill_line(self, i: u32, image: &RgbaImage) -> (u32, u32) {
        match self {
            Axis::X => (i, image.height() - 1),
            Axis::Y => (image.width() - 1, i),
        }
    }
}

/// A pair of values, one per axis.
///
/// Used for everything the pipeline computes symmetrically: marks, fixed
/// sizes, stretch counts, scale plans.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerAxis<T> {
    pub fn new(x: T, y: T) -> Self {
        PerAxis { x, y }
    }

    /// Select the component for `axis`.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Mutable component for `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}
