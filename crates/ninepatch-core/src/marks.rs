//! Border marker scanning
//!
//! A nine-patch encodes its geometry as runs of pure opaque black pixels on
//! the border lines of the bitmap:
//!
//! - scale marks on the top row (x axis) and left column (y axis) name the
//!   regions that stretch when the image is scaled up
//! - fill marks on the bottom row (x axis) and right column (y axis) name
//!   the single region arbitrary content may be placed into
//!
//! Any other pixel value, including translucent black, is not a marker.

use image::{Rgba, RgbaImage};

use crate::axis::{Axis, PerAxis};

/// The marker color: pure opaque black.
pub const MARKER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// An inclusive run `[start, end]` of marker pixels on one border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub end: u32,
}

/// Marker runs found on one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisMarks {
    /// Stretch regions, in scan order.
    pub scale: Vec<Run>,
    /// Content region. Only one is kept; the last run closed on the line
    /// wins.
    pub fill: Option<Run>,
}

/// Marker runs for both axes.
pub type Marks = PerAxis<AxisMarks>;

/// Scan the border lines of `image` for marker runs.
///
/// A run opens on the first marker pixel and extends while marker pixels
/// continue; it is recorded when a non-marker pixel closes it. A run still
/// open at the end of the line never closed, so it is dropped. A run
/// anchored at index 0 is dropped as well: that pixel is the corner shared
/// by the two marker borders, and a cut there would precede the border
/// itself. Both rules hold for scale and fill marks alike.
///
/// The recorded fill end is pulled back by one pixel relative to the last
/// marker pixel seen: fill runs extend one pixel past the true content
/// boundary, and existing assets depend on the pulled-back value.
///
/// An image without marker pixels on an axis yields empty scale marks and
/// no fill mark for that axis. That is a valid, fully fixed nine-patch,
/// not an error.
pub fn find_marks(image: &RgbaImage) -> Marks {
    let mut marks = Marks::default();
    for axis in Axis::BOTH {
        let len = axis.length(image);
        let scale = closed_runs(image, len, |i| axis.scale_line(i));
        let fill = closed_runs(image, len, |i| axis.fill_line(i, image))
            .last()
            .map(|run| Run {
                start: run.start,
                end: run.end.saturating_sub(1),
            });
        *marks.get_mut(axis) = AxisMarks { scale, fill };
    }
    marks
}

/// Collect the runs on one border line that are closed by a trailing
/// non-marker pixel.
fn closed_runs<F>(image: &RgbaImage, len: u32, coord: F) -> Vec<Run>
where
    F: Fn(u32) -> (u32, u32),
{
    let mut runs = Vec::new();
    let mut open: Option<Run> = None;

    for i in 0..len {
        let (x, y) = coord(i);
        if *image.get_pixel(x, y) == MARKER_COLOR {
            match open.as_mut() {
                Some(run) => run.end = i,
                None => open = Some(Run { start: i, end: i }),
            }
        } else if let Some(run) = open.take() {
            // index 0 is the corner shared by the two marker borders, not a
            // mark; a run anchored there is ignored
            if run.start > 0 {
                runs.push(run);
            }
        }
    }

    // a run reaching the end of the line was never closed; drop it
    runs
}

/// Content area of a nine-patch, as margins from each image edge.
///
/// Margins rather than absolute coordinates: the area is meant to survive
/// scaling, and the fixed border tiles keep the margins valid in any
/// rendered size at or above the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentArea {
    /// Distance from the left image edge
    pub left: u32,
    /// Distance from the top image edge
    pub top: u32,
    /// Distance from the right image edge
    pub right: u32,
    /// Distance from the bottom image edge
    pub bottom: u32,
}

impl ContentArea {
    /// Derive the content area from fill marks.
    ///
    /// Returns `None` unless both axes carry a fill mark; a mark on a
    /// single axis does not define a rectangle.
    pub fn from_marks(marks: &Marks, width: u32, height: u32) -> Option<ContentArea> {
        let fx = marks.x.fill?;
        let fy = marks.y.fill?;
        Some(ContentArea {
            left: fx.start,
            top: fy.start,
            right: width - (fx.end + 1),
            bottom: height - (fy.end + 1),
        })
    }
}
