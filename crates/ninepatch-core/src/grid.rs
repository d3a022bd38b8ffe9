//! Tile grid and derived metrics
//!
//! The source bitmap is cut along the per-axis boundary coordinates into a
//! grid of tiles indexed `[column][row]`. Column and row parity decides the
//! scaling behavior: even indices are fixed, odd indices stretch.

use image::RgbaImage;
use image::imageops;

use crate::axis::PerAxis;

/// Whether the tile lane at `index` stretches when the image is scaled.
///
/// Lane 0 is always fixed, so fixed and stretchable lanes alternate
/// starting at fixed.
pub fn is_stretchable(index: usize) -> bool {
    index % 2 == 1
}

/// The sliced tile grid of a nine-patch, indexed `[column][row]`.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<Vec<RgbaImage>>,
}

impl TileGrid {
    /// Cut `image` along the given boundary coordinates.
    ///
    /// Every adjacent pair of x cuts and y cuts produces one tile; each
    /// tile is an owned copy, so the source image can be dropped after
    /// slicing.
    pub fn slice(image: &RgbaImage, x_cuts: &[u32], y_cuts: &[u32]) -> TileGrid {
        let cols = x_cuts.len() - 1;
        let rows = y_cuts.len() - 1;

        let mut tiles = Vec::with_capacity(cols);
        for cx in 0..cols {
            let mut column = Vec::with_capacity(rows);
            for cy in 0..rows {
                let (x0, x1) = (x_cuts[cx], x_cuts[cx + 1]);
                let (y0, y1) = (y_cuts[cy], y_cuts[cy + 1]);
                column.push(imageops::crop_imm(image, x0, y0, x1 - x0, y1 - y0).to_image());
            }
            tiles.push(column);
        }

        TileGrid { tiles }
    }

    /// The tile columns, left to right; each column holds its tiles top to
    /// bottom.
    pub fn columns(&self) -> &[Vec<RgbaImage>] {
        &self.tiles
    }

    /// Number of tile columns.
    pub fn column_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of tile rows.
    pub fn row_count(&self) -> usize {
        self.tiles[0].len()
    }

    /// The tile at `[col][row]`.
    pub fn tile(&self, col: usize, row: usize) -> &RgbaImage {
        &self.tiles[col][row]
    }
}

/// Aggregate measurements derived from a sliced grid.
///
/// All scale planning works from these three numbers per axis; the grid
/// itself is only touched again when compositing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMetrics {
    /// Total extent of the fixed lanes, per axis.
    pub fixed: PerAxis<u32>,
    /// Number of stretchable lanes, per axis.
    ///
    /// Computed as `(grid dimension - 1) / 2` in real arithmetic: the
    /// trailing lane is excluded from the count and the division is not
    /// rounded. Both quirks are load-bearing for bit-compatibility with
    /// existing nine-patch assets and their tooling.
    pub scalable: PerAxis<f64>,
    /// Smallest output size that leaves at least one pixel for every
    /// stretchable lane: `fixed + scalable`.
    pub min_size: PerAxis<f64>,
}

impl TileMetrics {
    /// Measure a sliced grid.
    ///
    /// Fixed extents are taken from row 0 (widths) and column 0 (heights);
    /// all tiles in a lane share the lane's extent, so one representative
    /// per lane is enough.
    pub fn measure(grid: &TileGrid) -> TileMetrics {
        let scalable = PerAxis::new(
            (grid.column_count() - 1) as f64 / 2.0,
            (grid.row_count() - 1) as f64 / 2.0,
        );

        let mut fixed = PerAxis::new(0u32, 0u32);
        for (cx, column) in grid.columns().iter().enumerate() {
            for (cy, tile) in column.iter().enumerate() {
                if cy == 0 && !is_stretchable(cx) {
                    fixed.x += tile.width();
                }
                if cx == 0 && !is_stretchable(cy) {
                    fixed.y += tile.height();
                }
            }
        }

        TileMetrics {
            fixed,
            scalable,
            min_size: PerAxis::new(
                fixed.x as f64 + scalable.x,
                fixed.y as f64 + scalable.y,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn numbered(w: u32, h: u32) -> RgbaImage {
        // pixel value encodes its coordinate so crops are distinguishable
        RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_slice_dimensions() {
        let img = numbered(26, 18);
        let grid = TileGrid::slice(&img, &[1, 11, 15, 25], &[1, 7, 11, 17]);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.tile(0, 0).dimensions(), (10, 6));
        assert_eq!(grid.tile(1, 1).dimensions(), (4, 4));
        assert_eq!(grid.tile(2, 2).dimensions(), (10, 6));
    }

    #[test]
    fn test_slice_contents_match_source() {
        let img = numbered(26, 18);
        let grid = TileGrid::slice(&img, &[1, 11, 15, 25], &[1, 7, 11, 17]);
        let tile = grid.tile(1, 0);
        // tile (1,0) covers x in [11,15), y in [1,7)
        assert_eq!(*tile.get_pixel(0, 0), *img.get_pixel(11, 1));
        assert_eq!(*tile.get_pixel(3, 5), *img.get_pixel(14, 6));
    }

    #[test]
    fn test_metrics_three_by_three() {
        let img = numbered(26, 18);
        let grid = TileGrid::slice(&img, &[1, 11, 15, 25], &[1, 7, 11, 17]);
        let metrics = TileMetrics::measure(&grid);
        assert_eq!(metrics.fixed, PerAxis::new(20, 12));
        assert_eq!(metrics.scalable, PerAxis::new(1.0, 1.0));
        assert_eq!(metrics.min_size, PerAxis::new(21.0, 13.0));
    }

    #[test]
    fn test_metrics_single_tile() {
        let img = numbered(12, 8);
        let grid = TileGrid::slice(&img, &[1, 11], &[1, 7]);
        let metrics = TileMetrics::measure(&grid);
        assert_eq!(metrics.fixed, PerAxis::new(10, 6));
        assert_eq!(metrics.scalable, PerAxis::new(0.0, 0.0));
        assert_eq!(metrics.min_size, PerAxis::new(10.0, 6.0));
    }

    #[test]
    fn test_metrics_five_lane_axis() {
        // two stretch lanes along x: cuts 1|5|8|12|15|19
        let img = numbered(20, 8);
        let grid = TileGrid::slice(&img, &[1, 5, 8, 12, 15, 19], &[1, 7]);
        let metrics = TileMetrics::measure(&grid);
        assert_eq!(metrics.fixed.x, 4 + 4 + 4);
        assert_eq!(metrics.scalable.x, 2.0);
        assert_eq!(metrics.min_size.x, 14.0);
    }

    #[test]
    fn test_stretch_parity() {
        assert!(!is_stretchable(0));
        assert!(is_stretchable(1));
        assert!(!is_stretchable(2));
        assert!(is_stretchable(3));
    }
}
