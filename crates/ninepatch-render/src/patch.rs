//! The sliced nine-patch container
//!
//! [`Ninepatch`] decodes a source bitmap once, slices it eagerly and keeps
//! the resulting grid and metrics immutable. Every render call works off
//! that shared state and allocates its own output, so one instance can
//! serve any number of renders at different sizes.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use log::debug;
use ninepatch_core::{
    ContentArea, Marks, ScalePlan, TileGrid, TileMetrics, cut_points, find_marks,
};

use crate::compose::compose;
use crate::error::{NinepatchError, NinepatchResult};

/// A sliced nine-patch image, ready to render at arbitrary sizes.
///
/// # Examples
///
/// ```no_run
/// use ninepatch_render::Ninepatch;
///
/// let patch = Ninepatch::open("button.9.png")?;
/// let bitmap = patch.render(200, 60)?;
/// bitmap.save("button_200x60.png").unwrap();
/// # Ok::<(), ninepatch_render::NinepatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ninepatch {
    grid: TileGrid,
    metrics: TileMetrics,
    marks: Marks,
    content_area: Option<ContentArea>,
}

impl Ninepatch {
    /// Load and slice a nine-patch from a file.
    ///
    /// # Errors
    ///
    /// [`NinepatchError::Decode`] if the file is not a decodable image,
    /// [`NinepatchError::SourceTooSmall`] if it cannot carry a marker
    /// border.
    pub fn open<P: AsRef<Path>>(path: P) -> NinepatchResult<Ninepatch> {
        let image = image::open(path.as_ref())
            .map_err(|e| NinepatchError::Decode(e.to_string()))?
            .to_rgba8();
        Self::from_image(image)
    }

    /// Load and slice a nine-patch from encoded bytes.
    pub fn from_bytes(bytes: &[u8]) -> NinepatchResult<Ninepatch> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| NinepatchError::Decode(e.to_string()))?
            .to_rgba8();
        Self::from_image(image)
    }

    /// Slice an already decoded bitmap.
    pub fn from_image(image: RgbaImage) -> NinepatchResult<Ninepatch> {
        let (width, height) = image.dimensions();
        if width < 3 || height < 3 {
            return Err(NinepatchError::SourceTooSmall { width, height });
        }

        let marks = find_marks(&image);
        let grid = TileGrid::slice(
            &image,
            &cut_points(&marks.x.scale, width),
            &cut_points(&marks.y.scale, height),
        );
        let metrics = TileMetrics::measure(&grid);
        let content_area = ContentArea::from_marks(&marks, width, height);

        debug!(
            "sliced {}x{} source into {}x{} tiles, min render size {}x{}",
            width,
            height,
            grid.column_count(),
            grid.row_count(),
            metrics.min_size.x,
            metrics.min_size.y,
        );

        Ok(Ninepatch {
            grid,
            metrics,
            marks,
            content_area,
        })
    }

    /// Render at exactly `width` x `height` with the default smoothing
    /// filter.
    ///
    /// # Errors
    ///
    /// [`NinepatchError::Scale`] when a dimension is outside what the
    /// marker geometry allows; the message names the exact bound.
    pub fn render(&self, width: u32, height: u32) -> NinepatchResult<RgbaImage> {
        self.render_with_filter(width, height, FilterType::Lanczos3)
    }

    /// Render with an explicit resampling filter for the stretched tiles.
    pub fn render_with_filter(
        &self,
        width: u32,
        height: u32,
        filter: FilterType,
    ) -> NinepatchResult<RgbaImage> {
        let plan = ScalePlan::for_size(width, height, &self.metrics)?;
        debug!(
            "rendering {}x{}: unit ({}, {}), remainder ({}, {})",
            width, height, plan.unit.x, plan.unit.y, plan.extra.x, plan.extra.y,
        );
        Ok(compose(&self.grid, width, height, &plan, filter))
    }

    /// Render just large enough for a `content_width` x `content_height`
    /// payload to fit inside the content area.
    ///
    /// Each output dimension is the larger of payload plus content-area
    /// margins and the minimum render size.
    pub fn render_fit(
        &self,
        content_width: u32,
        content_height: u32,
    ) -> NinepatchResult<RgbaImage> {
        let (width, height) = self.fit_size(content_width, content_height);
        self.render(width, height)
    }

    /// Render to fit `payload` and paste it into the content area.
    ///
    /// The payload is copied byte-for-byte, so reading the content-area
    /// rectangle back out of the result reproduces it exactly.
    pub fn render_wrap(&self, payload: &RgbaImage) -> NinepatchResult<RgbaImage> {
        let mut canvas = self.render_fit(payload.width(), payload.height())?;
        let (left, top) = match self.content_area {
            Some(area) => (area.left, area.top),
            None => (0, 0),
        };
        imageops::replace(&mut canvas, payload, left as i64, top as i64);
        Ok(canvas)
    }

    fn fit_size(&self, content_width: u32, content_height: u32) -> (u32, u32) {
        let (left, top, right, bottom) = match self.content_area {
            Some(area) => (area.left, area.top, area.right, area.bottom),
            None => (0, 0, 0, 0),
        };
        let (min_w, min_h) = self.min_size();
        (
            (content_width + left + right).max(min_w),
            (content_height + top + bottom).max(min_h),
        )
    }

    /// Smallest size [`Ninepatch::render`] accepts.
    pub fn min_size(&self) -> (u32, u32) {
        (
            self.metrics.min_size.x.ceil() as u32,
            self.metrics.min_size.y.ceil() as u32,
        )
    }

    /// Content area declared by the fill marks, if both axes carry one.
    pub fn content_area(&self) -> Option<ContentArea> {
        self.content_area
    }

    /// The marker runs found on the source borders.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// The sliced tile grid.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The measured grid metrics.
    pub fn metrics(&self) -> &TileMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use ninepatch_test::{WHITE, solid, three_by_three, with_border};

    #[test]
    fn test_from_image_slices_eagerly() {
        let patch = Ninepatch::from_image(three_by_three(4)).unwrap();
        assert_eq!(patch.grid().column_count(), 3);
        assert_eq!(patch.grid().row_count(), 3);
        assert_eq!(patch.min_size(), (21, 21));
        assert_eq!(patch.content_area(), None);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let src = three_by_three(4);
        let mut png = Cursor::new(Vec::new());
        src.write_to(&mut png, image::ImageFormat::Png).unwrap();

        let patch = Ninepatch::from_bytes(png.get_ref()).unwrap();
        assert_eq!(patch.min_size(), (21, 21));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Ninepatch::from_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, NinepatchError::Decode(_)));
    }

    #[test]
    fn test_rejects_borderless_source() {
        let err = Ninepatch::from_image(solid(2, 2, WHITE)).unwrap_err();
        assert!(matches!(
            err,
            NinepatchError::SourceTooSmall {
                width: 2,
                height: 2
            }
        ));
    }

    #[test]
    fn test_content_area_accessor() {
        let content = solid(12, 10, WHITE);
        // fill spans content [3, 8] x; scanner pulls the end back by one
        let src = with_border(&content, &[(5, 6)], &[(4, 5)], Some((3, 8)), Some((2, 7)));
        let patch = Ninepatch::from_image(src).unwrap();
        let area = patch.content_area().unwrap();
        assert_eq!(area.left, 4);
        assert_eq!(area.top, 3);
    }
}
