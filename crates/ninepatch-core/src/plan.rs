//! Output size planning
//!
//! For a requested output size, every stretchable lane receives a uniform
//! stretch plus possibly one bonus pixel from the rounding remainder. The
//! remainder is handed out one pixel at a time by [`Distributor`], so the
//! lane sizes on an axis always sum to exactly the requested dimension.

use crate::axis::PerAxis;
use crate::error::{Result, ScaleError};
use crate::grid::TileMetrics;

/// Per-axis scaling decision for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePlan {
    /// Uniform stretch, in output pixels per stretchable lane.
    pub unit: PerAxis<u32>,
    /// Rounding remainder to be handed out, per axis.
    pub extra: PerAxis<f64>,
}

impl ScalePlan {
    /// Plan a render at `width` x `height`.
    ///
    /// # Errors
    ///
    /// [`ScaleError`] when a dimension is below [`TileMetrics::min_size`]
    /// for its axis, or when an axis has no stretchable lanes and the
    /// request differs from the fixed extent. The message names the exact
    /// bound in either case.
    pub fn for_size(width: u32, height: u32, metrics: &TileMetrics) -> Result<ScalePlan> {
        if (width as f64) < metrics.min_size.x {
            return Err(ScaleError::Width(metrics.min_size.x as u32));
        }
        if (height as f64) < metrics.min_size.y {
            return Err(ScaleError::Height(metrics.min_size.y as u32));
        }
        if metrics.scalable.x == 0.0 && width != metrics.fixed.x {
            return Err(ScaleError::FixedWidth(metrics.fixed.x));
        }
        if metrics.scalable.y == 0.0 && height != metrics.fixed.y {
            return Err(ScaleError::FixedHeight(metrics.fixed.y));
        }

        let total = PerAxis::new(
            (width - metrics.fixed.x) as f64,
            (height - metrics.fixed.y) as f64,
        );
        let unit = PerAxis::new(
            per_lane(total.x, metrics.scalable.x),
            per_lane(total.y, metrics.scalable.y),
        );
        let extra = PerAxis::new(
            total.x - unit.x as f64 * metrics.scalable.x,
            total.y - unit.y as f64 * metrics.scalable.y,
        );

        Ok(ScalePlan { unit, extra })
    }
}

/// Uniform output pixels per stretchable lane.
fn per_lane(total: f64, lanes: f64) -> u32 {
    if lanes > 0.0 {
        (total / lanes).trunc() as u32
    } else {
        0
    }
}

/// Hands out the rounding remainder one pixel at a time.
///
/// Yields 1 while any remainder is left, then 0 forever. The compositor
/// draws from it in traversal order, so the earliest stretchable lanes
/// collect the bonus pixels.
#[derive(Debug, Clone, Copy)]
pub struct Distributor {
    remaining: f64,
}

impl Distributor {
    pub fn new(extra: f64) -> Distributor {
        Distributor { remaining: extra }
    }

    /// Take the next bonus pixel.
    pub fn take(&mut self) -> u32 {
        let bonus = if self.remaining > 0.0 { 1 } else { 0 };
        self.remaining -= 1.0;
        bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(fixed: (u32, u32), scalable: (f64, f64)) -> TileMetrics {
        TileMetrics {
            fixed: PerAxis::new(fixed.0, fixed.1),
            scalable: PerAxis::new(scalable.0, scalable.1),
            min_size: PerAxis::new(
                fixed.0 as f64 + scalable.0,
                fixed.1 as f64 + scalable.1,
            ),
        }
    }

    #[test]
    fn test_distributor_order() {
        let mut d = Distributor::new(3.0);
        let drawn: Vec<u32> = (0..6).map(|_| d.take()).collect();
        assert_eq!(drawn, vec![1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_distributor_empty() {
        let mut d = Distributor::new(0.0);
        assert_eq!(d.take(), 0);
        assert_eq!(d.take(), 0);
    }

    #[test]
    fn test_even_split() {
        let m = metrics((20, 12), (2.0, 1.0));
        let plan = ScalePlan::for_size(30, 20, &m).unwrap();
        assert_eq!(plan.unit, PerAxis::new(5, 8));
        assert_eq!(plan.extra, PerAxis::new(0.0, 0.0));
    }

    #[test]
    fn test_remainder_goes_to_extra() {
        let m = metrics((12, 12), (2.0, 2.0));
        let plan = ScalePlan::for_size(19, 16, &m).unwrap();
        // 7 pixels over 2 lanes: 3 each plus 1 remainder
        assert_eq!(plan.unit.x, 3);
        assert_eq!(plan.extra.x, 1.0);
        assert_eq!(plan.unit.y, 2);
        assert_eq!(plan.extra.y, 0.0);
    }

    #[test]
    fn test_lane_sizes_sum_to_request() {
        let m = metrics((20, 0), (3.0, 0.0));
        for width in 23..60 {
            let plan = ScalePlan::for_size(width, 0, &m).unwrap();
            let mut d = Distributor::new(plan.extra.x);
            let stretched: u32 = (0..3).map(|_| plan.unit.x + d.take()).sum();
            assert_eq!(m.fixed.x + stretched, width, "width {width}");
        }
    }

    #[test]
    fn test_minimum_is_renderable() {
        let m = metrics((20, 12), (1.0, 1.0));
        assert!(ScalePlan::for_size(21, 13, &m).is_ok());
    }

    #[test]
    fn test_undersized_width() {
        let m = metrics((20, 12), (1.0, 1.0));
        let err = ScalePlan::for_size(20, 13, &m).unwrap_err();
        assert_eq!(err, ScaleError::Width(21));
        assert_eq!(err.to_string(), "width cannot be smaller than 21");
    }

    #[test]
    fn test_undersized_height() {
        let m = metrics((20, 12), (1.0, 1.0));
        let err = ScalePlan::for_size(30, 12, &m).unwrap_err();
        assert_eq!(err, ScaleError::Height(13));
    }

    #[test]
    fn test_no_stretch_lanes_exact_size_only() {
        let m = metrics((10, 6), (0.0, 0.0));
        assert!(ScalePlan::for_size(10, 6, &m).is_ok());
        assert_eq!(
            ScalePlan::for_size(11, 6, &m).unwrap_err(),
            ScaleError::FixedWidth(10)
        );
        assert_eq!(
            ScalePlan::for_size(10, 7, &m).unwrap_err(),
            ScaleError::FixedHeight(6)
        );
        assert_eq!(
            ScalePlan::for_size(9, 6, &m).unwrap_err(),
            ScaleError::Width(10)
        );
    }

    #[test]
    fn test_no_stretch_plan_is_zero() {
        let m = metrics((10, 6), (0.0, 0.0));
        let plan = ScalePlan::for_size(10, 6, &m).unwrap();
        assert_eq!(plan.unit, PerAxis::new(0, 0));
        assert_eq!(plan.extra, PerAxis::new(0.0, 0.0));
    }
}
