//! Curve sampling for charting.
//!
//! A chart asks for `(x, y)` pairs over a domain grid of its choosing.
//! [`sample`] evaluates one [`TransferFunction`] in the direction set by
//! [`ViewSettings::mode`]; axis scaling is left to the chart.
//!
//! # Example
//!
//! ```rust
//! use hdrscope_core::ViewSettings;
//! use hdrscope_transfer::{curve, SampleGrid, TransferFunction};
//!
//! let grid = SampleGrid::unit(256).unwrap();
//! let points = curve::sample(TransferFunction::Srgb, &grid, &ViewSettings::default()).unwrap();
//! assert_eq!(points.len(), 256);
//! assert_eq!(points[0].y, 0.0);
//! ```

use hdrscope_core::{Error, Result, ViewSettings};
use tracing::debug;

use crate::TransferFunction;

/// Evenly spaced sample positions over a closed interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    count: usize,
}

impl SampleGrid {
    /// Grid of `count` points from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] unless both bounds are finite,
    /// `start < end` and `count >= 2`.
    pub fn linear(start: f64, end: f64, count: usize) -> Result<Self> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(Error::config(format!("invalid sample range {start}..{end}")));
        }
        if count < 2 {
            return Err(Error::config(format!("sample grid needs at least 2 points, got {count}")));
        }
        Ok(Self { start, end, count })
    }

    /// `count` points over [0, 1].
    pub fn unit(count: usize) -> Result<Self> {
        Self::linear(0.0, 1.0, count)
    }

    /// Grid over a curve's natural domain for the given settings.
    pub fn for_function(tf: TransferFunction, settings: &ViewSettings, count: usize) -> Result<Self> {
        let (start, end) = tf.default_domain(settings);
        Self::linear(start, end, count)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`; a grid has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lower bound.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Position of point `i`. The last point is exactly `end`.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        if i + 1 >= self.count {
            return self.end;
        }
        self.start + (self.end - self.start) * (i as f64 / (self.count - 1) as f64)
    }

    /// Iterates sample positions in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.at(i))
    }
}

/// One charted sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurvePoint {
    /// Domain value (linear light or signal).
    pub x: f64,
    /// Curve value (signal or nits).
    pub y: f64,
}

/// Samples `tf` over `grid` in the direction `settings.mode` selects.
///
/// # Errors
///
/// The first error from [`TransferFunction::evaluate`], e.g. an invalid HLG
/// display configuration or a PQ signal past the pole.
pub fn sample(
    tf: TransferFunction,
    grid: &SampleGrid,
    settings: &ViewSettings,
) -> Result<Vec<CurvePoint>> {
    debug!(tf = tf.name(), mode = %settings.mode, points = grid.len(), "sampling curve");

    grid.iter()
        .map(|x| tf.evaluate(x, settings).map(|y| CurvePoint { x, y }))
        .collect()
}

/// Samples every transfer function over its own natural domain.
pub fn sample_all(
    settings: &ViewSettings,
    count: usize,
) -> Result<Vec<(TransferFunction, Vec<CurvePoint>)>> {
    TransferFunction::ALL
        .into_iter()
        .map(|tf| {
            let grid = SampleGrid::for_function(tf, settings, count)?;
            Ok((tf, sample(tf, &grid, settings)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrscope_core::{PeakBrightness, TransferMode};

    #[test]
    fn grid_validation() {
        assert!(SampleGrid::linear(0.0, 1.0, 1).is_err());
        assert!(SampleGrid::linear(1.0, 1.0, 10).is_err());
        assert!(SampleGrid::linear(0.0, f64::INFINITY, 10).is_err());
        let grid = SampleGrid::linear(0.0, 100.0, 101).unwrap();
        assert_eq!(grid.at(0), 0.0);
        assert_eq!(grid.at(50), 50.0);
        assert_eq!(grid.at(100), 100.0);
    }

    #[test]
    fn grid_endpoints_exact() {
        let grid = SampleGrid::linear(0.0, 0.3, 7).unwrap();
        let xs: Vec<f64> = grid.iter().collect();
        assert_eq!(xs.len(), 7);
        assert_eq!(xs[0], 0.0);
        assert_eq!(*xs.last().unwrap(), 0.3);
    }

    #[test]
    fn oetf_curves_are_monotonic() {
        let settings = ViewSettings::default();
        for (tf, points) in sample_all(&settings, 256).unwrap() {
            for pair in points.windows(2) {
                assert!(pair[1].y >= pair[0].y, "{tf} decreases at x={}", pair[1].x);
            }
        }
    }

    #[test]
    fn eotf_view_reaches_peak() {
        let settings = ViewSettings {
            peak: PeakBrightness::Nits600,
            mode: TransferMode::Eotf,
            ..ViewSettings::default()
        };
        let grid = SampleGrid::unit(100).unwrap();
        let hlg = sample(TransferFunction::Hlg, &grid, &settings).unwrap();
        let last = hlg.last().unwrap();
        assert!((last.y - 600.0).abs() < 1e-3);

        let pq = sample(TransferFunction::Pq, &grid, &settings).unwrap();
        assert!((pq.last().unwrap().y - 10000.0).abs() < 1e-6);

        let srgb = sample(TransferFunction::Srgb, &grid, &settings).unwrap();
        assert!((srgb.last().unwrap().y - 100.0).abs() < 1e-9);
    }
}
