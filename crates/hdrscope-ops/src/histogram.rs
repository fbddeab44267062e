//! Per-channel and luminance histograms in linear light.
//!
//! For every pixel the engine reads the encoded R, G, B code values,
//! decodes each through the sRGB EOTF, computes BT.709 luminance, and
//! counts all four values into `N` equal-width bins over [0, 1] (the top
//! bin is closed). Counts are integers until the end, then each bin
//! becomes a percentage of the pixel count, so the result does not depend
//! on iteration order and the parallel path matches the serial one exactly.
//!
//! # Example
//!
//! ```rust
//! use hdrscope_core::{PixelTriplet, RgbaRaster};
//! use hdrscope_ops::histogram::{HistogramEngine, Series};
//!
//! let raster = RgbaRaster::filled(4, 4, PixelTriplet::gray(128));
//! let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
//! assert_eq!(hist.non_zero_bins(Series::Luminance).len(), 1);
//! ```

use hdrscope_core::{luminance_rec709, BinScale, Error, PixelTriplet, RasterView, Result};
use hdrscope_transfer::srgb;
use tracing::debug;
#[cfg(feature = "parallel")]
use tracing::trace;

/// Default number of bins per series.
pub const DEFAULT_BINS: usize = 100;

/// One of the four histogram series.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Series {
    /// Linear red
    Red,
    /// Linear green
    Green,
    /// Linear blue
    Blue,
    /// BT.709 luminance of linear RGB
    Luminance,
}

impl Series {
    /// All series in storage order.
    pub const ALL: [Series; 4] = [Self::Red, Self::Green, Self::Blue, Self::Luminance];

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Luminance => "luminance",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Luminance => 3,
        }
    }
}

/// Histogram of one image: four parallel percentage sequences.
///
/// Built only by [`HistogramEngine`]; a new image gets a new value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    red: Vec<f64>,
    green: Vec<f64>,
    blue: Vec<f64>,
    luminance: Vec<f64>,
    bin_count: usize,
    bin_width: f64,
    pixel_count: u64,
}

impl Histogram {
    /// Percentages for one series, one entry per bin.
    #[inline]
    pub fn series(&self, series: Series) -> &[f64] {
        match series {
            Series::Red => &self.red,
            Series::Green => &self.green,
            Series::Blue => &self.blue,
            Series::Luminance => &self.luminance,
        }
    }

    /// Red percentages.
    pub fn red(&self) -> &[f64] {
        &self.red
    }

    /// Green percentages.
    pub fn green(&self) -> &[f64] {
        &self.green
    }

    /// Blue percentages.
    pub fn blue(&self) -> &[f64] {
        &self.blue
    }

    /// Luminance percentages.
    pub fn luminance(&self) -> &[f64] {
        &self.luminance
    }

    /// Number of bins per series.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Width of one bin in linear light.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Pixels counted.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    /// Half-open linear range `[lo, hi)` covered by bin `i`.
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        (i as f64 * self.bin_width, (i + 1) as f64 * self.bin_width)
    }

    /// Indices of bins with a non-zero share, ascending.
    pub fn non_zero_bins(&self, series: Series) -> Vec<usize> {
        self.series(series)
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Largest bin percentage across all four series.
    pub fn peak_percentage(&self) -> f64 {
        Series::ALL
            .iter()
            .flat_map(|&s| self.series(s).iter().copied())
            .fold(0.0, f64::max)
    }

    /// Series mapped through a display scale, for charting.
    pub fn scaled(&self, series: Series, scale: BinScale) -> Vec<f64> {
        self.series(series).iter().map(|&p| scale.apply(p)).collect()
    }
}

/// Integer bin counts, merged by addition.
#[derive(Debug, Clone)]
struct BinCounts {
    series: [Vec<u64>; 4],
    pixels: u64,
}

impl BinCounts {
    fn new(bins: usize) -> Self {
        Self {
            series: std::array::from_fn(|_| vec![0; bins]),
            pixels: 0,
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (dst, src) in self.series.iter_mut().zip(other.series.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d += s;
            }
        }
        self.pixels += other.pixels;
        self
    }
}

/// Computes [`Histogram`]s with a fixed bin count.
///
/// Holds a 256-entry sRGB decode table so per-pixel work is lookups and one
/// weighted sum.
#[derive(Debug, Clone)]
pub struct HistogramEngine {
    bins: usize,
    linear_lut: [f64; 256],
}

impl Default for HistogramEngine {
    fn default() -> Self {
        Self::build(DEFAULT_BINS)
    }
}

impl HistogramEngine {
    /// Engine with `bins` bins per series.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for zero bins.
    pub fn new(bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::config("histogram needs at least one bin"));
        }
        Ok(Self::build(bins))
    }

    fn build(bins: usize) -> Self {
        let linear_lut = std::array::from_fn(|i| srgb::decode(i as f64 / 255.0));
        Self { bins, linear_lut }
    }

    /// Bins per series.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Bin index for a linear value in [0, 1].
    ///
    /// Values at or below 0 (and NaN) land in bin 0, values at or above 1 in
    /// the last bin.
    #[inline]
    pub fn bin_for_value(&self, v: f64) -> usize {
        if v.is_nan() || v <= 0.0 {
            0
        } else if v >= 1.0 {
            self.bins - 1
        } else {
            ((v * self.bins as f64) as usize).min(self.bins - 1)
        }
    }

    /// Linear RGB and luminance for one encoded triplet.
    #[inline]
    pub fn linearize(&self, px: PixelTriplet) -> ([f64; 3], f64) {
        let rgb = [
            self.linear_lut[px.r as usize],
            self.linear_lut[px.g as usize],
            self.linear_lut[px.b as usize],
        ];
        (rgb, luminance_rec709(rgb))
    }

    #[inline]
    fn accumulate(&self, counts: &mut BinCounts, px: PixelTriplet) {
        let (rgb, y) = self.linearize(px);
        let values = [rgb[0], rgb[1], rgb[2], y];
        for series in Series::ALL {
            let v = values[series.index()];
            counts.series[series.index()][self.bin_for_value(v)] += 1;
        }
        counts.pixels += 1;
    }

    fn finish(&self, counts: BinCounts) -> Histogram {
        let total = counts.pixels as f64;
        let [red, green, blue, luminance] = counts
            .series
            .map(|bins| bins.iter().map(|&c| c as f64 * 100.0 / total).collect::<Vec<_>>());
        Histogram {
            red,
            green,
            blue,
            luminance,
            bin_count: self.bins,
            bin_width: 1.0 / self.bins as f64,
            pixel_count: counts.pixels,
        }
    }

    /// Computes the histogram of `raster`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when the raster has no pixels.
    pub fn calculate(&self, raster: &RasterView<'_>) -> Result<Histogram> {
        if raster.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!(
            width = raster.width(),
            height = raster.height(),
            bins = self.bins,
            "computing histogram"
        );

        let mut counts = BinCounts::new(self.bins);
        for px in raster.triplets() {
            self.accumulate(&mut counts, px);
        }
        Ok(self.finish(counts))
    }

    /// Multi-threaded [`calculate`](Self::calculate) with identical output.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when the raster has no pixels.
    #[cfg(feature = "parallel")]
    pub fn calculate_par(&self, raster: &RasterView<'_>) -> Result<Histogram> {
        use hdrscope_core::RGBA_CHANNELS;
        use rayon::prelude::*;

        const ROWS_PER_TASK: usize = 16;

        if raster.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!(
            width = raster.width(),
            height = raster.height(),
            bins = self.bins,
            "computing histogram (parallel)"
        );

        let chunk = raster.width() as usize * RGBA_CHANNELS * ROWS_PER_TASK;
        let counts = raster
            .bytes()
            .par_chunks(chunk)
            .fold(
                || BinCounts::new(self.bins),
                |mut counts, rows| {
                    for px in rows.chunks_exact(RGBA_CHANNELS) {
                        self.accumulate(&mut counts, PixelTriplet::new(px[0], px[1], px[2]));
                    }
                    counts
                },
            )
            .reduce(|| BinCounts::new(self.bins), BinCounts::merge);
        trace!(pixels = counts.pixels, "histogram counts merged");

        Ok(self.finish(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hdrscope_core::RgbaRaster;

    #[test]
    fn bin_edges() {
        let engine = HistogramEngine::default();
        assert_eq!(engine.bin_for_value(0.0), 0);
        assert_eq!(engine.bin_for_value(-0.5), 0);
        assert_eq!(engine.bin_for_value(f64::NAN), 0);
        assert_eq!(engine.bin_for_value(0.0099), 0);
        assert_eq!(engine.bin_for_value(0.01), 1);
        assert_eq!(engine.bin_for_value(0.999), 99);
        assert_eq!(engine.bin_for_value(1.0), 99);
        assert_eq!(engine.bin_for_value(1.5), 99);
    }

    #[test]
    fn zero_bins_rejected() {
        assert!(matches!(HistogramEngine::new(0), Err(Error::Configuration(_))));
    }

    #[test]
    fn empty_raster_rejected() {
        let view = RasterView::new(0, 0, &[]).unwrap();
        assert_eq!(HistogramEngine::default().calculate(&view), Err(Error::EmptyInput));
    }

    #[test]
    fn series_sum_to_hundred() {
        let raster = RgbaRaster::from_fn(17, 9, |x, y| {
            PixelTriplet::new((x * 15) as u8, (y * 28) as u8, ((x + y) * 7) as u8)
        });
        let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
        for s in Series::ALL {
            assert_abs_diff_eq!(hist.series(s).iter().sum::<f64>(), 100.0, epsilon = 1e-9);
        }
        assert_eq!(hist.pixel_count(), 17 * 9);
        assert_eq!(hist.bin_count(), 100);
        assert_abs_diff_eq!(hist.bin_width(), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn custom_bin_count() {
        let engine = HistogramEngine::new(4).unwrap();
        let raster = RgbaRaster::filled(2, 2, PixelTriplet::gray(255));
        let hist = engine.calculate(&raster.view()).unwrap();
        assert_eq!(hist.luminance(), &[0.0, 0.0, 0.0, 100.0]);
        assert_eq!(hist.bin_range(3), (0.75, 1.0));
    }

    #[test]
    fn scaled_series_follow_bin_scale() {
        let raster = RgbaRaster::filled(1, 1, PixelTriplet::gray(0));
        let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
        let scaled = hist.scaled(Series::Red, BinScale::Sqrt);
        assert_abs_diff_eq!(scaled[0], 10.0, epsilon = 1e-12);
        assert_eq!(hist.peak_percentage(), 100.0);
    }
}
