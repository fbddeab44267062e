//! Pixel access for histogram and hover callers.

use hdrscope_core::{PixelTriplet, RasterView, Result};

/// Reads encoded triplets out of a borrowed raster.
#[derive(Copy, Clone, Debug)]
pub struct PixelSampler<'a> {
    raster: RasterView<'a>,
}

impl<'a> PixelSampler<'a> {
    /// Sampler over `raster`.
    pub fn new(raster: RasterView<'a>) -> Self {
        Self { raster }
    }

    /// Underlying raster.
    pub fn raster(&self) -> RasterView<'a> {
        self.raster
    }

    /// Triplet at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`hdrscope_core::Error::OutOfBounds`] outside the raster.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<PixelTriplet> {
        self.raster.pixel(x, y)
    }

    /// Triplet at normalized coordinates in [0, 1], as a pointer position
    /// over a scaled preview maps to. Out-of-range input clamps to the edge.
    pub fn get_normalized(&self, u: f64, v: f64) -> Result<PixelTriplet> {
        let to_index = |t: f64, extent: u32| -> u32 {
            let max = extent.saturating_sub(1);
            if t.is_nan() {
                return 0;
            }
            ((t.clamp(0.0, 1.0) * extent as f64) as u32).min(max)
        };
        self.get(
            to_index(u, self.raster.width()),
            to_index(v, self.raster.height()),
        )
    }

    /// All triplets in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = PixelTriplet> + use<'a> {
        self.raster.triplets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrscope_core::{Error, RgbaRaster};

    fn checker() -> RgbaRaster {
        RgbaRaster::from_fn(4, 2, |x, y| PixelTriplet::gray(((x + y) % 2 * 255) as u8))
    }

    #[test]
    fn reads_pixels() {
        let raster = checker();
        let sampler = PixelSampler::new(raster.view());
        assert_eq!(sampler.get(0, 0).unwrap(), PixelTriplet::gray(0));
        assert_eq!(sampler.get(1, 0).unwrap(), PixelTriplet::gray(255));
        assert_eq!(sampler.pixels().len(), 8);
    }

    #[test]
    fn out_of_bounds() {
        let raster = checker();
        let sampler = PixelSampler::new(raster.view());
        assert_eq!(
            sampler.get(4, 0),
            Err(Error::OutOfBounds { x: 4, y: 0, width: 4, height: 2 })
        );
    }

    #[test]
    fn normalized_coordinates_clamp() {
        let raster = checker();
        let sampler = PixelSampler::new(raster.view());
        assert_eq!(sampler.get_normalized(1.0, 1.0).unwrap(), sampler.get(3, 1).unwrap());
        assert_eq!(sampler.get_normalized(-2.0, 0.0).unwrap(), sampler.get(0, 0).unwrap());
        assert_eq!(sampler.get_normalized(0.3, 0.6).unwrap(), sampler.get(1, 1).unwrap());
    }
}
