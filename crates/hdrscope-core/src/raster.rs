//! RGBA8 raster buffers.
//!
//! Images reach the engine as rectangular 8-bit RGBA buffers, row-major,
//! top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//! ```
//!
//! [`RasterView`] borrows such a buffer; [`RgbaRaster`] owns one. Both are
//! validated on construction so downstream code can index without checks.

use crate::{Error, PixelTriplet, Result};

/// Channels per pixel in every hdrscope raster.
pub const RGBA_CHANNELS: usize = 4;

fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGBA_CHANNELS
}

/// Read-only view of an RGBA8 buffer.
#[derive(Copy, Clone, Debug)]
pub struct RasterView<'a> {
    width: u32,
    height: u32,
    bytes: &'a [u8],
}

impl<'a> RasterView<'a> {
    /// Wraps `bytes` as a `width` x `height` RGBA8 raster.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRaster`] when `bytes.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```
    /// use hdrscope_core::RasterView;
    ///
    /// let bytes = [255u8; 2 * 2 * 4];
    /// let view = RasterView::new(2, 2, &bytes).unwrap();
    /// assert_eq!(view.pixel_count(), 4);
    /// ```
    pub fn new(width: u32, height: u32, bytes: &'a [u8]) -> Result<Self> {
        let expected = expected_len(width, height);
        if bytes.len() != expected {
            return Err(Error::InvalidRaster {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { width, height, bytes })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if the raster has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Reads the RGB triplet at `(x, y)`, ignoring alpha.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when the coordinate is outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Result<PixelTriplet> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        Ok(PixelTriplet::new(self.bytes[i], self.bytes[i + 1], self.bytes[i + 2]))
    }

    /// Iterates RGB triplets in row-major order.
    pub fn triplets(&self) -> impl ExactSizeIterator<Item = PixelTriplet> + use<'a> {
        self.bytes
            .chunks_exact(RGBA_CHANNELS)
            .map(|px| PixelTriplet::new(px[0], px[1], px[2]))
    }
}

/// Owned RGBA8 raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaRaster {
    /// Takes ownership of an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRaster`] when the length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        RasterView::new(width, height, &data)?;
        Ok(Self { width, height, data })
    }

    /// Raster filled with one opaque color.
    pub fn filled(width: u32, height: u32, color: PixelTriplet) -> Self {
        let data = (0..width as usize * height as usize)
            .flat_map(|_| [color.r, color.g, color.b, 255])
            .collect();
        Self { width, height, data }
    }

    /// Builds a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> PixelTriplet,
    {
        let mut data = Vec::with_capacity(expected_len(width, height));
        for y in 0..height {
            for x in 0..width {
                let px = f(x, y);
                data.extend_from_slice(&[px.r, px.g, px.b, 255]);
            }
        }
        Self { width, height, data }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the raster, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrowed view of this raster.
    #[inline]
    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            width: self.width,
            height: self.height,
            bytes: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_length() {
        let bytes = [0u8; 15];
        let err = RasterView::new(2, 2, &bytes).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRaster { width: 2, height: 2, expected: 16, actual: 15 }
        );
    }

    #[test]
    fn pixel_access_ignores_alpha() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let view = RasterView::new(2, 1, &bytes).unwrap();
        assert_eq!(view.pixel(1, 0).unwrap(), PixelTriplet::new(5, 6, 7));
        assert!(matches!(view.pixel(2, 0), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn triplets_row_major() {
        let raster = RgbaRaster::from_fn(2, 2, |x, y| PixelTriplet::gray((y * 2 + x) as u8));
        let values: Vec<u8> = raster.view().triplets().map(|p| p.r).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_raster_is_valid() {
        let view = RasterView::new(0, 10, &[]).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.triplets().len(), 0);
    }
}
