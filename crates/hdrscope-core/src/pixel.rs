//! Pixel triplets and luminance weights.
//!
//! A [`PixelTriplet`] is the encoded (display-referred) RGB value of one
//! pixel as it sits in an 8-bit raster. Conversion to linear light is the job
//! of `hdrscope-transfer`; this module only rescales code values to [0, 1].

use std::fmt;

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f64; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Calculate Rec.709 luminance from linear RGB values.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
///
/// # Example
///
/// ```
/// use hdrscope_core::luminance_rec709;
///
/// let y = luminance_rec709([1.0, 1.0, 1.0]);
/// assert!((y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f64; 3]) -> f64 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// BT.2020 / BT.2100 luminance coefficients [R, G, B].
pub const REC2020_LUMA: [f64; 3] = [0.2627, 0.6780, 0.0593];

/// Luminance with BT.2020 weights, used by the HLG OOTF.
#[inline]
pub fn luminance_rec2020(rgb: [f64; 3]) -> f64 {
    rgb[0] * REC2020_LUMA[0] + rgb[1] * REC2020_LUMA[1] + rgb[2] * REC2020_LUMA[2]
}

/// Encoded 8-bit RGB sample of a single pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelTriplet {
    /// Red code value
    pub r: u8,
    /// Green code value
    pub g: u8,
    /// Blue code value
    pub b: u8,
}

impl PixelTriplet {
    /// Creates a triplet from code values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray triplet.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Code values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Encoded samples rescaled to [0, 1].
    #[inline]
    pub fn encoded(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl From<[u8; 3]> for PixelTriplet {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for PixelTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn weights_sum_to_one() {
        assert_abs_diff_eq!(REC709_LUMA.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn encoded_rescales_code_values() {
        let px = PixelTriplet::new(0, 255, 51);
        let e = px.encoded();
        assert_eq!(e[0], 0.0);
        assert_eq!(e[1], 1.0);
        assert_abs_diff_eq!(e[2], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn display_format() {
        assert_eq!(PixelTriplet::gray(64).to_string(), "(64, 64, 64)");
    }
}
