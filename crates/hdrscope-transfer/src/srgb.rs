//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//! sRGB is fixed to a 100-nit reference display; there is no peak parameter.
//!
//! # Range
//!
//! - Nominal input/output: [0, 1]
//! - Outside [0, 1] nothing is clamped: values above 1 continue on the power
//!   segment, negative values continue on the linear segment with their sign.
//!   Clipping for display is the caller's decision.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear-light threshold between the linear and power segments.
pub const LINEAR_THRESHOLD: f64 = 0.0031308;

/// Encoded threshold between the linear and power segments.
pub const ENCODED_THRESHOLD: f64 = 0.04045;

const LINEAR_SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use hdrscope_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    if linear <= LINEAR_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        SCALE * linear.powf(1.0 / GAMMA) - OFFSET
    }
}

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use hdrscope_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(encoded: f64) -> f64 {
    if encoded <= ENCODED_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        ((encoded + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Applies [`encode`] to an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies [`decode`] to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
