//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ is an absolute standard: signal 1.0 is 10,000 cd/m2 regardless of the
//! display. The rest of hdrscope measures relative light against SDR
//! reference white (1.0 = 100 nits), so this module has two layers:
//!
//! - [`encode_normalized`] / [`decode_normalized`] - the ST 2084 formulas on
//!   `Y in [0, 1]`, 1.0 = 10,000 nits
//! - [`encode`] / [`decode`] - the same curve on the SDR-relative scale
//!
//! The two scales meet only in [`from_reference_white`] and
//! [`to_reference_white`].
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Normalized linear: [0, 1]; relative linear: [0, 100]
//! - Negative inputs clamp to black. Normalized input above 1 is
//!   extrapolated by the formula.
//! - [`decode_normalized`] rejects signals whose denominator
//!   `c2 - c3 * s^(1/m2)` is not positive (s ≈ 1.992 and above).
//!
//! # Reference
//!
//! SMPTE ST 2084:2014
//!
//! # Usage
//!
//! ```rust
//! use hdrscope_transfer::pq;
//!
//! // SDR reference white (relative 1.0 = 100 nits)
//! let signal = pq::encode(1.0);
//! assert!((signal - 0.508078).abs() < 1e-6);
//!
//! // Absolute luminance back out
//! let nits = pq::signal_to_nits(signal).unwrap();
//! assert!((nits - 100.0).abs() < 1e-6);
//! ```

use hdrscope_core::{Error, Result, REFERENCE_WHITE_NITS};

/// Maximum luminance in cd/m2 (nits).
pub const L_MAX: f64 = 10000.0;

// PQ constants from SMPTE ST 2084
/// 2610 / 16384
pub const M1: f64 = 2610.0 / 16384.0;
/// 2523 / 4096 * 128
pub const M2: f64 = 2523.0 / 4096.0 * 128.0;
/// 3424 / 4096
pub const C1: f64 = 3424.0 / 4096.0;
/// 2413 / 4096 * 32
pub const C2: f64 = 2413.0 / 4096.0 * 32.0;
/// 2392 / 4096 * 32
pub const C3: f64 = 2392.0 / 4096.0 * 32.0;

/// Converts SDR-relative linear light (1.0 = 100 nits) to PQ-normalized
/// linear light (1.0 = 10,000 nits).
#[inline]
pub fn from_reference_white(relative: f64) -> f64 {
    relative * (REFERENCE_WHITE_NITS / L_MAX)
}

/// Converts PQ-normalized linear light back to the SDR-relative scale.
#[inline]
pub fn to_reference_white(normalized: f64) -> f64 {
    normalized * (L_MAX / REFERENCE_WHITE_NITS)
}

/// ST 2084 inverse EOTF on normalized luminance.
///
/// # Formula
///
/// ```text
/// E' = ((c1 + c2 * Y^m1) / (1 + c3 * Y^m1))^m2
/// ```
///
/// `Y <= 0` returns exactly 0. The formula itself gives `c1^m2 ≈ 7.3e-7` at
/// zero; pinning black keeps `encode(0) == 0` without breaking monotonicity.
#[inline]
pub fn encode_normalized(y: f64) -> f64 {
    if y <= 0.0 {
        return 0.0;
    }

    let yp = y.powf(M1);
    let num = C1 + C2 * yp;
    let den = 1.0 + C3 * yp;

    (num / den).powf(M2)
}

/// ST 2084 EOTF returning normalized luminance (1.0 = 10,000 nits).
///
/// # Errors
///
/// [`Error::Domain`] when the signal is so large that the denominator is no
/// longer positive; the formula would return NaN or infinity there.
#[inline]
pub fn decode_normalized(signal: f64) -> Result<f64> {
    if signal <= 0.0 {
        return Ok(0.0);
    }

    let vp = signal.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;
    if den <= 0.0 {
        return Err(Error::Domain {
            function: "pq::decode",
            input: signal,
            reason: "c2 - c3 * E'^(1/m2) is not positive",
        });
    }

    Ok((num / den).powf(1.0 / M1))
}

/// Encodes SDR-relative linear light (1.0 = 100 nits) to a PQ signal.
///
/// `encode(1.0) ≈ 0.508078`, `encode(100.0) == 1.0`.
#[inline]
pub fn encode(relative: f64) -> f64 {
    encode_normalized(from_reference_white(relative))
}

/// Decodes a PQ signal to SDR-relative linear light (1.0 = 100 nits).
///
/// # Errors
///
/// See [`decode_normalized`].
#[inline]
pub fn decode(signal: f64) -> Result<f64> {
    decode_normalized(signal).map(to_reference_white)
}

/// Encodes absolute luminance in nits.
#[inline]
pub fn nits_to_signal(nits: f64) -> f64 {
    encode_normalized(nits / L_MAX)
}

/// Decodes a PQ signal to absolute luminance in nits.
///
/// # Errors
///
/// See [`decode_normalized`].
#[inline]
pub fn signal_to_nits(signal: f64) -> Result<f64> {
    decode_normalized(signal).map(|y| y * L_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_roundtrip() {
        let test_values = [0.0, 0.001, 0.1, 0.5, 1.0, 10.0, 50.0, 100.0];
        for &x in &test_values {
            let decoded = decode(encode(x)).unwrap();
            assert_relative_eq!(decoded, x, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reference_white() {
        assert_abs_diff_eq!(encode(1.0), 0.508078, epsilon = 1e-6);
        assert_abs_diff_eq!(nits_to_signal(100.0), encode(1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 0.0);
        assert_eq!(decode(0.0).unwrap(), 0.0);
        assert_abs_diff_eq!(encode(100.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signal_to_nits(1.0).unwrap(), L_MAX, epsilon = 1e-6);
    }

    #[test]
    fn test_scale_boundary() {
        assert_eq!(from_reference_white(100.0), 1.0);
        assert_eq!(to_reference_white(0.01), 1.0);
    }

    #[test]
    fn test_negative_clamps() {
        assert_eq!(encode(-5.0), 0.0);
        assert_eq!(decode(-0.2).unwrap(), 0.0);
    }

    #[test]
    fn test_denominator_domain() {
        assert!(decode_normalized(1.5).is_ok());
        let err = decode_normalized(2.0).unwrap_err();
        assert!(err.is_domain());
    }
}
