//! Hybrid Log-Gamma (HLG) transfer function.
//!
//! HLG is designed for HDR broadcast, compatible with SDR displays.
//! Uses a square-root curve for shadows and a logarithmic curve for
//! highlights.
//!
//! Three operations are kept apart:
//!
//! - [`encode`] - OETF, scene light -> signal
//! - [`decode`] - inverse OETF, signal -> scene light (display independent)
//! - [`HlgDisplay`] - OOTF composition with system gamma and display peak
//!
//! Peak and gamma never enter [`encode`] / [`decode`].
//!
//! # Normalization
//!
//! Scene light `E` follows BT.2100: 1.0 is the nominal peak and signal 0.5
//! sits at `E = 1/12`. Callers who think of 1.0 as SDR reference white use
//! [`encode_scaled`] with [`HlgSceneScale::ReferenceWhite`], which only
//! rescales the input before the same formula.
//!
//! # Range
//!
//! - Scene light: `E >= 0`, no upper clamp (`encode(12) ≈ 1.448`)
//! - Signal: `>= 0`; may exceed 1.0 for `E > 1`
//! - Negative inputs clamp to 0 in both directions.
//!
//! # Reference
//!
//! ITU-R BT.2100-2, ARIB STD-B67

use hdrscope_core::{
    Error, HlgSceneScale, Result, SystemGamma, ViewSettings, REFERENCE_WHITE_NITS,
};

/// BT.2100 constant `a`.
pub const A: f64 = 0.17883277;
/// `1 - 4a`
pub const B: f64 = 1.0 - 4.0 * A;
/// `0.5 - a * ln(4a)`
pub const C: f64 = 0.559_910_729_529_562;

/// The BT.2100 OETF constant set, for callers that display it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HlgConstants {
    /// `a`
    pub a: f64,
    /// `b = 1 - 4a`
    pub b: f64,
    /// `c = 0.5 - a * ln(4a)`
    pub c: f64,
}

/// Constants used by [`encode`] and [`decode`].
pub const CONSTANTS: HlgConstants = HlgConstants { a: A, b: B, c: C };

/// Scene light at the square-root / log transition.
pub const SCENE_TRANSITION: f64 = 1.0 / 12.0;

/// Signal at the square-root / log transition.
pub const SIGNAL_TRANSITION: f64 = 0.5;

/// Lowest display peak accepted by [`HlgDisplay`].
pub const MIN_PEAK_NITS: f64 = 100.0;

/// Highest display peak accepted by [`HlgDisplay`].
pub const MAX_PEAK_NITS: f64 = 10000.0;

/// HLG OETF: Encodes scene light to HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = a * ln(12*E - b) + c
/// ```
///
/// The log argument is positive whenever that branch runs:
/// `E > 1/12` gives `12E - b > 1 - b = 4a > 0`.
///
/// # Example
///
/// ```rust
/// use hdrscope_transfer::hlg::encode;
///
/// assert_eq!(encode(1.0 / 12.0), 0.5);
/// ```
#[inline]
pub fn encode(e: f64) -> f64 {
    if e <= 0.0 {
        0.0
    } else if e <= SCENE_TRANSITION {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: Decodes HLG signal to scene light.
///
/// # Formula
///
/// ```text
/// if E' <= 0.5:
///     E = E'^2 / 3
/// else:
///     E = (exp((E' - c) / a) + b) / 12
/// ```
///
/// # Example
///
/// ```rust
/// use hdrscope_transfer::hlg::{decode, encode};
///
/// let e = decode(encode(5.0));
/// assert!((e - 5.0).abs() < 1e-9);
/// ```
#[inline]
pub fn decode(signal: f64) -> f64 {
    if signal <= 0.0 {
        0.0
    } else if signal <= SIGNAL_TRANSITION {
        signal * signal / 3.0
    } else {
        (((signal - C) / A).exp() + B) / 12.0
    }
}

/// [`encode`] with the input expressed in the given scene scale.
#[inline]
pub fn encode_scaled(x: f64, scale: HlgSceneScale) -> f64 {
    encode(scale.to_bt2100(x))
}

/// [`decode`] returning scene light in the given scene scale.
#[inline]
pub fn decode_scaled(signal: f64, scale: HlgSceneScale) -> f64 {
    scale.from_bt2100(decode(signal))
}

/// Bare OOTF exponentiation for a single channel: `E^gamma`.
///
/// Output is display light normalized to the display peak.
#[inline]
pub fn ootf(e: f64, gamma: f64) -> f64 {
    e.max(0.0).powf(gamma)
}

/// Inverse of [`ootf`]: peak-normalized display light to scene light.
#[inline]
pub fn inverse_ootf(fd: f64, gamma: f64) -> f64 {
    fd.max(0.0).powf(1.0 / gamma)
}

/// Applies [`encode`] to RGB.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies [`decode`] to RGB.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// HLG display model: OOTF with a resolved system gamma and peak.
///
/// # Example
///
/// ```rust
/// use hdrscope_transfer::hlg::HlgDisplay;
///
/// let display = HlgDisplay::new(1000.0, 1.2).unwrap();
/// assert!((display.signal_to_nits(1.0) - 1000.0).abs() < 1e-3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HlgDisplay {
    peak_nits: f64,
    gamma: f64,
}

impl HlgDisplay {
    /// Builds a display model.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the peak is outside 100..=10000 nits or
    /// the gamma is not finite and positive.
    pub fn new(peak_nits: f64, gamma: f64) -> Result<Self> {
        if !(peak_nits.is_finite() && (MIN_PEAK_NITS..=MAX_PEAK_NITS).contains(&peak_nits)) {
            return Err(Error::config(format!(
                "HLG peak brightness {peak_nits} outside {MIN_PEAK_NITS}..={MAX_PEAK_NITS} nits"
            )));
        }
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(Error::config(format!("HLG system gamma {gamma} must be positive")));
        }
        Ok(Self { peak_nits, gamma })
    }

    /// Builds a display model, resolving `gamma` against the peak.
    pub fn with_system_gamma(peak_nits: f64, gamma: SystemGamma) -> Result<Self> {
        Self::new(peak_nits, gamma.resolve(peak_nits)?)
    }

    /// Display model described by view settings.
    pub fn from_settings(settings: &ViewSettings) -> Result<Self> {
        Self::with_system_gamma(settings.peak.nits(), settings.system_gamma)
    }

    /// Display peak in nits.
    #[inline]
    pub fn peak_nits(&self) -> f64 {
        self.peak_nits
    }

    /// System gamma.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// OOTF: scene light to display nits, `peak * E^gamma`.
    #[inline]
    pub fn scene_to_nits(&self, e: f64) -> f64 {
        self.peak_nits * ootf(e, self.gamma)
    }

    /// Inverse OOTF: display nits to scene light.
    #[inline]
    pub fn nits_to_scene(&self, nits: f64) -> f64 {
        inverse_ootf(nits / self.peak_nits, self.gamma)
    }

    /// Scene light that this display shows at SDR-relative linear light
    /// `relative` (1.0 = 100 nits).
    ///
    /// This is the only bridge between the SDR-relative scale and HLG scene
    /// light; encoding the result gives the same signal as
    /// [`nits_to_signal`](Self::nits_to_signal) at `relative * 100` nits.
    #[inline]
    pub fn from_reference_white(&self, relative: f64) -> f64 {
        self.nits_to_scene(relative * REFERENCE_WHITE_NITS)
    }

    /// Inverse of [`from_reference_white`](Self::from_reference_white).
    #[inline]
    pub fn to_reference_white(&self, e: f64) -> f64 {
        self.scene_to_nits(e) / REFERENCE_WHITE_NITS
    }

    /// EOTF: signal to display nits (OOTF after inverse OETF).
    #[inline]
    pub fn signal_to_nits(&self, signal: f64) -> f64 {
        self.scene_to_nits(decode(signal))
    }

    /// Inverse EOTF: display nits to signal.
    #[inline]
    pub fn nits_to_signal(&self, nits: f64) -> f64 {
        encode(self.nits_to_scene(nits))
    }

    /// Luminance-driven OOTF on scene RGB, per BT.2100:
    /// `F = peak * Ys^(gamma - 1) * E` for each channel.
    pub fn scene_rgb_to_nits(&self, rgb: [f64; 3]) -> [f64; 3] {
        let rgb = rgb.map(|v| v.max(0.0));
        let ys = hdrscope_core::luminance_rec2020(rgb);
        if ys <= 0.0 {
            return [0.0; 3];
        }
        let k = self.peak_nits * ys.powf(self.gamma - 1.0);
        rgb.map(|v| k * v)
    }
}
