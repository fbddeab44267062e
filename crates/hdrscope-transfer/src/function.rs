//! The closed set of supported transfer functions.
//!
//! [`TransferFunction`] has exactly three variants and every variant answers
//! the same questions: encode, decode, and map a signal to display nits for
//! given [`ViewSettings`]. Callers select a variant by value, never by a
//! string looked up at call time; [`FromStr`] exists only for the CLI and
//! config edges.

use std::fmt;
use std::str::FromStr;

use hdrscope_core::{Error, Result, TransferMode, ViewSettings, REFERENCE_WHITE_NITS};

use crate::hlg::HlgDisplay;
use crate::{hlg, pq, srgb};

/// Transfer function family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransferFunction {
    /// IEC 61966-2-1 sRGB, 100-nit reference.
    Srgb,
    /// SMPTE ST 2084 PQ, absolute up to 10,000 nits.
    Pq,
    /// BT.2100 Hybrid Log-Gamma, relative to display peak.
    Hlg,
}

fn finite(function: &'static str, x: f64) -> Result<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::Domain {
            function,
            input: x,
            reason: "sample is not finite",
        })
    }
}

impl TransferFunction {
    /// All variants.
    pub const ALL: [TransferFunction; 3] = [Self::Srgb, Self::Pq, Self::Hlg];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::Pq => "pq",
            Self::Hlg => "hlg",
        }
    }

    /// Standard the curve is defined by.
    pub const fn standard(self) -> &'static str {
        match self {
            Self::Srgb => "IEC 61966-2-1",
            Self::Pq => "SMPTE ST 2084",
            Self::Hlg => "ITU-R BT.2100",
        }
    }

    /// Linear light to signal.
    ///
    /// Input scale per variant: sRGB and PQ take SDR-relative light
    /// (1.0 = 100 nits), HLG takes BT.2100 scene light (1.0 = nominal peak).
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for non-finite input.
    #[inline]
    pub fn encode(self, linear: f64) -> Result<f64> {
        let x = finite("encode", linear)?;
        Ok(match self {
            Self::Srgb => srgb::encode(x),
            Self::Pq => pq::encode(x),
            Self::Hlg => hlg::encode(x),
        })
    }

    /// Signal to linear light, inverse of [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for non-finite input or a PQ signal past the
    /// formula's pole.
    #[inline]
    pub fn decode(self, signal: f64) -> Result<f64> {
        let s = finite("decode", signal)?;
        match self {
            Self::Srgb => Ok(srgb::decode(s)),
            Self::Pq => pq::decode(s),
            Self::Hlg => Ok(hlg::decode(s)),
        }
    }

    /// OETF honoring the HLG scene scale in `settings`.
    #[inline]
    pub fn oetf(self, linear: f64, settings: &ViewSettings) -> Result<f64> {
        match self {
            Self::Hlg => {
                let x = finite("hlg::encode", linear)?;
                Ok(hlg::encode_scaled(x, settings.hlg_scale))
            }
            _ => self.encode(linear),
        }
    }

    /// Maps SDR-relative linear light (1.0 = 100 nits) onto this curve's
    /// OETF input axis.
    ///
    /// sRGB and PQ take the relative value as is. HLG input is scene light,
    /// so the value goes through the inverse OOTF of the configured display
    /// and is then expressed in `settings.hlg_scale`. Feeding the result to
    /// [`oetf`](Self::oetf) gives the same signal as
    /// [`nits_to_signal`](Self::nits_to_signal) at `relative * 100` nits.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for non-finite input;
    /// [`Error::Configuration`] when the HLG display settings are invalid.
    pub fn from_reference_white(self, relative: f64, settings: &ViewSettings) -> Result<f64> {
        let x = finite("from_reference_white", relative)?;
        match self {
            Self::Srgb | Self::Pq => Ok(x),
            Self::Hlg => {
                let e = HlgDisplay::from_settings(settings)?.from_reference_white(x);
                Ok(settings.hlg_scale.from_bt2100(e))
            }
        }
    }

    /// EOTF view: signal to display luminance in nits.
    ///
    /// sRGB maps onto its 100-nit reference, PQ is absolute, HLG runs the
    /// OOTF for the configured peak and system gamma.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] as for [`decode`](Self::decode);
    /// [`Error::Configuration`] when the HLG display settings are invalid.
    pub fn signal_to_nits(self, signal: f64, settings: &ViewSettings) -> Result<f64> {
        let s = finite("signal_to_nits", signal)?;
        match self {
            Self::Srgb => Ok(srgb::decode(s) * REFERENCE_WHITE_NITS),
            Self::Pq => pq::signal_to_nits(s),
            Self::Hlg => Ok(HlgDisplay::from_settings(settings)?.signal_to_nits(s)),
        }
    }

    /// Inverse of [`signal_to_nits`](Self::signal_to_nits).
    pub fn nits_to_signal(self, nits: f64, settings: &ViewSettings) -> Result<f64> {
        let n = finite("nits_to_signal", nits)?;
        match self {
            Self::Srgb => Ok(srgb::encode(n / REFERENCE_WHITE_NITS)),
            Self::Pq => Ok(pq::nits_to_signal(n)),
            Self::Hlg => Ok(HlgDisplay::from_settings(settings)?.nits_to_signal(n)),
        }
    }

    /// Evaluates the curve in the direction `settings.mode` selects.
    #[inline]
    pub fn evaluate(self, x: f64, settings: &ViewSettings) -> Result<f64> {
        match settings.mode {
            TransferMode::Oetf => self.oetf(x, settings),
            TransferMode::Eotf => self.signal_to_nits(x, settings),
        }
    }

    /// Natural x-axis range for a view direction.
    ///
    /// OETF: sRGB [0, 1], PQ [0, 100] relative (up to 10,000 nits),
    /// HLG [0, 1] scene light (or [0, 12] when 1.0 means reference white).
    /// EOTF: signal [0, 1] for all three.
    pub fn default_domain(self, settings: &ViewSettings) -> (f64, f64) {
        match settings.mode {
            TransferMode::Eotf => (0.0, 1.0),
            TransferMode::Oetf => match self {
                Self::Srgb => (0.0, 1.0),
                Self::Pq => (0.0, pq::to_reference_white(1.0)),
                Self::Hlg => (0.0, settings.hlg_scale.from_bt2100(1.0)),
            },
        }
    }
}

impl FromStr for TransferFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "srgb" => Ok(Self::Srgb),
            "pq" | "st2084" | "smpte2084" => Ok(Self::Pq),
            "hlg" | "bt2100" | "arib-std-b67" => Ok(Self::Hlg),
            _ => Err(Error::Parse(format!("unknown transfer function '{s}'"))),
        }
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Srgb => "sRGB",
            Self::Pq => "PQ",
            Self::Hlg => "HLG",
        })
    }
}
