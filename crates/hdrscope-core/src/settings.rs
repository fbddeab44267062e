//! Enumerated view settings.
//!
//! Everything a transform call depends on besides its input sample is
//! carried in a [`ViewSettings`] value passed explicitly by the caller.
//! There is no process-wide state: two callers with different settings can
//! evaluate the same curve concurrently.
//!
//! # Settings
//!
//! | Type | Values | Default |
//! |------|--------|---------|
//! | [`PeakBrightness`] | 100 .. 10000 nits | 1000 |
//! | [`TransferMode`] | OETF, EOTF | OETF |
//! | [`BinScale`] | linear, log, sqrt | linear |
//! | [`SystemGamma`] | fixed, BT.2100 adaptive | fixed 1.2 |
//! | [`HlgSceneScale`] | nominal peak, reference white | nominal peak |

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Display peak brightness presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum PeakBrightness {
    /// 100 nits (SDR reference)
    Nits100,
    /// 200 nits
    Nits200,
    /// 400 nits
    Nits400,
    /// 600 nits
    Nits600,
    /// 1000 nits (HLG nominal reference display)
    #[default]
    Nits1000,
    /// 2000 nits
    Nits2000,
    /// 4000 nits
    Nits4000,
    /// 10000 nits (PQ ceiling)
    Nits10000,
}

impl PeakBrightness {
    /// All presets in ascending order.
    pub const ALL: [PeakBrightness; 8] = [
        Self::Nits100,
        Self::Nits200,
        Self::Nits400,
        Self::Nits600,
        Self::Nits1000,
        Self::Nits2000,
        Self::Nits4000,
        Self::Nits10000,
    ];

    /// Peak as an integer nit value.
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Nits100 => 100,
            Self::Nits200 => 200,
            Self::Nits400 => 400,
            Self::Nits600 => 600,
            Self::Nits1000 => 1000,
            Self::Nits2000 => 2000,
            Self::Nits4000 => 4000,
            Self::Nits10000 => 10000,
        }
    }

    /// Peak in nits.
    #[inline]
    pub const fn nits(self) -> f64 {
        self.as_u32() as f64
    }
}

impl TryFrom<u32> for PeakBrightness {
    type Error = Error;

    fn try_from(nits: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_u32() == nits)
            .ok_or_else(|| {
                Error::config(format!(
                    "peak brightness {nits} is not one of 100, 200, 400, 600, 1000, 2000, 4000, 10000"
                ))
            })
    }
}

impl From<PeakBrightness> for u32 {
    fn from(p: PeakBrightness) -> u32 {
        p.as_u32()
    }
}

impl FromStr for PeakBrightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches("nits").trim();
        let nits: u32 = trimmed
            .parse()
            .map_err(|_| Error::Parse(format!("invalid peak brightness '{s}'")))?;
        Self::try_from(nits)
    }
}

impl fmt::Display for PeakBrightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} nits", self.as_u32())
    }
}

/// Which direction a curve is viewed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransferMode {
    /// Linear light -> encoded signal.
    #[default]
    Oetf,
    /// Encoded signal -> display light in nits.
    Eotf,
}

impl FromStr for TransferMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "oetf" | "encode" => Ok(Self::Oetf),
            "eotf" | "decode" => Ok(Self::Eotf),
            _ => Err(Error::Parse(format!("unknown transfer mode '{s}'"))),
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Oetf => "OETF",
            Self::Eotf => "EOTF",
        })
    }
}

/// Display scaling applied to histogram percentages by a chart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BinScale {
    /// Percentages as-is.
    #[default]
    Linear,
    /// `log10(1 + p)`, compresses dominant bins.
    Log,
    /// `sqrt(p)`.
    Sqrt,
}

impl BinScale {
    /// Maps a bin percentage to its display height.
    ///
    /// Monotonic and zero-preserving for every variant.
    #[inline]
    pub fn apply(self, percentage: f64) -> f64 {
        let p = percentage.max(0.0);
        match self {
            Self::Linear => p,
            Self::Log => (1.0 + p).log10(),
            Self::Sqrt => p.sqrt(),
        }
    }
}

impl FromStr for BinScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            "sqrt" => Ok(Self::Sqrt),
            _ => Err(Error::Parse(format!("unknown bin scale '{s}'"))),
        }
    }
}

/// HLG system gamma (OOTF exponent).
///
/// The fixed 1.2 is what the tool has always displayed. BT.2100 Table 5
/// makes gamma a function of display peak; that variant is opt-in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SystemGamma {
    /// Constant exponent.
    Fixed(f64),
    /// `1.2 + 0.42 * log10(peak / 1000)`.
    Bt2100Adaptive,
}

impl SystemGamma {
    /// Nominal HLG system gamma.
    pub const NOMINAL: f64 = 1.2;

    /// Resolves the exponent for a display peak.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the result is not finite and positive.
    pub fn resolve(self, peak_nits: f64) -> Result<f64> {
        let gamma = match self {
            Self::Fixed(g) => g,
            Self::Bt2100Adaptive => Self::NOMINAL + 0.42 * (peak_nits / 1000.0).log10(),
        };
        if gamma.is_finite() && gamma > 0.0 {
            Ok(gamma)
        } else {
            Err(Error::config(format!("system gamma {gamma} must be positive and finite")))
        }
    }
}

impl Default for SystemGamma {
    fn default() -> Self {
        Self::Fixed(Self::NOMINAL)
    }
}

impl FromStr for SystemGamma {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "adaptive" | "bt2100" => Ok(Self::Bt2100Adaptive),
            other => other
                .parse::<f64>()
                .map(Self::Fixed)
                .map_err(|_| Error::Parse(format!("invalid system gamma '{s}'"))),
        }
    }
}

/// Meaning of scene-linear 1.0 at the HLG OETF input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HlgSceneScale {
    /// BT.2100: 1.0 is nominal peak, signal 0.5 sits at 1/12.
    #[default]
    NominalPeak,
    /// 1.0 is SDR reference white, i.e. BT.2100 scene light 1/12.
    ReferenceWhite,
}

impl HlgSceneScale {
    /// Converts a caller-scale value to BT.2100 scene light.
    #[inline]
    pub fn to_bt2100(self, x: f64) -> f64 {
        match self {
            Self::NominalPeak => x,
            Self::ReferenceWhite => x / 12.0,
        }
    }

    /// Converts BT.2100 scene light back to the caller's scale.
    #[inline]
    pub fn from_bt2100(self, e: f64) -> f64 {
        match self {
            Self::NominalPeak => e,
            Self::ReferenceWhite => e * 12.0,
        }
    }
}

/// Settings threaded through every curve, probe and chart call.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewSettings {
    /// Display peak brightness.
    pub peak: PeakBrightness,
    /// OETF or EOTF view.
    pub mode: TransferMode,
    /// Histogram display scale.
    pub bin_scale: BinScale,
    /// HLG OOTF exponent.
    pub system_gamma: SystemGamma,
    /// HLG input convention.
    pub hlg_scale: HlgSceneScale,
}

impl ViewSettings {
    /// Settings with a given peak, everything else default.
    pub fn with_peak(peak: PeakBrightness) -> Self {
        Self { peak, ..Self::default() }
    }

    /// Resolved HLG system gamma for the configured peak.
    pub fn resolved_gamma(&self) -> Result<f64> {
        self.system_gamma.resolve(self.peak.nits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn peak_presets() {
        assert_eq!(PeakBrightness::default().nits(), 1000.0);
        assert_eq!(PeakBrightness::try_from(600).unwrap(), PeakBrightness::Nits600);
        assert!(PeakBrightness::try_from(500).is_err());
        assert_eq!("4000".parse::<PeakBrightness>().unwrap(), PeakBrightness::Nits4000);
        assert_eq!("200nits".parse::<PeakBrightness>().unwrap(), PeakBrightness::Nits200);
        assert!("bright".parse::<PeakBrightness>().is_err());
    }

    #[test]
    fn presets_ascending() {
        for pair in PeakBrightness::ALL.windows(2) {
            assert!(pair[0].nits() < pair[1].nits());
        }
    }

    #[test]
    fn bin_scale_zero_preserving() {
        for scale in [BinScale::Linear, BinScale::Log, BinScale::Sqrt] {
            assert_eq!(scale.apply(0.0), 0.0);
            assert!(scale.apply(50.0) > scale.apply(10.0));
        }
        assert_abs_diff_eq!(BinScale::Log.apply(99.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn system_gamma_resolution() {
        assert_eq!(SystemGamma::default().resolve(400.0).unwrap(), 1.2);
        assert_abs_diff_eq!(
            SystemGamma::Bt2100Adaptive.resolve(1000.0).unwrap(),
            1.2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            SystemGamma::Bt2100Adaptive.resolve(10000.0).unwrap(),
            1.62,
            epsilon = 1e-12
        );
        assert!(SystemGamma::Fixed(0.0).resolve(1000.0).is_err());
        assert!(SystemGamma::Fixed(f64::NAN).resolve(1000.0).is_err());
    }

    #[test]
    fn scene_scale_round_trip() {
        let s = HlgSceneScale::ReferenceWhite;
        assert_abs_diff_eq!(s.to_bt2100(1.0), 1.0 / 12.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s.from_bt2100(s.to_bt2100(3.7)), 3.7, epsilon = 1e-12);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("EOTF".parse::<TransferMode>().unwrap(), TransferMode::Eotf);
        assert!("both".parse::<TransferMode>().is_err());
    }
}
