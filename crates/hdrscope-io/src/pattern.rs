//! Synthetic test patterns.
//!
//! Small generated rasters for exercising the histogram and probe without
//! real footage: a horizontal gray ramp, a solid fill, classic 75% color bars
//! and a step chart whose patches are evenly spaced in linear light.

use std::fmt;
use std::str::FromStr;

use hdrscope_core::{Error, PixelTriplet, RgbaRaster};
use hdrscope_transfer::srgb;

/// Bar colors at 75% code value, SMPTE order.
const BARS_75: [PixelTriplet; 8] = [
    PixelTriplet { r: 191, g: 191, b: 191 },
    PixelTriplet { r: 191, g: 191, b: 0 },
    PixelTriplet { r: 0, g: 191, b: 191 },
    PixelTriplet { r: 0, g: 191, b: 0 },
    PixelTriplet { r: 191, g: 0, b: 191 },
    PixelTriplet { r: 191, g: 0, b: 0 },
    PixelTriplet { r: 0, g: 0, b: 191 },
    PixelTriplet { r: 0, g: 0, b: 0 },
];

/// Number of patches in [`linear_steps`].
pub const LINEAR_STEPS: u32 = 11;

/// Available generated patterns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// Code values 0..=255 left to right.
    GrayRamp,
    /// Mid gray fill.
    Solid,
    /// Eight vertical 75% bars.
    ColorBars,
    /// Gray patches at 0%, 10% .. 100% linear light.
    LinearSteps,
}

impl PatternKind {
    /// Every pattern.
    pub const ALL: [PatternKind; 4] = [
        PatternKind::GrayRamp,
        PatternKind::Solid,
        PatternKind::ColorBars,
        PatternKind::LinearSteps,
    ];

    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::GrayRamp => "ramp",
            PatternKind::Solid => "solid",
            PatternKind::ColorBars => "bars",
            PatternKind::LinearSteps => "steps",
        }
    }

    /// Renders the pattern at the given size.
    pub fn render(self, width: u32, height: u32) -> RgbaRaster {
        match self {
            PatternKind::GrayRamp => gray_ramp(width, height),
            PatternKind::Solid => solid(width, height, PixelTriplet::gray(128)),
            PatternKind::ColorBars => color_bars(width, height),
            PatternKind::LinearSteps => linear_steps(width, height),
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ramp" | "gray-ramp" | "gradient" => Ok(PatternKind::GrayRamp),
            "solid" | "flat" => Ok(PatternKind::Solid),
            "bars" | "color-bars" => Ok(PatternKind::ColorBars),
            "steps" | "linear-steps" => Ok(PatternKind::LinearSteps),
            _ => Err(Error::Parse(format!(
                "unknown pattern '{s}', expected ramp, solid, bars or steps"
            ))),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps column `x` of `width` into `n` equal bands.
fn band(x: u32, width: u32, n: u32) -> u32 {
    ((x as u64 * n as u64) / width.max(1) as u64).min(n as u64 - 1) as u32
}

/// Horizontal ramp from code 0 at the left edge to 255 at the right edge.
pub fn gray_ramp(width: u32, height: u32) -> RgbaRaster {
    let span = width.saturating_sub(1).max(1) as f64;
    RgbaRaster::from_fn(width, height, |x, _| {
        PixelTriplet::gray((x as f64 / span * 255.0).round() as u8)
    })
}

/// Uniform fill.
pub fn solid(width: u32, height: u32, color: PixelTriplet) -> RgbaRaster {
    RgbaRaster::filled(width, height, color)
}

/// Eight vertical 75% bars: white, yellow, cyan, green, magenta, red, blue, black.
pub fn color_bars(width: u32, height: u32) -> RgbaRaster {
    RgbaRaster::from_fn(width, height, |x, _| BARS_75[band(x, width, 8) as usize])
}

/// Vertical gray patches evenly spaced in linear light, sRGB-encoded.
///
/// Each patch lands in its own histogram luminance bin, which makes the
/// linear-light bucketing visible at a glance.
pub fn linear_steps(width: u32, height: u32) -> RgbaRaster {
    let last = (LINEAR_STEPS - 1) as f64;
    RgbaRaster::from_fn(width, height, |x, _| {
        let linear = band(x, width, LINEAR_STEPS) as f64 / last;
        PixelTriplet::gray((srgb::encode(linear) * 255.0).round() as u8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_spans_full_range() {
        let r = gray_ramp(256, 2);
        let v = r.view();
        assert_eq!(v.pixel(0, 0).unwrap(), PixelTriplet::gray(0));
        assert_eq!(v.pixel(128, 1).unwrap(), PixelTriplet::gray(128));
        assert_eq!(v.pixel(255, 1).unwrap(), PixelTriplet::gray(255));
    }

    #[test]
    fn single_column_ramp() {
        let r = gray_ramp(1, 3);
        assert_eq!(r.view().pixel(0, 2).unwrap(), PixelTriplet::gray(0));
    }

    #[test]
    fn bars_order() {
        let r = color_bars(80, 1);
        let v = r.view();
        assert_eq!(v.pixel(0, 0).unwrap(), BARS_75[0]);
        assert_eq!(v.pixel(15, 0).unwrap(), BARS_75[1]);
        assert_eq!(v.pixel(79, 0).unwrap(), BARS_75[7]);
    }

    #[test]
    fn steps_are_linear() {
        let r = linear_steps(110, 1);
        let v = r.view();
        assert_eq!(v.pixel(0, 0).unwrap(), PixelTriplet::gray(0));
        assert_eq!(v.pixel(109, 0).unwrap(), PixelTriplet::gray(255));
        // 50% linear is code 188 in sRGB
        assert_eq!(v.pixel(55, 0).unwrap(), PixelTriplet::gray(188));
    }

    #[test]
    fn kind_parse() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
        }
        assert_eq!("Color-Bars".parse::<PatternKind>().unwrap(), PatternKind::ColorBars);
        assert!("zebra".parse::<PatternKind>().is_err());
    }

    #[test]
    fn render_respects_size() {
        for kind in PatternKind::ALL {
            let r = kind.render(17, 5);
            assert_eq!((r.width(), r.height()), (17, 5));
        }
    }
}
