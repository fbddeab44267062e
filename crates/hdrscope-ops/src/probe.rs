//! Hover readout for a single pixel.
//!
//! A pointer-move handler calls [`probe`] for the pixel under the cursor and
//! gets back everything the charts highlight: the pixel's linear light and,
//! for each standard, the point on that standard's curve in the current view
//! direction. The computation touches only stack values, so it is cheap
//! enough to run on every pointer event.

use hdrscope_core::{
    luminance_rec709, PixelTriplet, Result, TransferMode, ViewSettings, REFERENCE_WHITE_NITS,
};
use hdrscope_transfer::{srgb, CurvePoint, TransferFunction};

/// Where a pixel lands on one standard's curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveHighlight {
    /// Standard.
    pub tf: TransferFunction,
    /// Point on the curve, in the axes of the current view.
    pub point: CurvePoint,
}

/// Everything known about one hovered pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelProbe {
    /// Encoded code values.
    pub triplet: PixelTriplet,
    /// Code values rescaled to [0, 1].
    pub encoded: [f64; 3],
    /// sRGB-decoded linear RGB (1.0 = 100 nits).
    pub linear: [f64; 3],
    /// BT.709 luminance of `linear`.
    pub luminance: f64,
    /// `luminance` on a 100-nit reference display.
    pub nits: f64,
    /// One highlight per standard, in [`TransferFunction::ALL`] order.
    pub highlights: [CurveHighlight; 3],
}

impl PixelProbe {
    /// Highlight for one standard.
    pub fn highlight(&self, tf: TransferFunction) -> &CurveHighlight {
        match tf {
            TransferFunction::Srgb => &self.highlights[0],
            TransferFunction::Pq => &self.highlights[1],
            TransferFunction::Hlg => &self.highlights[2],
        }
    }
}

fn highlight(tf: TransferFunction, luminance: f64, settings: &ViewSettings) -> Result<CurveHighlight> {
    let point = match settings.mode {
        TransferMode::Oetf => {
            let x = tf.from_reference_white(luminance, settings)?;
            CurvePoint {
                x,
                y: tf.oetf(x, settings)?,
            }
        }
        TransferMode::Eotf => {
            let nits = luminance * REFERENCE_WHITE_NITS;
            CurvePoint {
                x: tf.nits_to_signal(nits, settings)?,
                y: nits,
            }
        }
    };
    Ok(CurveHighlight { tf, point })
}

/// Computes the hover readout for `triplet` under `settings`.
///
/// In the OETF view each highlight is `(input, signal)`, where the input is
/// the pixel's luminance on that curve's x-axis: relative light for sRGB and
/// PQ, scene light (after the display's inverse OOTF) for HLG. In the EOTF
/// view it is `(signal, nits)`. Either way the signal is what that standard
/// needs to put the pixel's light on the configured display, so both views
/// agree on it.
///
/// # Errors
///
/// [`hdrscope_core::Error::Configuration`] when the HLG display settings are
/// invalid.
pub fn probe(triplet: PixelTriplet, settings: &ViewSettings) -> Result<PixelProbe> {
    let encoded = triplet.encoded();
    let linear = srgb::decode_rgb(encoded);
    let luminance = luminance_rec709(linear);

    let [a, b, c] = TransferFunction::ALL;
    Ok(PixelProbe {
        triplet,
        encoded,
        linear,
        luminance,
        nits: luminance * REFERENCE_WHITE_NITS,
        highlights: [
            highlight(a, luminance, settings)?,
            highlight(b, luminance, settings)?,
            highlight(c, luminance, settings)?,
        ],
    })
}
