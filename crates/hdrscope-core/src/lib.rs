//! # hdrscope-core
//!
//! Core types shared by every hdrscope crate.
//!
//! - [`Error`] / [`Result`] - The error taxonomy (domain, configuration, empty input)
//! - [`PixelTriplet`] - One 8-bit RGB sample read from a raster
//! - [`RasterView`] / [`RgbaRaster`] - Borrowed and owned RGBA8 buffers
//! - [`ViewSettings`] - Peak brightness, transfer mode, histogram scale
//!
//! ## Scales
//!
//! Relative linear light in hdrscope is referenced to SDR white:
//! `1.0 == 100 nits` ([`REFERENCE_WHITE_NITS`]). Absolute standards (PQ)
//! convert in and out of this scale at exactly one place in
//! `hdrscope-transfer`.
//!
//! ## Crate Structure
//!
//! ```text
//! hdrscope-core (this crate)
//!    ^
//!    |
//!    +-- hdrscope-transfer (sRGB, PQ, HLG)
//!    +-- hdrscope-ops (histogram, sampler, probe)
//!    +-- hdrscope-io (PNG, test patterns)
//!    +-- hdrscope-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for settings and pixel types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;
pub mod settings;

pub use error::{Error, Result};
pub use pixel::{
    luminance_rec2020, luminance_rec709, PixelTriplet, REC2020_LUMA, REC709_LUMA, REC709_LUMA_B,
    REC709_LUMA_G, REC709_LUMA_R,
};
pub use raster::{RasterView, RgbaRaster, RGBA_CHANNELS};
pub use settings::{BinScale, HlgSceneScale, PeakBrightness, SystemGamma, TransferMode, ViewSettings};

/// SDR reference white in nits. Relative linear 1.0 maps here.
pub const REFERENCE_WHITE_NITS: f64 = 100.0;

/// Prelude module for convenient imports.
///
/// ```
/// use hdrscope_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{luminance_rec709, PixelTriplet};
    pub use crate::raster::{RasterView, RgbaRaster};
    pub use crate::settings::{
        BinScale, HlgSceneScale, PeakBrightness, SystemGamma, TransferMode, ViewSettings,
    };
    pub use crate::REFERENCE_WHITE_NITS;
}
