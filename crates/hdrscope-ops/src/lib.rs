//! # hdrscope-ops
//!
//! Image-level operations that feed the charts.
//!
//! # Modules
//!
//! - [`histogram`] - R, G, B and luminance distributions in linear light
//! - [`sampler`] - Triplet access into an RGBA8 raster
//! - [`probe`] - Per-pixel hover readout across sRGB, PQ and HLG
//!
//! # Example
//!
//! ```rust
//! use hdrscope_core::{PixelTriplet, RgbaRaster, ViewSettings};
//! use hdrscope_ops::{probe, HistogramEngine, PixelSampler};
//!
//! let raster = RgbaRaster::filled(8, 8, PixelTriplet::gray(180));
//! let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
//! assert_eq!(hist.pixel_count(), 64);
//!
//! let px = PixelSampler::new(raster.view()).get(3, 3).unwrap();
//! let readout = probe::probe(px, &ViewSettings::default()).unwrap();
//! assert!(readout.luminance > 0.4);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - [`HistogramEngine::calculate_par`] via rayon
//! - `serde` - Serialize [`Histogram`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod histogram;
pub mod probe;
pub mod sampler;

pub use histogram::{Histogram, HistogramEngine, Series, DEFAULT_BINS};
pub use probe::{CurveHighlight, PixelProbe};
pub use sampler::PixelSampler;
