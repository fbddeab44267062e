//! # hdrscope-io
//!
//! Raster sources for hdrscope.
//!
//! - [`png`] - Decode PNG files into RGBA8 rasters and write them back
//! - [`pattern`] - Synthetic test patterns (ramp, solid, bars, linear steps)
//!
//! Everything comes out as an [`RgbaRaster`](hdrscope_core::RgbaRaster), the
//! buffer the histogram engine and pixel sampler read from.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hdrscope_io::{pattern, png};
//!
//! let raster = png::read("frame.png")?;
//! png::write("bars.png", &pattern::color_bars(640, 360))?;
//! ```
//!
//! # Dependencies
//!
//! - [`png`](https://docs.rs/png) - PNG codec

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod pattern;
pub mod png;

pub use error::{IoError, IoResult};
pub use pattern::PatternKind;
