//! # hdrscope-transfer
//!
//! Transfer functions (OETF/EOTF) for the three broadcast and HDR standards
//! hdrscope charts.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> display light
//! - **OOTF** (Opto-Optical Transfer Function): scene light -> display light
//!   (HLG system gamma)
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Linear scale |
//! |----------|----------|--------------|
//! | [`srgb`] | Web, consumer displays | relative, 1.0 = 100 nits |
//! | [`pq`] | HDR10, Dolby Vision | absolute, 10,000 nits ceiling |
//! | [`hlg`] | HDR broadcast | scene-relative, 1.0 = nominal peak |
//!
//! [`TransferFunction`] is the closed union over the three, and [`curve`]
//! samples any of them over a caller-chosen grid.
//!
//! # Usage
//!
//! ```rust
//! use hdrscope_transfer::{hlg, pq, srgb};
//!
//! // Decode sRGB to linear
//! let linear = srgb::decode(0.5);
//!
//! // SDR white in PQ
//! let signal = pq::encode(1.0);
//! assert!((signal - 0.508078).abs() < 1e-6);
//!
//! // HLG signal 0.5 is scene light 1/12
//! assert_eq!(hlg::encode(1.0 / 12.0), 0.5);
//! ```
//!
//! # Errors
//!
//! The per-standard free functions are total over finite input except
//! [`pq::decode`], which reports [`hdrscope_core::Error::Domain`] past its
//! pole. The [`TransferFunction`] methods also reject non-finite samples, so
//! no NaN leaves this crate for finite or rejected input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod function;
pub mod hlg;
pub mod pq;
pub mod srgb;

pub use curve::{CurvePoint, SampleGrid};
pub use function::TransferFunction;
pub use hlg::{HlgConstants, HlgDisplay};
