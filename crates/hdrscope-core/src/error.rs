//! Error types for hdrscope operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the three failure families of the engine plus
//! the raster plumbing around it:
//!
//! - **Domain** - an input outside a formula branch's valid domain
//!   (PQ denominator ≤ 0, non-finite sample). Never reported as NaN.
//! - **Configuration** - peak brightness, system gamma, grid or bin count
//!   that cannot be used.
//! - **Empty input** - a histogram requested over zero pixels.
//! - **Bounds / raster** - pixel reads outside the image, buffers whose
//!   length does not match their dimensions.
//!
//! # Usage
//!
//! ```rust
//! use hdrscope_core::{Error, Result};
//!
//! fn checked_peak(nits: f64) -> Result<f64> {
//!     if !(nits.is_finite() && nits > 0.0) {
//!         return Err(Error::Configuration(format!("peak brightness {nits} must be positive")));
//!     }
//!     Ok(nits)
//! }
//!
//! assert!(checked_peak(-1.0).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by transfer functions, histogram and raster access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input lies outside the valid domain of a formula branch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hdrscope_core::Error;
    ///
    /// let err = Error::Domain {
    ///     function: "pq::decode",
    ///     input: 2.5,
    ///     reason: "denominator is not positive",
    /// };
    /// assert!(err.to_string().contains("pq::decode"));
    /// ```
    #[error("{function}: input {input} out of domain ({reason})")]
    Domain {
        /// Function that rejected the input.
        function: &'static str,
        /// Offending input value.
        input: f64,
        /// Which constraint failed.
        reason: &'static str,
    },

    /// Peak brightness, system gamma or another setting is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Histogram requested over an image with no pixels.
    #[error("histogram requested over zero pixels")]
    EmptyInput,

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate
        x: u32,
        /// Y coordinate
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Buffer length does not match `width * height * channels`.
    #[error("raster {width}x{height} expects {expected} bytes, got {actual}")]
    InvalidRaster {
        /// Raster width
        width: u32,
        /// Raster height
        height: u32,
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },

    /// A setting or name could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Returns `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
