//! Error types for raster loading and saving.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported color type / bit depth combination.
    #[error("unsupported pixel layout: {0}")]
    UnsupportedLayout(String),

    /// Raster validation or pattern parameters rejected by the core.
    #[error(transparent)]
    Core(#[from] hdrscope_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
