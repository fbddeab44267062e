//! PNG format support.
//!
//! Decodes PNG files into the RGBA8 rasters the histogram and probe work on,
//! and writes rasters back out (used for generated test patterns).
//!
//! # Input layouts
//!
//! Palette and sub-byte images are expanded by the decoder. Gray, gray+alpha
//! and RGB are widened to RGBA with opaque alpha where missing. 16-bit
//! samples keep their high byte.
//!
//! # Example
//!
//! ```rust,ignore
//! use hdrscope_io::png;
//!
//! let raster = png::read("input.png")?;
//! png::write("copy.png", &raster)?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek};
use std::path::Path;

use hdrscope_core::RgbaRaster;
use tracing::debug;

use crate::{IoError, IoResult};

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaRaster> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "reading PNG");
    decode(BufReader::new(file))
}

/// Decodes a PNG stream, e.g. bytes fetched over the network wrapped in a
/// [`std::io::Cursor`].
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<RgbaRaster> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let samples = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedLayout(format!("{:?} {:?}", other, info.bit_depth)));
        }
    };
    let bytes_per_sample = match info.bit_depth {
        png::BitDepth::Eight => 1,
        png::BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedLayout(format!("{:?} {:?}", info.color_type, other)));
        }
    };

    // 16-bit PNG is big-endian; the first byte of each sample is the high byte
    let high_bytes: Vec<u8> = samples.iter().step_by(bytes_per_sample).copied().collect();
    let rgba = widen_to_rgba(&high_bytes, channels);

    debug!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        depth = ?info.bit_depth,
        "decoded PNG"
    );
    Ok(RgbaRaster::from_rgba(info.width, info.height, rgba)?)
}

fn widen_to_rgba(samples: &[u8], channels: usize) -> Vec<u8> {
    match channels {
        1 => samples.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        2 => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        3 => samples
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        _ => samples.to_vec(),
    }
}

/// Writes a raster as an 8-bit RGBA PNG tagged sRGB.
pub fn write<P: AsRef<Path>>(path: P, raster: &RgbaRaster) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    debug!(path = %path.as_ref().display(), "wrote PNG");
    Ok(())
}
