//! Error types for tile-raster

use std::fmt;
use std::io;

/// Result type for tile-raster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, decoding or accessing a raster
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Buffer is not a valid encoded raster
    InvalidFormat(String),

    /// Storage-type tag with no matching storage type
    UnsupportedDataType(u8),

    /// Width, height or band count is zero
    InvalidShape {
        width: u32,
        height: u32,
        bands: u16,
    },

    /// Encoded size would exceed [`crate::MAX_RASTER_BYTES`]
    RasterTooLarge {
        width: u32,
        height: u32,
        bands: u16,
        bytes_per_pixel: usize,
        header_len: usize,
        total: u128,
    },

    /// Band index outside the raster's band count
    BandOutOfBounds {
        band: u16,
        bands: u16,
    },

    /// Pixel coordinate outside the raster shape
    OutOfBounds {
        x: u32,
        y: u32,
        band: u16,
        width: u32,
        height: u32,
        bands: u16,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            Error::UnsupportedDataType(tag) => write!(f, "Unsupported data type tag: {}", tag),
            Error::InvalidShape { width, height, bands } => write!(
                f,
                "Invalid raster shape: width: {} height: {} bands: {}",
                width, height, bands
            ),
            Error::RasterTooLarge {
                width,
                height,
                bands,
                bytes_per_pixel,
                header_len,
                total,
            } => write!(
                f,
                "Raster too large: width: {} height: {} bands: {} \
                 ({} bytes per pixel, {} byte header length) ({} total bytes)",
                width, height, bands, bytes_per_pixel, header_len, total
            ),
            Error::BandOutOfBounds { band, bands } => write!(
                f,
                "Out of bounds: band {} outside raster with {} bands",
                band, bands
            ),
            Error::OutOfBounds {
                x,
                y,
                band,
                width,
                height,
                bands,
            } => write!(
                f,
                "Out of bounds: pixel ({}, {}) band {} outside raster {} x {} x {}",
                x, y, band, width, height, bands
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}
