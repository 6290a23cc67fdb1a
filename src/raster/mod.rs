//! Typed raster tile over a single encoded byte buffer
//!
//! A [`Raster`] owns one contiguous buffer: a [`HEADER_LEN`] byte header
//! followed by the payload. The payload is band-interleaved-by-pixel and
//! row-major, so sample `(x, y, band)` lives at
//!
//! ```text
//! HEADER_LEN + ((y * width + x) * bands + band) * bytes_per_pixel
//! ```
//!
//! # Example
//!
//! ```
//! use tile_raster::{DataType, Raster};
//!
//! let mut raster = Raster::create_empty(256, 256, 3, DataType::Short)?;
//! raster.set_pixel(10, 20, 1, 1234.7f64)?;
//! assert_eq!(raster.get_pixel_short(10, 20, 1)?, 1234);
//!
//! let bytes = raster.into_bytes();
//! let raster = Raster::from_bytes(bytes)?;
//! assert_eq!(raster.get_pixel_int(10, 20, 1)?, 1234);
//! # Ok::<(), tile_raster::Error>(())
//! ```

mod fill;
pub mod header;
pub mod pixel;
mod transport;

use crate::error::{Error, Result};
use crate::types::DataType;

pub use header::{RasterHeader, HEADER_LEN, MAX_RASTER_BYTES};
pub use pixel::{Pixel, Sample};

/// A raster tile holding one or more bands of same-typed samples
///
/// The shape is fixed at construction; pixel values are mutable in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    header: RasterHeader,
    data: Vec<u8>,
}

impl Raster {
    /// Allocates a zero-filled raster and writes its header
    ///
    /// Fails with [`Error::RasterTooLarge`] before allocating when the
    /// encoded size exceeds [`MAX_RASTER_BYTES`], and with
    /// [`Error::InvalidShape`] when any dimension is zero.
    pub fn create_empty(width: u32, height: u32, bands: u16, data_type: DataType) -> Result<Self> {
        let header = RasterHeader::new(width, height, bands, data_type);
        let len = header.checked_len()?;

        let mut data = vec![0u8; len];
        header.write(&mut data);

        log::debug!(
            "created {} raster {}x{}x{} ({} bytes)",
            data_type.name(),
            width,
            height,
            bands,
            len
        );

        Ok(Self { header, data })
    }

    /// Wraps an already encoded buffer
    ///
    /// The header must be valid and the buffer length must match the
    /// encoded size of the shape it declares.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = RasterHeader::read(&data)?;
        let len = header.checked_len()?;

        if data.len() != len {
            return Err(Error::InvalidFormat(format!(
                "{} raster {}x{}x{} needs {} bytes, buffer has {}",
                header.data_type.name(),
                header.width,
                header.height,
                header.bands,
                len,
                data.len()
            )));
        }

        log::debug!(
            "decoded {} raster {}x{}x{}",
            header.data_type.name(),
            header.width,
            header.height,
            header.bands
        );

        Ok(Self { header, data })
    }

    /// Returns the header
    pub fn header(&self) -> &RasterHeader {
        &self.header
    }

    /// Pixel columns
    pub fn width(&self) -> u32 {
        self.header.width
    }

    /// Pixel rows
    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Samples per pixel position
    pub fn bands(&self) -> u16 {
        self.header.bands
    }

    /// Storage type of every sample
    pub fn data_type(&self) -> DataType {
        self.header.data_type
    }

    /// Size in bytes of one sample
    pub fn bytes_per_pixel(&self) -> usize {
        self.header.data_type.bytes_per_pixel()
    }

    /// The full encoded buffer, header included
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the raster and returns its encoded buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The pixel payload, header excluded
    pub fn payload(&self) -> &[u8] {
        &self.data[HEADER_LEN..]
    }

    fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.data[HEADER_LEN..]
    }

    /// Byte offset of sample `(x, y, band)` within the encoded buffer
    pub fn byte_offset(&self, x: u32, y: u32, band: u16) -> Result<usize> {
        let RasterHeader {
            width,
            height,
            bands,
            ..
        } = self.header;

        if x >= width || y >= height || band >= bands {
            return Err(Error::OutOfBounds {
                x,
                y,
                band,
                width,
                height,
                bands,
            });
        }

        // shape was bounded by MAX_RASTER_BYTES at construction
        let index = (y as u64 * width as u64 + x as u64) * bands as u64 + band as u64;
        Ok(HEADER_LEN + (index * self.bytes_per_pixel() as u64) as usize)
    }

    /// Decodes the native sample at `(x, y, band)`
    pub fn sample(&self, x: u32, y: u32, band: u16) -> Result<Sample> {
        let offset = self.byte_offset(x, y, band)?;
        Ok(Sample::decode(self.header.data_type, &self.data, offset))
    }

    /// Reads the sample at `(x, y, band)` converted to `T`
    ///
    /// Narrowing follows the conversion rules in [`pixel`] and never fails.
    pub fn get_pixel<T: Pixel>(&self, x: u32, y: u32, band: u16) -> Result<T> {
        self.sample(x, y, band).map(T::from_sample)
    }

    /// Converts `value` to the storage type and writes it at `(x, y, band)`
    pub fn set_pixel<T: Pixel>(&mut self, x: u32, y: u32, band: u16, value: T) -> Result<()> {
        let offset = self.byte_offset(x, y, band)?;
        value
            .into_sample(self.header.data_type)
            .encode(&mut self.data, offset);
        Ok(())
    }

    /// Reads a sample as a signed 8-bit integer
    ///
    /// Byte storage is unsigned, so a stored `255` reads back as `-1`.
    pub fn get_pixel_byte(&self, x: u32, y: u32, band: u16) -> Result<i8> {
        self.get_pixel(x, y, band)
    }

    /// Reads a sample as a signed 16-bit integer
    pub fn get_pixel_short(&self, x: u32, y: u32, band: u16) -> Result<i16> {
        self.get_pixel(x, y, band)
    }

    /// Reads a sample as an "unsigned" 16-bit value
    ///
    /// Returns exactly the same bits as [`Raster::get_pixel_short`]: the
    /// value is neither masked nor zero-extended. Callers wanting the
    /// unsigned interpretation should cast the result with `as u16`.
    pub fn get_pixel_ushort(&self, x: u32, y: u32, band: u16) -> Result<i16> {
        self.get_pixel_short(x, y, band)
    }

    /// Reads a sample as a signed 32-bit integer
    pub fn get_pixel_int(&self, x: u32, y: u32, band: u16) -> Result<i32> {
        self.get_pixel(x, y, band)
    }

    /// Reads a sample as a 32-bit float
    pub fn get_pixel_float(&self, x: u32, y: u32, band: u16) -> Result<f32> {
        self.get_pixel(x, y, band)
    }

    /// Reads a sample as a 64-bit float
    pub fn get_pixel_double(&self, x: u32, y: u32, band: u16) -> Result<f64> {
        self.get_pixel(x, y, band)
    }
}
