//! Fixed-size raster header
//!
//! Layout (big-endian):
//!
//! | offset | size | field         |
//! |--------|------|---------------|
//! | 0      | 1    | version       |
//! | 1      | 4    | width         |
//! | 5      | 4    | height        |
//! | 9      | 2    | bands         |
//! | 11     | 1    | data type tag |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io::byte_order;
use crate::types::DataType;

/// Length of the header in bytes, shared by every storage type
pub const HEADER_LEN: usize = 12;

/// Largest encoded raster, header included
pub const MAX_RASTER_BYTES: u128 = i32::MAX as u128;

/// Header format version
pub const VERSION: u8 = 1;

const VERSION_OFFSET: usize = 0;
const WIDTH_OFFSET: usize = 1;
const HEIGHT_OFFSET: usize = 5;
const BANDS_OFFSET: usize = 9;
const DATA_TYPE_OFFSET: usize = 11;

/// Shape and storage type of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RasterHeader {
    /// Pixel columns
    pub width: u32,
    /// Pixel rows
    pub height: u32,
    /// Samples per pixel position
    pub bands: u16,
    /// Storage type of every sample
    pub data_type: DataType,
}

impl RasterHeader {
    /// Creates a header without validating it
    pub fn new(width: u32, height: u32, bands: u16, data_type: DataType) -> Self {
        Self {
            width,
            height,
            bands,
            data_type,
        }
    }

    /// Total encoded size, header included
    ///
    /// Computed in `u128` so that no `u32 x u32 x u16` shape can overflow.
    pub fn encoded_len(&self) -> u128 {
        self.width as u128
            * self.height as u128
            * self.bands as u128
            * self.data_type.bytes_per_pixel() as u128
            + HEADER_LEN as u128
    }

    /// Checks the shape and returns the encoded size as an allocation length
    pub fn checked_len(&self) -> Result<usize> {
        if self.width == 0 || self.height == 0 || self.bands == 0 {
            return Err(Error::InvalidShape {
                width: self.width,
                height: self.height,
                bands: self.bands,
            });
        }

        let total = self.encoded_len();
        if total > MAX_RASTER_BYTES {
            log::warn!(
                "rejecting {} raster {}x{}x{}: {} bytes",
                self.data_type.name(),
                self.width,
                self.height,
                self.bands,
                total
            );
            return Err(Error::RasterTooLarge {
                width: self.width,
                height: self.height,
                bands: self.bands,
                bytes_per_pixel: self.data_type.bytes_per_pixel(),
                header_len: HEADER_LEN,
                total,
            });
        }

        // bounded by MAX_RASTER_BYTES, fits usize on 32-bit targets
        Ok(total as usize)
    }

    /// Writes the header into the first [`HEADER_LEN`] bytes of `data`
    pub fn write(&self, data: &mut [u8]) {
        byte_order::write_u8(VERSION, data, VERSION_OFFSET);
        byte_order::write_u32(self.width, data, WIDTH_OFFSET);
        byte_order::write_u32(self.height, data, HEIGHT_OFFSET);
        byte_order::write_u16(self.bands, data, BANDS_OFFSET);
        byte_order::write_u8(self.data_type.tag(), data, DATA_TYPE_OFFSET);
    }

    /// Decodes a header from the start of an encoded buffer
    ///
    /// Only the header bytes are inspected; the payload length is not
    /// checked here.
    pub fn read(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(Error::InvalidFormat(format!(
                "buffer of {} bytes is shorter than the {} byte header",
                data.len(),
                HEADER_LEN
            )));
        }

        let version = byte_order::read_u8(data, VERSION_OFFSET);
        if version != VERSION {
            return Err(Error::InvalidFormat(format!(
                "unknown raster version {}",
                version
            )));
        }

        let data_type = DataType::from_tag(byte_order::read_u8(data, DATA_TYPE_OFFSET))?;

        Ok(Self {
            width: byte_order::read_u32(data, WIDTH_OFFSET),
            height: byte_order::read_u32(data, HEIGHT_OFFSET),
            bands: byte_order::read_u16(data, BANDS_OFFSET),
            data_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_layout() {
        let header = RasterHeader::new(0x0102_0304, 7, 0x0A0B, DataType::Float);
        let mut data = [0u8; HEADER_LEN];
        header.write(&mut data);
        assert_eq!(
            data,
            [1, 0x01, 0x02, 0x03, 0x04, 0, 0, 0, 7, 0x0A, 0x0B, 4]
        );
    }

    #[test]
    fn test_read_back() {
        for data_type in DataType::ALL {
            let header = RasterHeader::new(256, 128, 3, data_type);
            let mut data = vec![0u8; HEADER_LEN + 5];
            header.write(&mut data);
            assert_eq!(RasterHeader::read(&data).unwrap(), header);
        }
    }

    #[test]
    fn test_read_short_buffer() {
        let data = [1u8; HEADER_LEN - 1];
        assert!(matches!(RasterHeader::read(&data), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_read_bad_version() {
        let mut data = [0u8; HEADER_LEN];
        RasterHeader::new(1, 1, 1, DataType::Byte).write(&mut data);
        data[0] = 9;
        assert!(matches!(RasterHeader::read(&data), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_read_bad_tag() {
        let mut data = [0u8; HEADER_LEN];
        RasterHeader::new(1, 1, 1, DataType::Byte).write(&mut data);
        data[11] = 1;
        assert!(matches!(
            RasterHeader::read(&data),
            Err(Error::UnsupportedDataType(1))
        ));
    }

    #[test]
    fn test_encoded_len() {
        let header = RasterHeader::new(3, 2, 2, DataType::Double);
        assert_eq!(header.encoded_len(), 3 * 2 * 2 * 8 + 12);
        assert_eq!(header.checked_len().unwrap(), 108);
    }

    #[test]
    fn test_encoded_len_does_not_overflow() {
        let header = RasterHeader::new(u32::MAX, u32::MAX, u16::MAX, DataType::Double);
        let expected = (u32::MAX as u128) * (u32::MAX as u128) * (u16::MAX as u128) * 8 + 12;
        assert_eq!(header.encoded_len(), expected);
        assert!(matches!(header.checked_len(), Err(Error::RasterTooLarge { .. })));
    }

    #[test]
    fn test_limit_is_inclusive() {
        // 12 + 2_147_483_635 = i32::MAX
        let header = RasterHeader::new(2_147_483_635, 1, 1, DataType::Byte);
        assert_eq!(header.encoded_len(), MAX_RASTER_BYTES);
        assert_eq!(header.checked_len().unwrap(), i32::MAX as usize);

        let header = RasterHeader::new(2_147_483_636, 1, 1, DataType::Byte);
        assert!(matches!(header.checked_len(), Err(Error::RasterTooLarge { .. })));
    }

    #[test]
    fn test_zero_shape_rejected() {
        for (w, h, b) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            let header = RasterHeader::new(w, h, b, DataType::Short);
            assert!(matches!(header.checked_len(), Err(Error::InvalidShape { .. })));
        }
    }

    #[test]
    fn test_serde_json() {
        let header = RasterHeader::new(10, 20, 3, DataType::Int);
        let json = serde_json::to_string(&header).unwrap();
        assert!(json.contains("\"data_type\":\"Int\""));
        let back: RasterHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(back, header);
    }
}
