//! Storage types for raster samples

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed-width representation used for every sample of a raster
///
/// The discriminant is the tag written into the raster header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DataType {
    /// Unsigned 8-bit integer
    Byte = 0,
    /// Signed 16-bit integer
    Short = 2,
    /// Signed 32-bit integer
    Int = 3,
    /// 32-bit floating point
    Float = 4,
    /// 64-bit floating point
    Double = 5,
}

impl DataType {
    /// All supported storage types, in tag order
    pub const ALL: [DataType; 5] = [
        DataType::Byte,
        DataType::Short,
        DataType::Int,
        DataType::Float,
        DataType::Double,
    ];

    /// Resolves a header tag to its storage type
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(DataType::Byte),
            2 => Ok(DataType::Short),
            3 => Ok(DataType::Int),
            4 => Ok(DataType::Float),
            5 => Ok(DataType::Double),
            _ => Err(Error::UnsupportedDataType(tag)),
        }
    }

    /// Returns the header tag for this storage type
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Returns the size in bytes of one sample
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            DataType::Byte => 1,
            DataType::Short => 2,
            DataType::Int | DataType::Float => 4,
            DataType::Double => 8,
        }
    }

    /// Returns the name of this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Byte => "Byte",
            DataType::Short => "Short",
            DataType::Int => "Int",
            DataType::Float => "Float",
            DataType::Double => "Double",
        }
    }
}
