//! Native samples and numeric conversion to the exposed pixel types
//!
//! Conversions may lose information but never fail:
//! - float to 32-bit integer truncates toward zero and saturates at the
//!   `i32` bounds, NaN becomes 0
//! - float to 8 or 16-bit integer first converts to `i32` as above, then
//!   keeps the low bits, so `300.0` stored as a byte is `44`
//! - integer to narrower integer keeps the low bits (wraps)
//! - integer to float rounds to the nearest representable value
//!
//! Byte storage holds unsigned samples (`0..=255` when widened). The
//! exposed byte type is the signed `i8`, which reinterprets the same bits.

use crate::io::byte_order;
use crate::types::DataType;

/// One decoded sample in its storage type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Byte(u8),
    Short(i16),
    Int(i32),
    Float(f32),
    Double(f64),
}

impl Sample {
    /// Decodes the sample of type `data_type` stored at `offset`
    #[inline]
    pub fn decode(data_type: DataType, data: &[u8], offset: usize) -> Self {
        match data_type {
            DataType::Byte => Sample::Byte(byte_order::read_u8(data, offset)),
            DataType::Short => Sample::Short(byte_order::read_i16(data, offset)),
            DataType::Int => Sample::Int(byte_order::read_i32(data, offset)),
            DataType::Float => Sample::Float(byte_order::read_f32(data, offset)),
            DataType::Double => Sample::Double(byte_order::read_f64(data, offset)),
        }
    }

    /// Encodes this sample at `offset`
    #[inline]
    pub fn encode(self, data: &mut [u8], offset: usize) {
        match self {
            Sample::Byte(v) => byte_order::write_u8(v, data, offset),
            Sample::Short(v) => byte_order::write_i16(v, data, offset),
            Sample::Int(v) => byte_order::write_i32(v, data, offset),
            Sample::Float(v) => byte_order::write_f32(v, data, offset),
            Sample::Double(v) => byte_order::write_f64(v, data, offset),
        }
    }

    /// Storage type of this sample
    pub fn data_type(&self) -> DataType {
        match self {
            Sample::Byte(_) => DataType::Byte,
            Sample::Short(_) => DataType::Short,
            Sample::Int(_) => DataType::Int,
            Sample::Float(_) => DataType::Float,
            Sample::Double(_) => DataType::Double,
        }
    }

    /// Big-endian encoding of this sample
    pub fn to_bytes(self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.data_type().bytes_per_pixel()];
        self.encode(&mut bytes, 0);
        bytes
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Numeric types a pixel can be read as or written from
///
/// Implemented for `i8`, `u8`, `i16`, `i32`, `f32` and `f64`.
pub trait Pixel: Copy + sealed::Sealed {
    /// Converts a stored sample to this type
    fn from_sample(sample: Sample) -> Self;

    /// Converts this value to the storage type `data_type`
    fn into_sample(self, data_type: DataType) -> Sample;
}

// Narrow targets go through i32 so floats wrap instead of saturating.
macro_rules! into_sample {
    ($value:expr, $data_type:expr) => {
        match $data_type {
            DataType::Byte => Sample::Byte(($value as i32) as u8),
            DataType::Short => Sample::Short(($value as i32) as i16),
            DataType::Int => Sample::Int($value as i32),
            DataType::Float => Sample::Float($value as f32),
            DataType::Double => Sample::Double($value as f64),
        }
    };
}

macro_rules! impl_int_pixel {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        #[allow(clippy::unnecessary_cast)]
        impl Pixel for $ty {
            #[inline]
            fn from_sample(sample: Sample) -> Self {
                match sample {
                    Sample::Byte(v) => v as $ty,
                    Sample::Short(v) => v as $ty,
                    Sample::Int(v) => v as $ty,
                    Sample::Float(v) => (v as i32) as $ty,
                    Sample::Double(v) => (v as i32) as $ty,
                }
            }

            #[inline]
            fn into_sample(self, data_type: DataType) -> Sample {
                into_sample!(self, data_type)
            }
        }
    )*};
}

macro_rules! impl_float_pixel {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        #[allow(clippy::unnecessary_cast)]
        impl Pixel for $ty {
            #[inline]
            fn from_sample(sample: Sample) -> Self {
                match sample {
                    Sample::Byte(v) => v as $ty,
                    Sample::Short(v) => v as $ty,
                    Sample::Int(v) => v as $ty,
                    Sample::Float(v) => v as $ty,
                    Sample::Double(v) => v as $ty,
                }
            }

            #[inline]
            fn into_sample(self, data_type: DataType) -> Sample {
                into_sample!(self, data_type)
            }
        }
    )*};
}

impl_int_pixel!(i8, u8, i16, i32);
impl_float_pixel!(f32, f64);
