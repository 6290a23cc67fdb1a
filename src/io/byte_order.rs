//! Big-endian sample codec
//!
//! Stateless routines converting fixed-width values to and from a byte
//! range at a given offset. Every raster header field and payload sample
//! is stored most significant byte first.
//!
//! The caller guarantees `offset + size_of::<T>() <= data.len()`. Offsets
//! derived from a validated raster shape always satisfy this; anything
//! else is a contract violation and panics on the slice index.

#[inline]
fn take<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&data[offset..offset + N]);
    bytes
}

#[inline]
fn put<const N: usize>(bytes: [u8; N], data: &mut [u8], offset: usize) {
    data[offset..offset + N].copy_from_slice(&bytes);
}

/// Reads an unsigned 8-bit integer
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> u8 {
    data[offset]
}

/// Writes an unsigned 8-bit integer
#[inline]
pub fn write_u8(value: u8, data: &mut [u8], offset: usize) {
    data[offset] = value;
}

/// Reads an unsigned 16-bit integer
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(take(data, offset))
}

/// Writes an unsigned 16-bit integer
#[inline]
pub fn write_u16(value: u16, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}

/// Reads a signed 16-bit integer
#[inline]
pub fn read_i16(data: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes(take(data, offset))
}

/// Writes a signed 16-bit integer
#[inline]
pub fn write_i16(value: i16, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}

/// Reads an unsigned 32-bit integer
#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(take(data, offset))
}

/// Writes an unsigned 32-bit integer
#[inline]
pub fn write_u32(value: u32, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}

/// Reads a signed 32-bit integer
#[inline]
pub fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes(take(data, offset))
}

/// Writes a signed 32-bit integer
#[inline]
pub fn write_i32(value: i32, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}

/// Reads a 32-bit floating point number
#[inline]
pub fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_be_bytes(take(data, offset))
}

/// Writes a 32-bit floating point number
#[inline]
pub fn write_f32(value: f32, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}

/// Reads a 64-bit floating point number
#[inline]
pub fn read_f64(data: &[u8], offset: usize) -> f64 {
    f64::from_be_bytes(take(data, offset))
}

/// Writes a 64-bit floating point number
#[inline]
pub fn write_f64(value: f64, data: &mut [u8], offset: usize) {
    put(value.to_be_bytes(), data, offset);
}
