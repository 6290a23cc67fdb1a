//! tile-raster - self-describing binary raster tiles
//!
//! A raster tile is one flat byte buffer: a fixed 12 byte header (shape
//! and storage type) followed by band-interleaved-by-pixel samples. The
//! buffer can be shuffled, persisted or sent over the network as-is, and
//! pixels are read and written through one numeric interface whatever the
//! storage width.
//!
//! # Examples
//!
//! ## Creating and filling a tile
//!
//! ```
//! use tile_raster::{DataType, Raster};
//!
//! let mut raster = Raster::create_empty(512, 512, 1, DataType::Float)?;
//! raster.fill(-9999.0f32);
//! raster.set_pixel(3, 4, 0, 12.5f64)?;
//!
//! assert_eq!(raster.get_pixel_float(3, 4, 0)?, 12.5);
//! assert_eq!(raster.get_pixel_int(0, 0, 0)?, -9999);
//! # Ok::<(), tile_raster::Error>(())
//! ```
//!
//! ## Inspecting a foreign buffer
//!
//! ```
//! use tile_raster::{DataType, Raster, RasterHeader};
//!
//! let bytes = Raster::create_empty(64, 32, 4, DataType::Byte)?.into_bytes();
//!
//! let header = RasterHeader::read(&bytes)?;
//! assert_eq!((header.width, header.height, header.bands), (64, 32, 4));
//! assert_eq!(header.data_type, DataType::Byte);
//! # Ok::<(), tile_raster::Error>(())
//! ```
//!
//! Oversized shapes are rejected before any allocation:
//!
//! ```
//! use tile_raster::{DataType, Error, Raster};
//!
//! let result = Raster::create_empty(100_000, 100_000, 4, DataType::Double);
//! assert!(matches!(result, Err(Error::RasterTooLarge { .. })));
//! ```

pub mod error;
pub mod io;
pub mod raster;
pub mod types;

pub use error::{Error, Result};
pub use raster::{Pixel, Raster, RasterHeader, Sample, HEADER_LEN, MAX_RASTER_BYTES};
pub use types::DataType;
