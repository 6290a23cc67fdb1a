//! I/O utilities for tile-raster
//!
//! The byte-level sample codec plus file and stream persistence of
//! encoded rasters.

pub mod byte_order;
pub mod file;

pub use file::{open_with_options, read_from, read_header, read_raster, write_raster, write_to};
