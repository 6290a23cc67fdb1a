//! Bulk fills across the payload

use rayon::prelude::*;

use super::{Pixel, Raster};
use crate::error::{Error, Result};

impl Raster {
    /// Sets every sample of every band to `value`
    ///
    /// `value` is converted to the storage type once, then copied into
    /// each pixel in parallel.
    pub fn fill<T: Pixel>(&mut self, value: T) {
        let encoded = value.into_sample(self.data_type()).to_bytes();
        let bpp = encoded.len();

        self.payload_mut()
            .par_chunks_mut(bpp)
            .for_each(|sample| sample.copy_from_slice(&encoded));
    }

    /// Sets every sample of one band to `value`
    pub fn fill_band<T: Pixel>(&mut self, band: u16, value: T) -> Result<()> {
        if band >= self.bands() {
            return Err(Error::BandOutOfBounds {
                band,
                bands: self.bands(),
            });
        }

        let encoded = value.into_sample(self.data_type()).to_bytes();
        let bpp = encoded.len();
        let stride = bpp * self.bands() as usize;
        let start = band as usize * bpp;

        self.payload_mut()
            .par_chunks_mut(stride)
            .for_each(|pixel| pixel[start..start + bpp].copy_from_slice(&encoded));
        Ok(())
    }
}
