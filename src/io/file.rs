//! Raster persistence to files and streams
//!
//! Files hold the encoded buffer verbatim, so a file is readable by any
//! consumer that understands the header.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};
use crate::raster::{Raster, RasterHeader, HEADER_LEN};

/// Reads a whole raster file into memory
pub fn read_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    open_with_options(path, false)
}

/// Reads a raster file, optionally through a memory map
///
/// # Arguments
/// * `path` - Path to the raster file
/// * `use_mmap` - Map the file instead of streaming it (faster for large tiles)
///
/// Either way the returned raster owns its buffer; the map is dropped
/// before returning.
pub fn open_with_options<P: AsRef<Path>>(path: P, use_mmap: bool) -> Result<Raster> {
    let path = path.as_ref();
    log::debug!("reading raster {} (mmap: {})", path.display(), use_mmap);

    let file = File::open(path)?;
    if !use_mmap {
        return read_from(BufReader::new(file));
    }

    let mmap = unsafe { Mmap::map(&file)? };

    #[cfg(unix)]
    {
        let rc = unsafe {
            libc::madvise(
                mmap.as_ptr() as *mut libc::c_void,
                mmap.len(),
                libc::MADV_SEQUENTIAL,
            )
        };
        if rc != 0 {
            log::debug!(
                "madvise failed for {}: {}",
                path.display(),
                std::io::Error::last_os_error()
            );
        }
    }

    Raster::from_bytes(mmap.to_vec())
}

/// Reads only the header of a raster file
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<RasterHeader> {
    let mut file = File::open(path)?;
    let mut bytes = [0u8; HEADER_LEN];
    file.read_exact(&mut bytes)?;
    RasterHeader::read(&bytes)
}

/// Reads one encoded raster from a stream
///
/// Exactly the encoded length is consumed, so several rasters can be read
/// back to back from one stream. The buffer grows with the bytes actually
/// read, so a header declaring more than the stream holds fails without
/// allocating the declared size.
pub fn read_from<R: Read>(mut reader: R) -> Result<Raster> {
    let mut head = [0u8; HEADER_LEN];
    reader.read_exact(&mut head)?;

    let header = RasterHeader::read(&head)?;
    let payload_len = (header.checked_len()? - HEADER_LEN) as u64;

    let mut data = head.to_vec();
    let read = reader.by_ref().take(payload_len).read_to_end(&mut data)? as u64;
    if read != payload_len {
        return Err(Error::InvalidFormat(format!(
            "stream ended after {} of {} payload bytes",
            read, payload_len
        )));
    }

    Raster::from_bytes(data)
}

/// Writes the encoded raster to a stream
pub fn write_to<W: Write>(raster: &Raster, mut writer: W) -> Result<()> {
    writer.write_all(raster.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes the encoded raster to a file, replacing any existing one
pub fn write_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!(
        "writing raster {} ({} bytes)",
        path.display(),
        raster.as_bytes().len()
    );
    write_to(raster, BufWriter::new(File::create(path)?))
}
