use std::error::Error;

use tile_raster::{io, Raster, Result};

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let use_mmap = args.iter().any(|a| a == "--mmap");
    let verbose = args.iter().any(|a| a == "--verbose");
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("usage: raster-info <path> [--mmap] [--verbose]");
        std::process::exit(2);
    };

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()?;

    let raster = io::open_with_options(path, use_mmap)?;
    println!("{}", serde_json::to_string_pretty(raster.header())?);
    println!("Encoded size: {} bytes", raster.as_bytes().len());

    for band in 0..raster.bands() {
        let (min, max) = band_range(&raster, band)?;
        println!("  Band {}: min = {}, max = {}", band, min, max);
    }

    Ok(())
}

fn band_range(raster: &Raster, band: u16) -> Result<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let value = raster.get_pixel_double(x, y, band)?;
            if value.is_nan() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
        }
    }

    Ok((min, max))
}
