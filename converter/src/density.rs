//! PNG encoding with a fixed resolution tag.
//!
//! PNG stores the resolution in the `pHYs` chunk as pixels per metre, so 72 DPI
//! is written as 2835 and converted back by rounding.

use crate::error::ConverterError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// The resolution every written raster reports.
pub const DPI: u32 = 72;

const METERS_PER_INCH: f64 = 0.0254;

pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

pub fn ppm_to_dpi(ppm: u32) -> u32 {
    (ppm as f64 * METERS_PER_INCH).round() as u32
}

/// Writes straight RGBA8 data as a PNG tagged with [`DPI`].
pub fn write_png(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<(), ConverterError> {
    let writer = BufWriter::new(File::create(path)?);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let ppm = dpi_to_ppm(DPI);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;

    Ok(())
}

/// Reads the resolution tag of a PNG as `(horizontal, vertical)` DPI.
///
/// Returns `None` if the file carries no metric resolution.
pub fn read_density(path: impl AsRef<Path>) -> Result<Option<(u32, u32)>, ConverterError> {
    let decoder = png::Decoder::new(File::open(path)?);
    let reader = decoder.read_info()?;

    Ok(match reader.info().pixel_dims {
        Some(png::PixelDimensions {
            xppu,
            yppu,
            unit: png::Unit::Meter,
        }) => Some((ppm_to_dpi(xppu), ppm_to_dpi(yppu))),
        _ => None,
    })
}
