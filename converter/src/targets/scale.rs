use crate::density;
use crate::error::ConverterError;
use image::imageops::FilterType;
use std::path::Path;

pub const DEFAULT_SCALE: u32 = 2;

/// Upscales an existing raster by an integer factor using Lanczos resampling.
pub fn upscale(src: &Path, dest: &Path, scale: u32) -> Result<(), ConverterError> {
    let img = image::open(src)?.into_rgba8();
    let (width, height) = img.dimensions();

    let invalid = || ConverterError::InvalidScale {
        scale,
        width,
        height,
    };

    if scale == 0 {
        return Err(invalid());
    }

    let new_width = width.checked_mul(scale).ok_or_else(invalid)?;
    let new_height = height.checked_mul(scale).ok_or_else(invalid)?;

    let scaled = image::imageops::resize(&img, new_width, new_height, FilterType::Lanczos3);
    density::write_png(dest, new_width, new_height, scaled.as_raw())?;

    tracing::info!(
        "Created {} ({}x{}, {} DPI)",
        dest.display(),
        new_width,
        new_height,
        density::DPI
    );
    Ok(())
}
