use crate::density;
use crate::error::ConverterError;
use crate::render;
use crate::source::SvgSource;
use std::path::Path;

/// Renders the source at exactly `width` x `height` into a 72 DPI PNG.
pub fn rasterize(
    source: &SvgSource,
    dest: &Path,
    width: u32,
    height: u32,
) -> Result<(), ConverterError> {
    // Render the SVG to a pixmap
    let pixmap = render::render_svg_to_pixmap(source.tree(), width, height)?;

    // Write the PNG to the output
    density::write_png(dest, width, height, &render::pixmap_to_rgba(&pixmap))?;

    tracing::info!(
        "Created {} ({}x{}, {} DPI)",
        dest.display(),
        width,
        height,
        density::DPI
    );
    Ok(())
}

/// Loads the SVG at `source` and rasterizes it once.
pub fn rasterize_file(
    source: &Path,
    dest: &Path,
    width: u32,
    height: u32,
) -> Result<(), ConverterError> {
    let source = SvgSource::load(source)?;
    rasterize(&source, dest, width, height)
}
