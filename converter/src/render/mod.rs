use crate::error::ConverterError;
use resvg::tiny_skia;

pub fn render_svg_into_pixmap(
    render_tree: &resvg::Tree,
    pixmap: &mut tiny_skia::PixmapMut,
    width: u32,
    height: u32,
) {
    // Compute the scale factor, each axis is stretched independently
    let x_scale = width as f32 / render_tree.size.width();
    let y_scale = height as f32 / render_tree.size.height();

    let transform = tiny_skia::Transform::from_scale(x_scale, y_scale);

    // Render the SVG to the pixmap
    render_tree.render(transform, pixmap);
}

pub fn render_svg_to_pixmap(
    render_tree: &resvg::Tree,
    target_width: u32,
    target_height: u32,
) -> Result<tiny_skia::Pixmap, ConverterError> {
    // Construct a pixmap to render to
    let mut pixmap = tiny_skia::Pixmap::new(target_width, target_height).ok_or(
        ConverterError::InvalidPixmapDimensions {
            width: target_width,
            height: target_height,
        },
    )?;

    render_svg_into_pixmap(render_tree, &mut pixmap.as_mut(), target_width, target_height);

    Ok(pixmap)
}

/// Converts the premultiplied pixmap data into straight RGBA.
pub fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());

    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    rgba
}
