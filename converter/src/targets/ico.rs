use crate::density;
use crate::error::ConverterError;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Packs resized copies of `base` into a Windows icon at `dest`.
///
/// Every size is first written as a 72 DPI PNG frame into a temporary directory
/// next to `dest`, the frames are then read back in order and bundled. The
/// temporary directory is removed on every exit path.
pub fn pack_ico(base: &Path, dest: &Path, sizes: &[u32]) -> Result<(), ConverterError> {
    if sizes.is_empty() {
        return Err(ConverterError::NoIcoSizes);
    }

    if let Some(&size) = sizes.iter().find(|&&s| !(1..=256).contains(&s)) {
        return Err(ConverterError::InvalidIcoSize(size));
    }

    let img = image::open(base)?.into_rgba8();

    let frames_dir = tempfile::Builder::new()
        .prefix(".ico-frames-")
        .tempdir_in(super::sibling_dir(dest))?;

    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let frame = frames_dir.path().join(format!("temp_{size}x{size}.png"));
        let resized = image::imageops::resize(&img, size, size, FilterType::Lanczos3);
        density::write_png(&frame, size, size, resized.as_raw())?;

        tracing::debug!("Staged ICO frame {}", frame.display());
        frames.push(frame);
    }

    // Generate a new ICO directory, the first frame becomes the base entry
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for frame in &frames {
        let icon_image = ico::IconImage::read_png(BufReader::new(File::open(frame)?))?;
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image)?);
    }

    // Write the ICO directory to the output
    let writer = File::create(dest)?;
    icon_dir.write(writer)?;

    frames_dir.close()?;

    tracing::info!("Created {}", dest.display());
    Ok(())
}
