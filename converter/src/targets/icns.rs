use crate::error::ConverterError;
use crate::layout::IcnsTarget;
use crate::packager::IconsetPackager;
use crate::source::SvgSource;
use crate::targets::png::rasterize;
use std::path::Path;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BundleOutcome {
    /// The packager produced the bundle file
    Packaged,

    /// No packager is available, nothing was written
    Skipped,
}

/// Stages every iconset size rendered from `source` and packages them into `dest`.
///
/// The staging directory lives next to `dest` and is removed on every exit path,
/// including a failing packager.
pub fn build_icns(
    source: &SvgSource,
    dest: &Path,
    target: &IcnsTarget,
    packager: &dyn IconsetPackager,
) -> Result<BundleOutcome, ConverterError> {
    let staged_files = target.staged_files()?;

    // iconutil requires the input directory to carry the .iconset extension
    let iconset = tempfile::Builder::new()
        .prefix("icon-")
        .suffix(".iconset")
        .tempdir_in(super::sibling_dir(dest))?;

    for (file_name, size) in staged_files {
        rasterize(source, &iconset.path().join(file_name), size, size)?;
    }

    let outcome = if packager.is_available() {
        packager.package(iconset.path(), dest)?;
        tracing::info!("Created {}", dest.display());
        BundleOutcome::Packaged
    } else {
        tracing::warn!(
            "Skipping {}, creating it requires {} which is not available on this system",
            dest.display(),
            packager.name()
        );
        BundleOutcome::Skipped
    };

    iconset.close()?;
    Ok(outcome)
}
