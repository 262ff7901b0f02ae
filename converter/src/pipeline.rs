use crate::error::ConverterError;
use crate::gen::{BuildOutputs, OutputGenerator};
use crate::layout::IconLayout;
use crate::packager::IconsetPackager;
use crate::source::SvgSource;
use crate::targets;
use crate::targets::icns::BundleOutcome;
use std::path::Path;

/// Converts one vector source into every file described by an [`IconLayout`].
pub struct IconPipeline {
    layout: IconLayout,
    packager: Box<dyn IconsetPackager>,
}

impl IconPipeline {
    pub fn new(layout: IconLayout, packager: Box<dyn IconsetPackager>) -> Self {
        Self { layout, packager }
    }

    pub fn layout(&self) -> &IconLayout {
        &self.layout
    }

    /// Runs every step in order, the first failure aborts the run.
    ///
    /// Files written before a failure are left in place.
    pub fn run(&self, source: &Path, output_dir: &Path) -> Result<BuildOutputs, ConverterError> {
        if !source.is_file() {
            return Err(ConverterError::SourceNotFound(source.to_path_buf()));
        }

        // Claim every name up front so collisions fail before anything is written
        let layout = &self.layout;
        let mut outputs = OutputGenerator::new(output_dir);
        let base_path = outputs.claim(&layout.base.file_name)?;
        let png_paths = layout
            .pngs
            .iter()
            .chain(std::iter::once(&layout.retina))
            .map(|png| outputs.claim(&png.file_name).map(|path| (png, path)))
            .collect::<Result<Vec<_>, ConverterError>>()?;
        let ico_path = outputs.claim(&layout.ico.file_name)?;
        let icns_path = outputs.claim(&layout.icns.file_name)?;

        std::fs::create_dir_all(outputs.output_dir())?;

        tracing::debug!("Loading {}", source.display());
        let source = SvgSource::load(source)?;

        targets::png::rasterize(&source, &base_path, layout.base.width, layout.base.height)?;

        for (png, path) in &png_paths {
            targets::png::rasterize(&source, path, png.width, png.height)?;
        }

        targets::ico::pack_ico(&base_path, &ico_path, &layout.ico.sizes)?;

        let outcome = targets::icns::build_icns(
            &source,
            &icns_path,
            &layout.icns,
            self.packager.as_ref(),
        )?;

        if outcome == BundleOutcome::Skipped {
            outputs.release(&layout.icns.file_name);
        }

        Ok(outputs.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density;
    use crate::layout::{IcnsTarget, IcoTarget, PngTarget};
    use crate::source::tests::write_square_svg;

    struct NoPackager;

    impl IconsetPackager for NoPackager {
        fn name(&self) -> &str {
            "none"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn package(&self, _: &Path, _: &Path) -> Result<(), ConverterError> {
            Err(ConverterError::PackagerUnavailable(self.name().to_owned()))
        }
    }

    struct CopyPackager;

    impl IconsetPackager for CopyPackager {
        fn name(&self) -> &str {
            "copy"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn package(&self, iconset: &Path, output: &Path) -> Result<(), ConverterError> {
            std::fs::copy(iconset.join("icon_16x16.png"), output)?;
            Ok(())
        }
    }

    fn small_layout() -> IconLayout {
        IconLayout {
            base: PngTarget::square("icon.png", 256),
            pngs: vec![
                PngTarget::square("32x32.png", 32),
                PngTarget::new("Wide.png", 60, 20),
            ],
            retina: PngTarget::square("32x32@2x.png", 64),
            ico: IcoTarget {
                file_name: "icon.ico".to_owned(),
                sizes: vec![32, 16],
            },
            icns: IcnsTarget {
                file_name: "icon.icns".to_owned(),
                sizes: vec![16, 32],
                retina_below: 32,
            },
        }
    }

    fn list_dir(path: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(path)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn produces_every_output_of_an_alternate_layout() {
        let dir = tempfile::tempdir().unwrap();
        let svg = write_square_svg(dir.path());
        let out = dir.path().join("output");

        let pipeline = IconPipeline::new(small_layout(), Box::new(CopyPackager));
        let outputs = pipeline.run(&svg, &out).unwrap();

        assert_eq!(outputs.len(), 6);
        for (name, path) in outputs.iter() {
            assert_eq!(path, out.join(name));
            assert!(path.is_file(), "{} was not written", path.display());
        }
        assert_eq!(
            list_dir(&out),
            [
                "32x32.png",
                "32x32@2x.png",
                "Wide.png",
                "icon.icns",
                "icon.ico",
                "icon.png"
            ]
        );

        let wide = outputs.get_output("Wide.png").unwrap();
        assert_eq!(image::image_dimensions(wide).unwrap(), (60, 20));
        assert_eq!(density::read_density(wide).unwrap(), Some((72, 72)));

        let retina = outputs.get_output("32x32@2x.png").unwrap();
        assert_eq!(image::image_dimensions(retina).unwrap(), (64, 64));
    }

    #[test]
    fn skipped_bundle_is_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        let svg = write_square_svg(dir.path());
        let out = dir.path().join("output");

        let pipeline = IconPipeline::new(small_layout(), Box::new(NoPackager));
        let outputs = pipeline.run(&svg, &out).unwrap();

        assert!(outputs.get_output("icon.icns").is_err());
        assert_eq!(outputs.iter().last().unwrap().0, "icon.ico");
        assert!(!list_dir(&out).iter().any(|n| n.ends_with(".iconset")));
        assert!(!out.join("icon.icns").exists());
    }

    #[test]
    fn missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");

        let pipeline = IconPipeline::new(small_layout(), Box::new(NoPackager));
        let err = pipeline.run(&dir.path().join("icon.svg"), &out).err().unwrap();

        assert!(matches!(err, ConverterError::SourceNotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn colliding_names_fail_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svg = write_square_svg(dir.path());
        let out = dir.path().join("output");

        let mut layout = small_layout();
        layout.pngs.push(PngTarget::square("icon.png", 48));

        let pipeline = IconPipeline::new(layout, Box::new(NoPackager));
        let err = pipeline.run(&svg, &out).err().unwrap();

        assert!(matches!(err, ConverterError::DuplicatedOutput { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn names_differing_in_case_fail_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svg = write_square_svg(dir.path());
        let out = dir.path().join("output");

        let mut layout = small_layout();
        layout.retina = PngTarget::square("ICON.ico", 64);

        let pipeline = IconPipeline::new(layout, Box::new(NoPackager));
        let err = pipeline.run(&svg, &out).err().unwrap();

        assert!(matches!(err, ConverterError::DuplicatedOutput { ref name, .. } if name == "icon.ico"));
        assert!(!out.exists());
    }

    #[test]
    fn failing_step_keeps_earlier_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let svg = write_square_svg(dir.path());
        let out = dir.path().join("output");

        let mut layout = small_layout();
        layout.pngs.push(PngTarget::new("Empty.png", 0, 10));

        let pipeline = IconPipeline::new(layout, Box::new(NoPackager));
        let err = pipeline.run(&svg, &out).err().unwrap();

        assert!(matches!(err, ConverterError::InvalidPixmapDimensions { .. }));
        assert_eq!(list_dir(&out), ["32x32.png", "Wide.png", "icon.png"]);
    }
}
