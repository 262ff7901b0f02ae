use crate::error::ConverterError;

/// Describes every file a conversion run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    /// The full resolution PNG, also used as the base of the ICO file
    pub base: PngTarget,

    /// Additional PNGs rendered from the source, in generation order
    pub pngs: Vec<PngTarget>,

    /// The double-density PNG rendered from the source
    pub retina: PngTarget,

    /// The Windows icon
    pub ico: IcoTarget,

    /// The macOS icon bundle
    pub icns: IcnsTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngTarget {
    /// The file name inside the output directory
    pub file_name: String,

    /// The width of the png
    pub width: u32,

    /// The height of the png
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoTarget {
    /// The file name inside the output directory
    pub file_name: String,

    /// The sizes to include in the ico file, the first one is the base frame
    pub sizes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcnsTarget {
    /// The file name inside the output directory
    pub file_name: String,

    /// The logical sizes staged into the iconset
    pub sizes: Vec<u32>,

    /// Sizes below this also get an @2x variant
    pub retina_below: u32,
}

impl PngTarget {
    pub fn new(file_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.into(),
            width,
            height,
        }
    }

    pub fn square(file_name: impl Into<String>, size: u32) -> Self {
        Self::new(file_name, size, size)
    }
}

impl IcnsTarget {
    /// Lists the iconset entries as `(file name, pixel size)`.
    pub fn staged_files(&self) -> Result<Vec<(String, u32)>, ConverterError> {
        let mut files = Vec::with_capacity(self.sizes.len() * 2);

        for &size in &self.sizes {
            files.push((format!("icon_{size}x{size}.png"), size));

            if size < self.retina_below {
                let retina = size
                    .checked_mul(2)
                    .ok_or(ConverterError::InvalidPixmapDimensions {
                        width: size,
                        height: size,
                    })?;
                files.push((format!("icon_{size}x{size}@2x.png"), retina));
            }
        }

        Ok(files)
    }
}

impl IconLayout {
    /// Every output file name, in the order the pipeline produces them.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.file_name.as_str())
            .chain(self.pngs.iter().map(|p| p.file_name.as_str()))
            .chain([
                self.retina.file_name.as_str(),
                self.ico.file_name.as_str(),
                self.icns.file_name.as_str(),
            ])
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self {
            base: PngTarget::square("icon.png", 1024),
            pngs: vec![
                PngTarget::square("32x32.png", 32),
                PngTarget::square("128x128.png", 128),
                PngTarget::square("Square30x30Logo.png", 30),
                PngTarget::square("Square44x44Logo.png", 44),
                PngTarget::square("Square71x71Logo.png", 71),
                PngTarget::square("Square89x89Logo.png", 89),
                PngTarget::square("Square107x107Logo.png", 107),
                PngTarget::square("Square142x142Logo.png", 142),
                PngTarget::square("Square150x150Logo.png", 150),
                PngTarget::square("Square284x284Logo.png", 284),
                PngTarget::square("Square310x310Logo.png", 310),
                PngTarget::square("StoreLogo.png", 50),
            ],
            retina: PngTarget::square("128x128@2x.png", 256),
            ico: IcoTarget {
                file_name: "icon.ico".to_owned(),
                sizes: vec![128],
            },
            icns: IcnsTarget {
                file_name: "icon.icns".to_owned(),
                sizes: vec![16, 32, 64, 128, 256, 512, 1024],
                retina_below: 512,
            },
        }
    }
}
