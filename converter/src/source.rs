use crate::error::ConverterError;
use resvg::usvg;
use resvg::usvg::TreeParsing;
use std::path::{Path, PathBuf};

/// A parsed vector source, ready to be rendered at any size.
pub struct SvgSource {
    path: PathBuf,
    tree: resvg::Tree,
}

impl SvgSource {
    /// Reads and parses the SVG at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConverterError> {
        let path = path.as_ref();
        let icon_data = std::fs::read_to_string(path)?;

        // Resolve relative resources against the directory of the icon
        let parse_options = usvg::Options {
            resources_dir: path.parent().map(Path::to_path_buf),
            ..Default::default()
        };

        let icon =
            usvg::Tree::from_str(&icon_data, &parse_options).map_err(ConverterError::SvgParse)?;

        Ok(Self {
            path: path.to_path_buf(),
            tree: resvg::Tree::from_usvg(&icon),
        })
    }

    /// Retrieves the path the source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieves the render tree.
    pub fn tree(&self) -> &resvg::Tree {
        &self.tree
    }
}
