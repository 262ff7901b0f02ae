use crate::error::ConverterError;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct OutputGenerator {
    output_dir: PathBuf,
    outputs: Vec<(String, PathBuf)>,
}

impl OutputGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            outputs: Vec::new(),
        }
    }

    /// The directory all outputs are placed in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Registers an output and returns the path it is written to
    ///
    /// Names are compared ignoring ASCII case since they collide on case-insensitive
    /// filesystems.
    pub fn claim(&mut self, name: &str) -> Result<PathBuf, ConverterError> {
        if let Some((_, path)) = self
            .outputs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            return Err(ConverterError::DuplicatedOutput {
                name: name.to_owned(),
                path: path.clone(),
            });
        }

        let path = self.output_dir.join(name);
        self.outputs.push((name.to_owned(), path.clone()));
        Ok(path)
    }

    /// Drops an output that was claimed but never written
    pub fn release(&mut self, name: &str) {
        self.outputs.retain(|(n, _)| n != name);
    }

    pub fn finalize(self) -> BuildOutputs {
        BuildOutputs {
            outputs: self.outputs,
        }
    }
}

/// The files produced by a conversion run.
#[derive(Debug)]
pub struct BuildOutputs {
    outputs: Vec<(String, PathBuf)>,
}

impl BuildOutputs {
    pub fn get_output(&self, name: &str) -> Result<&Path, ConverterError> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, path)| path.as_path())
            .ok_or_else(|| ConverterError::OutputNotFound(name.to_owned()))
    }

    /// Iterates the outputs in the order they were claimed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.outputs
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
