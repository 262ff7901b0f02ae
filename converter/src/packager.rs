use crate::error::ConverterError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An external tool that merges a staged `.iconset` directory into a bundle file.
pub trait IconsetPackager {
    /// The name of the tool, used in messages
    fn name(&self) -> &str;

    /// Whether the tool can be invoked on this system
    fn is_available(&self) -> bool;

    /// Packages the iconset into the output file
    fn package(&self, iconset: &Path, output: &Path) -> Result<(), ConverterError>;
}

/// The macOS `iconutil` command line tool.
#[derive(Debug, Clone)]
pub struct IconUtil {
    executable: Option<PathBuf>,
}

impl IconUtil {
    pub const TOOL_NAME: &'static str = "iconutil";

    /// Looks up `iconutil` on the `PATH`.
    pub fn locate() -> Self {
        let executable = match which::which(Self::TOOL_NAME) {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::debug!("{} not found: {}", Self::TOOL_NAME, err);
                None
            }
        };

        Self { executable }
    }

    /// Uses the given executable instead of searching the `PATH`.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }
}

impl IconsetPackager for IconUtil {
    fn name(&self) -> &str {
        Self::TOOL_NAME
    }

    fn is_available(&self) -> bool {
        self.executable.is_some()
    }

    fn package(&self, iconset: &Path, output: &Path) -> Result<(), ConverterError> {
        let executable = self
            .executable
            .as_ref()
            .ok_or_else(|| ConverterError::PackagerUnavailable(Self::TOOL_NAME.to_owned()))?;

        tracing::debug!(
            "Running {} -c icns {} -o {}",
            executable.display(),
            iconset.display(),
            output.display()
        );

        let result = Command::new(executable)
            .arg("-c")
            .arg("icns")
            .arg(iconset)
            .arg("-o")
            .arg(output)
            .output()?;

        if !result.status.success() {
            return Err(ConverterError::PackagerFailed {
                tool: Self::TOOL_NAME.to_owned(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_owned(),
            });
        }

        Ok(())
    }
}
