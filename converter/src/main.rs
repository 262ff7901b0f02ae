use std::path::Path;
use std::process::ExitCode;
use svg_icon_converter::{ConverterError, IconLayout, IconPipeline, IconUtil};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const SOURCE_FILE: &str = "icon.svg";
const OUTPUT_DIR: &str = "output";

fn main() -> ExitCode {
    // Set up logging using tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::debug!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let pipeline = IconPipeline::new(IconLayout::default(), Box::new(IconUtil::locate()));

    match pipeline.run(Path::new(SOURCE_FILE), Path::new(OUTPUT_DIR)) {
        Ok(outputs) => {
            tracing::info!(
                "All {} icons were created at {} DPI",
                outputs.len(),
                svg_icon_converter::density::DPI
            );
            ExitCode::SUCCESS
        }
        Err(ConverterError::SourceNotFound(path)) => {
            tracing::error!("Source file {} not found", path.display());
            ExitCode::from(1)
        }
        Err(err) => {
            tracing::error!("Failed to convert {}: {}", SOURCE_FILE, err);
            ExitCode::from(2)
        }
    }
}
