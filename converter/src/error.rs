use resvg::usvg;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("the source file {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to parse SVG: {0}")]
    SvgParse(usvg::Error),

    #[error("the pixmap dimensions are invalid: {width}x{height}")]
    InvalidPixmapDimensions { width: u32, height: u32 },

    #[error("the scale factor {scale} cannot be applied to a {width}x{height} image")]
    InvalidScale { scale: u32, width: u32, height: u32 },

    #[error("the size {0} cannot be stored in an ICO file")]
    InvalidIcoSize(u32),

    #[error("an ICO file needs at least one size")]
    NoIcoSizes,

    #[error("an error occurred while encoding the PNG: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("an error occurred while decoding the PNG: {0}")]
    PngDecoding(#[from] png::DecodingError),

    #[error("an error occurred while processing the image: {0}")]
    Image(#[from] image::ImageError),

    #[error("the output {name} has already been generated at {}", path.display())]
    DuplicatedOutput { name: String, path: PathBuf },

    #[error("the output {0} was not found in the generated outputs")]
    OutputNotFound(String),

    #[error("the packaging tool {0} is not available")]
    PackagerUnavailable(String),

    #[error("the packaging tool {tool} failed with {status}: {stderr}")]
    PackagerFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },
}
