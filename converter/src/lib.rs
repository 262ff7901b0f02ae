pub mod density;
pub mod error;
pub mod gen;
pub mod layout;
pub mod packager;
pub mod pipeline;
pub(crate) mod render;
pub mod source;
pub mod targets;

pub use error::ConverterError;
pub use layout::IconLayout;
pub use packager::{IconUtil, IconsetPackager};
pub use pipeline::IconPipeline;
