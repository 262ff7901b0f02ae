pub mod icns;
pub mod ico;
pub mod png;
pub mod scale;

use std::path::Path;

/// The directory scoped temporaries for `dest` are created in.
fn sibling_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
