//! Breadth-first directory walking
//!
//! [`Walker`] is the lazy core: an iterator that keeps its own frontier and
//! scans one directory at a time. The `yield_*` helpers build walkers with the
//! common settings and the `get_*` helpers drain them into a `Vec`.

mod config;
mod filter;
pub mod presets;
mod walker;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::{WalkConfig, WalkMode};
pub use filter::ExtensionFilter;
pub use walker::Walker;

/// Start a walk over `root` with an explicit configuration.
pub fn walk_entries(root: impl AsRef<Path>, config: WalkConfig) -> Walker {
    Walker::new(root, config)
}

/// Lazily yield files under `directory`, optionally limited to `extensions`.
pub fn yield_files_in(
    directory: impl AsRef<Path>,
    extensions: Option<ExtensionFilter>,
    recursive: bool,
    absolute: bool,
) -> Walker {
    let mut config = WalkConfig::files()
        .with_recursive(recursive)
        .with_absolute(absolute);
    config.extensions = extensions;
    Walker::new(directory, config)
}

/// Collect every file under `directory`. Stops at the first filesystem error.
pub fn get_files_in(
    directory: impl AsRef<Path>,
    extensions: Option<ExtensionFilter>,
    recursive: bool,
    absolute: bool,
) -> Result<Vec<PathBuf>> {
    yield_files_in(directory, extensions, recursive, absolute).collect_paths()
}

/// Lazily yield directories under `directory` (the root itself is excluded).
pub fn yield_dirs_in(directory: impl AsRef<Path>, recursive: bool, absolute: bool) -> Walker {
    Walker::new(
        directory,
        WalkConfig::dirs()
            .with_recursive(recursive)
            .with_absolute(absolute),
    )
}

pub fn get_dirs_in(
    directory: impl AsRef<Path>,
    recursive: bool,
    absolute: bool,
) -> Result<Vec<PathBuf>> {
    yield_dirs_in(directory, recursive, absolute).collect_paths()
}
