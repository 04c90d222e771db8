//! Configuration types for directory walks

use super::filter::ExtensionFilter;

/// What a walk yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Regular files (and symlinks resolving to them).
    #[default]
    Files,
    /// Directories below the root, never the root itself.
    Dirs,
}

/// Configuration for a breadth-first walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Only yield files whose path ends with one of these suffixes.
    /// Ignored in [`WalkMode::Dirs`].
    pub extensions: Option<ExtensionFilter>,
    /// Descend into subdirectories. When false only the root is scanned.
    pub recursive: bool,
    /// Convert every yielded path to an absolute path.
    pub absolute: bool,
    pub mode: WalkMode,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            extensions: None,
            recursive: true,
            absolute: true,
            mode: WalkMode::Files,
        }
    }
}

impl WalkConfig {
    pub fn files() -> Self {
        Self::default()
    }

    pub fn dirs() -> Self {
        Self {
            mode: WalkMode::Dirs,
            ..Self::default()
        }
    }

    pub fn with_extensions(mut self, filter: ExtensionFilter) -> Self {
        self.extensions = Some(filter);
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }
}
