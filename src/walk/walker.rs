//! Walker - lazy breadth-first enumeration of a directory tree

use std::collections::VecDeque;
use std::fs::{self, DirEntry, ReadDir};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

use super::config::{WalkConfig, WalkMode};

/// Directory currently being enumerated.
struct Cursor {
    dir: PathBuf,
    entries: ReadDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir { via_symlink: bool },
    Other,
}

/// Breadth-first walk over a directory tree.
///
/// Directories wait in a frontier queue and are opened one at a time. At most
/// one directory handle is held, and it is closed once its entries run out or
/// the walker is dropped. Children come back in the order the OS lists them.
///
/// Failures are yielded as `Err` at the point the affected directory is
/// scanned. The walk can continue past an error if the caller keeps pulling.
pub struct Walker {
    config: WalkConfig,
    frontier: VecDeque<PathBuf>,
    cursor: Option<Cursor>,
}

impl Walker {
    pub fn new(root: impl AsRef<Path>, config: WalkConfig) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(root.as_ref().to_path_buf());
        Self {
            config,
            frontier,
            cursor: None,
        }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Drain the walk into a list, stopping at the first error.
    pub fn collect_paths(self) -> Result<Vec<PathBuf>> {
        self.collect()
    }

    fn open_next(&mut self) -> Option<Result<()>> {
        let dir = self.frontier.pop_front()?;
        tracing::trace!(dir = %dir.display(), pending = self.frontier.len(), "scanning directory");
        match fs::read_dir(&dir) {
            Ok(entries) => {
                self.cursor = Some(Cursor { dir, entries });
                Some(Ok(()))
            }
            Err(source) => {
                tracing::debug!(dir = %dir.display(), error = %source, "cannot read directory");
                Some(Err(Error::io(dir, source)))
            }
        }
    }

    /// Decide what to do with one child: yield it, enqueue it, both, or neither.
    fn visit(&mut self, entry: &DirEntry) -> Result<Option<PathBuf>> {
        let path = entry.path();
        let kind = entry_kind(entry).map_err(|e| Error::io(&path, e))?;

        match (kind, self.config.mode) {
            (EntryKind::Dir { via_symlink }, mode) => {
                // Linked directories are reported but not entered, which keeps
                // cycles out of the frontier.
                if self.config.recursive && !via_symlink {
                    self.frontier.push_back(path.clone());
                }
                if mode == WalkMode::Dirs {
                    return self.finish(path).map(Some);
                }
                Ok(None)
            }
            (EntryKind::File, WalkMode::Files) => {
                let wanted = match &self.config.extensions {
                    Some(filter) => filter.matches(&path),
                    None => true,
                };
                if wanted {
                    self.finish(path).map(Some)
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }

    fn finish(&self, path: PathBuf) -> Result<PathBuf> {
        if self.config.absolute {
            let absolute = std::path::absolute(&path).map_err(|e| Error::io(&path, e))?;
            Ok(normalize_lexical(&absolute))
        } else {
            Ok(path)
        }
    }
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
///
/// `..` at the root stays at the root.
fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl Iterator for Walker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cursor.is_none() {
                match self.open_next()? {
                    Ok(()) => {}
                    Err(e) => return Some(Err(e)),
                }
            }

            let cursor = self.cursor.as_mut()?;
            let entry = match cursor.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(source)) => return Some(Err(Error::io(&cursor.dir, source))),
                None => {
                    self.cursor = None;
                    continue;
                }
            };

            match self.visit(&entry) {
                Ok(Some(path)) => return Some(Ok(path)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl std::iter::FusedIterator for Walker {}

/// Classify an entry, following symlinks the way a stat would.
///
/// A dangling symlink is neither a file nor a directory.
fn entry_kind(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    if !file_type.is_symlink() {
        return Ok(if file_type.is_dir() {
            EntryKind::Dir { via_symlink: false }
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        });
    }

    match fs::metadata(entry.path()) {
        Ok(meta) if meta.is_dir() => Ok(EntryKind::Dir { via_symlink: true }),
        Ok(meta) if meta.is_file() => Ok(EntryKind::File),
        Ok(_) => Ok(EntryKind::Other),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(EntryKind::Other),
        Err(e) => Err(e),
    }
}
