//! Byte sizes: human-readable formatting, parsing, and directory usage

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::walk::{WalkConfig, Walker};

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB"];

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(\.\d+)?)(B|KB|MB|GB|TB)$").expect("SIZE_PATTERN regex is invalid")
});

/// Size of a kilobyte when parsing sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KbSize {
    /// 1000 bytes
    Decimal,
    /// 1024 bytes
    #[default]
    Binary,
}

impl KbSize {
    fn bytes(self) -> f64 {
        match self {
            KbSize::Decimal => 1000.0,
            KbSize::Binary => 1024.0,
        }
    }
}

/// Format a byte count with binary units, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are rounded to two decimals with trailing zeros trimmed (one is
/// always kept). Zero is `"0B"`.
pub fn bytes_readable(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(value), UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Parse sizes such as `"512"`, `"1.5 KB"` or `"2gb"` into bytes.
///
/// Case and spaces are ignored. Fractional results are truncated.
pub fn readable_size_to_bytes(text: &str, kb: KbSize) -> Result<u64> {
    let normalized: String = text
        .chars()
        .filter(|c| *c != ' ')
        .collect::<String>()
        .to_uppercase();

    if !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_digit()) {
        return normalized
            .parse()
            .map_err(|_| Error::InvalidSize(text.to_string()));
    }

    let caps = SIZE_PATTERN
        .captures(&normalized)
        .ok_or_else(|| Error::InvalidSize(text.to_string()))?;
    let number: f64 = caps[1]
        .parse()
        .map_err(|_| Error::InvalidSize(text.to_string()))?;
    let exponent = match &caps[3] {
        "B" => 0,
        "KB" => 1,
        "MB" => 2,
        "GB" => 3,
        "TB" => 4,
        other => return Err(Error::InvalidSize(format!("unknown unit {}", other))),
    };

    let bytes = number * kb.bytes().powi(exponent);
    if bytes >= u64::MAX as f64 {
        return Err(Error::InvalidSize(text.to_string()));
    }
    Ok(bytes as u64)
}

/// Totals gathered from a recursive walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirUsage {
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

impl DirUsage {
    pub fn readable(&self) -> String {
        bytes_readable(self.bytes)
    }
}

/// Accumulates [`DirUsage`] one entry at a time.
#[derive(Debug, Default)]
pub struct UsageCollector {
    usage: DirUsage,
}

impl UsageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file. Symlinks are counted as neither files nor bytes.
    pub fn record_file(&mut self, path: &Path) -> Result<()> {
        let meta = std::fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
        if meta.file_type().is_symlink() {
            return Ok(());
        }
        self.usage.files += 1;
        self.usage.bytes += meta.len();
        Ok(())
    }

    pub fn record_directory(&mut self) {
        self.usage.directories += 1;
    }

    pub fn finalize(self) -> DirUsage {
        self.usage
    }
}

/// Count files, directories and bytes below `root`.
///
/// Symlinked files are skipped and symlinked directories are not entered.
pub fn dir_usage(root: impl AsRef<Path>) -> Result<DirUsage> {
    let root = root.as_ref();
    let mut collector = UsageCollector::new();

    for file in Walker::new(root, WalkConfig::files().with_absolute(false)) {
        collector.record_file(&file?)?;
    }
    for dir in Walker::new(root, WalkConfig::dirs().with_absolute(false)) {
        let dir = dir?;
        let is_link = std::fs::symlink_metadata(&dir)
            .map(|m| m.file_type().is_symlink())
            .map_err(|e| Error::io(&dir, e))?;
        if !is_link {
            collector.record_directory();
        }
    }

    let usage = collector.finalize();
    tracing::debug!(
        root = %root.display(),
        files = usage.files,
        directories = usage.directories,
        bytes = usage.bytes,
        "directory usage"
    );
    Ok(usage)
}

/// Total size in bytes of the regular files below `root`.
pub fn dir_size(root: impl AsRef<Path>) -> Result<u64> {
    dir_usage(root).map(|u| u.bytes)
}
