//! Case-insensitive extension filtering for file walks

use std::path::Path;

/// A set of lowercase, dot-prefixed suffixes.
///
/// Suffixes given without a leading dot are normalised, so `"CSV"` and
/// `".csv"` build the same filter. Matching compares against the tail of the
/// whole path, lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        suffixes.into_iter().collect()
    }

    /// Build a filter from one of the lists in [`crate::walk::presets`].
    pub fn from_preset(preset: &[&str]) -> Self {
        Self::new(preset.iter().copied())
    }

    /// Add a suffix, normalising case and the leading dot.
    pub fn insert(&mut self, suffix: &str) {
        let normalized = normalize_suffix(suffix);
        if !normalized.is_empty() && !self.suffixes.contains(&normalized) {
            self.suffixes.push(normalized);
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Check whether `path` ends with one of the suffixes, ignoring case.
    pub fn matches(&self, path: &Path) -> bool {
        let lowered = path.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|s| lowered.ends_with(s.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = Self::default();
        for suffix in iter {
            filter.insert(suffix.as_ref());
        }
        filter
    }
}

fn normalize_suffix(suffix: &str) -> String {
    let trimmed = suffix.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{}", lowered)
    }
}
