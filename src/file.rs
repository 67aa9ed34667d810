//! In-memory representation of the path being renamed.

use std::fmt;
use std::path::{is_separator, PathBuf};

/// A file path split into directory, stem and extension.
///
/// `ext` is either empty or starts with `.`, so `name + ext` is always the
/// full file name. Commands rewrite the name/ext pair or the directory and
/// never touch the file system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathEntity {
    /// Directory including its trailing separator, or empty
    pub base_dir: String,
    /// File name without the extension
    pub name: String,
    /// Extension including the leading dot, or empty
    pub ext: String,
}

/// Splits a file name at its last dot. A dot before a separator does not count.
fn split_extension(full_name: &str) -> (&str, &str) {
    let start = full_name.rfind(is_separator).map_or(0, |i| i + 1);
    match full_name[start..].rfind('.') {
        Some(dot) => full_name.split_at(start + dot),
        None => (full_name, ""),
    }
}

impl PathEntity {
    /// Splits `path` into directory, stem and extension.
    pub fn new(path: &str) -> Self {
        let (base_dir, file_name) = match path.rfind(is_separator) {
            Some(i) => path.split_at(i + 1),
            None => ("", path),
        };
        let (name, ext) = split_extension(file_name);
        Self {
            base_dir: base_dir.to_string(),
            name: name.to_string(),
            ext: ext.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.ext)
    }

    /// Replaces the file name, deriving stem and extension again.
    pub fn set_full_name(&mut self, value: &str) {
        let (name, ext) = split_extension(value);
        self.name = name.to_string();
        self.ext = ext.to_string();
    }

    /// The extension without its leading dot.
    pub fn extension(&self) -> &str {
        self.ext.strip_prefix('.').unwrap_or(&self.ext)
    }

    pub fn full_path(&self) -> PathBuf {
        let full_name = self.full_name();
        if self.base_dir.is_empty() {
            PathBuf::from(full_name)
        } else {
            PathBuf::from(&self.base_dir).join(full_name)
        }
    }
}

impl From<&str> for PathEntity {
    fn from(path: &str) -> Self {
        PathEntity::new(path)
    }
}

impl fmt::Display for PathEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path().display())
    }
}
