//! Platform rules for names a rename may produce.
//!
//! References:
//! - <https://stackoverflow.com/questions/1976007/what-characters-are-forbidden-in-windows-and-linux-directory-names>

use crate::constants::{WINDOWS_FORBIDDEN_CHARS, WINDOWS_RESERVED_NAMES};
use crate::file::PathEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Platform {
    /// The platform rena was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Returns false if `file` can't be stored under its new name on this platform.
    pub fn is_safe_name(self, file: &PathEntity) -> bool {
        let full_name = file.full_name();
        match self {
            Platform::Windows => {
                let reserved = WINDOWS_RESERVED_NAMES
                    .iter()
                    .any(|word| word.eq_ignore_ascii_case(&file.name));
                let bad_name = full_name.contains(WINDOWS_FORBIDDEN_CHARS);
                // separators and a drive prefix are allowed in the directory
                let bad_dir = strip_drive(&file.base_dir)
                    .chars()
                    .any(|c| c != '/' && c != '\\' && WINDOWS_FORBIDDEN_CHARS.contains(&c));
                !(reserved || bad_name || bad_dir)
            }
            Platform::Linux => !(full_name.contains('/') || full_name == "." || full_name == ".."),
            Platform::MacOs => !(full_name.contains('/') || full_name.contains(':')),
            Platform::Other => true,
        }
    }
}

fn strip_drive(dir: &str) -> &str {
    match dir.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => &dir[2..],
        _ => dir,
    }
}

/// Checks `file` against the rules of the current platform.
pub fn is_safe_name(file: &PathEntity) -> bool {
    Platform::current().is_safe_name(file)
}
