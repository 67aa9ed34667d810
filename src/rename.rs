//! Executes a rename plan on the file system.
//!
//! Entries are renamed one at a time and independently: a failure is
//! reported for that entry and the rest of the plan still runs.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pipeline::{PlanEntry, RenamePlan};

/// Expands a leading `~/` to the home directory.
pub fn expand_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let rest = path.to_str().and_then(|p| p.strip_prefix("~/"));
    match (rest, std::env::var("HOME")) {
        (Some(rest), Ok(home)) => Path::new(&home).join(rest),
        _ => path.to_path_buf(),
    }
}

/// What executing an entry does to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameAction {
    Rename,
    /// The target already exists and will be replaced
    Overwrite,
}

impl RenameAction {
    pub fn for_entry(entry: &PlanEntry) -> Self {
        if expand_path(entry.proposed_path()).exists() {
            RenameAction::Overwrite
        } else {
            RenameAction::Rename
        }
    }

    /// Line shown before asking for confirmation.
    pub fn describe(self, entry: &PlanEntry) -> String {
        match self {
            RenameAction::Rename => format!("rename '{}' -> '{}'", entry.original, entry.proposed),
            RenameAction::Overwrite => {
                format!("overwrite '{}' <- '{}'", entry.proposed, entry.original)
            }
        }
    }

    /// Line shown once the entry has been executed.
    pub fn done(self, entry: &PlanEntry) -> String {
        match self {
            RenameAction::Rename => format!("renamed '{}' -> '{}'", entry.original, entry.proposed),
            RenameAction::Overwrite => {
                format!("overwritten '{}' <- '{}'", entry.proposed, entry.original)
            }
        }
    }
}

/// Makes sure the directory a file is moved into exists.
fn ensure_directory(dir: &Path) -> Result<()> {
    // drop the trailing separator, `file/` does not exist as far as stat goes
    let dir: PathBuf = dir.components().collect();
    if !dir.exists() {
        debug!("Creating directory '{}'", dir.display());
        return fs::create_dir_all(&dir).map_err(|source| Error::DirectoryError {
            path: dir.display().to_string(),
            source,
        });
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.display().to_string(),
        });
    }
    Ok(())
}

/// Renames a single file, creating the destination directory when the
/// entry moves it. Falls back to copy and remove when a plain rename fails,
/// for instance across file systems.
///
/// # Errors
/// * `Error::NotADirectory` if the destination exists but is not a directory
/// * `Error::DirectoryError` if the destination directory can't be created
/// * `Error::RenameError` if neither the rename nor the copy succeeds
pub fn rename_file(entry: &PlanEntry) -> Result<()> {
    if entry.original.base_dir != entry.proposed.base_dir {
        ensure_directory(&expand_path(&entry.proposed.base_dir))?;
    }

    let from = expand_path(entry.original_path());
    let to = expand_path(entry.proposed_path());
    let rename_error = |source: io::Error| Error::RenameError {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source,
    };

    if let Err(e) = fs::rename(&from, &to) {
        debug!("Rename failed ({}), copying '{}' instead", e, from.display());
        fs::copy(&from, &to).map_err(rename_error)?;
        fs::remove_file(&from).map_err(rename_error)?;
    }
    Ok(())
}

/// Result of executing one plan entry.
#[derive(Debug)]
pub enum Outcome {
    Done(RenameAction),
    /// The source file no longer exists
    Missing,
    Failed(Error),
}

/// Executes every entry of `plan` in order, returning one outcome per entry.
pub fn execute_plan(plan: &RenamePlan) -> Vec<(&PlanEntry, Outcome)> {
    plan.entries
        .iter()
        .map(|entry| {
            if !expand_path(entry.original_path()).exists() {
                return (entry, Outcome::Missing);
            }
            let action = RenameAction::for_entry(entry);
            let outcome = match rename_file(entry) {
                Ok(()) => Outcome::Done(action),
                Err(e) => Outcome::Failed(e),
            };
            (entry, outcome)
        })
        .collect()
}
