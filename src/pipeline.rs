//! Builds the rename plan for a batch of input paths.
//!
//! Every input gets its own [`PathEntity`] which is threaded through the
//! whole command list in order. The result is compared with the original
//! path: unchanged, empty and unsafe results are skipped, and two inputs
//! ending up at the same path abort the batch.

use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::file::PathEntity;

/// One file to rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub original: PathEntity,
    pub proposed: PathEntity,
}

impl PlanEntry {
    pub fn original_path(&self) -> PathBuf {
        self.original.full_path()
    }

    pub fn proposed_path(&self) -> PathBuf {
        self.proposed.full_path()
    }
}

/// Why an input was left out of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The new name is rejected by the platform
    UnsafeName,
    /// The commands did not change the path
    Unchanged,
    EmptyPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry: PlanEntry,
    pub reason: SkipReason,
}

/// The renames to perform, in input order, and the inputs left out.
#[derive(Debug, Default)]
pub struct RenamePlan {
    pub entries: Vec<PlanEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the entries as a JSON array of `{ "from", "to" }` objects.
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<PlanRecord> = self.entries.iter().map(PlanRecord::from).collect();
        serde_json::to_string_pretty(&records).map_err(|e| Error::IoError(e.into()))
    }
}

#[derive(Debug, Serialize)]
struct PlanRecord {
    from: String,
    to: String,
}

impl From<&PlanEntry> for PlanRecord {
    fn from(entry: &PlanEntry) -> Self {
        Self {
            from: entry.original.to_string(),
            to: entry.proposed.to_string(),
        }
    }
}

/// Runs every command of the list over `path`.
///
/// # Errors
/// The first failing command aborts the run.
pub fn apply_commands(commands: &[Option<Command>], path: &str) -> Result<PlanEntry> {
    let original = PathEntity::new(path);
    let mut proposed = original.clone();
    for command in commands.iter().flatten() {
        command.apply(&mut proposed)?;
    }
    Ok(PlanEntry { original, proposed })
}

fn skip_reason<F>(entry: &PlanEntry, is_safe: &F) -> Option<SkipReason>
where
    F: Fn(&PathEntity) -> bool,
{
    let original = entry.original_path();
    let proposed = entry.proposed_path();

    if !is_safe(&entry.proposed) {
        Some(SkipReason::UnsafeName)
    } else if entry.original.full_name().is_empty() || entry.proposed.full_name().is_empty() {
        // a directory alone is not a file name
        Some(SkipReason::EmptyPath)
    } else if original == proposed {
        Some(SkipReason::Unchanged)
    } else {
        None
    }
}

/// Applies `commands` to each input and collects the resulting renames.
///
/// # Arguments
/// * `commands` - Parsed command list, blank positions included
/// * `inputs` - Paths to rename, in the order given by the user
/// * `is_safe` - Predicate rejecting names the platform cannot store
///
/// # Errors
/// * Any error raised while applying a command
/// * `Error::Conflict` if two inputs would be renamed to the same path
pub fn build_plan<S, F>(
    commands: &[Option<Command>],
    inputs: &[S],
    is_safe: F,
) -> Result<RenamePlan>
where
    S: AsRef<str>,
    F: Fn(&PathEntity) -> bool,
{
    let mut plan = RenamePlan::default();
    let mut targets: HashMap<PathBuf, PathBuf> = HashMap::new();

    for input in inputs {
        let entry = apply_commands(commands, input.as_ref())?;

        if let Some(reason) = skip_reason(&entry, &is_safe) {
            debug!("Skipping '{}' ({:?})", entry.original, reason);
            plan.skipped.push(SkippedEntry { entry, reason });
            continue;
        }

        let proposed = entry.proposed_path();
        if let Some(first) = targets.get(&proposed) {
            return Err(Error::Conflict {
                first: first.display().to_string(),
                second: entry.original.to_string(),
                target: proposed.display().to_string(),
            });
        }

        targets.insert(proposed, entry.original_path());
        plan.entries.push(entry);
    }

    Ok(plan)
}
