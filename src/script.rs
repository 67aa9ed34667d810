//! Loading of command scripts.
//! A script holds one command per line; blank lines are kept so that
//! parse errors point at the right line.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a command script and splits it into lines.
///
/// # Errors
/// * `Error::ScriptError` if the file can't be read
pub fn read_script<P: AsRef<Path>>(script_path: P) -> Result<Vec<String>> {
    let script_path = script_path.as_ref();
    debug!("Loading commands from {}", script_path.display());
    let contents = fs::read_to_string(script_path).map_err(|source| Error::ScriptError {
        path: script_path.display().to_string(),
        source,
    })?;

    Ok(contents.split('\n').map(str::to_string).collect())
}

/// Returns the commands of every script, in order, followed by `commands`.
pub fn collect_commands<P: AsRef<Path>>(scripts: &[P], commands: &[String]) -> Result<Vec<String>> {
    let mut collected = Vec::new();
    for script in scripts {
        collected.extend(read_script(script)?);
    }
    collected.extend(commands.iter().cloned());
    Ok(collected)
}
