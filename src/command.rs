//! The four rename commands and how each one rewrites a [`PathEntity`].

use log::debug;
use regex::Regex;

use crate::constants::CASE_INSENSITIVE_PREFIX;
use crate::error::{Error, Result};
use crate::file::PathEntity;
use crate::template::{expand_file_placeholders, substitute_captures};

/// A parsed rename command.
///
/// Matching is case-insensitive unless `match_case` is set, and patterns are
/// literal text unless `regex` is set. Search and delete collapse runs of
/// spaces in the result unless `keep_whitespace` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `s<sep>pattern<sep>replacement[<sep>flags]`
    Search {
        pattern: String,
        replacement: String,
        match_case: bool,
        regex: bool,
        keep_whitespace: bool,
    },
    /// `d<sep>pattern[<sep>flags]`
    Delete {
        pattern: String,
        match_case: bool,
        regex: bool,
        keep_whitespace: bool,
    },
    /// `t<sep>template`
    Template { template: String },
    /// `m<sep>pattern<sep>destination[<sep>flags]`
    Move {
        pattern: String,
        destination: String,
        match_case: bool,
        regex: bool,
    },
}

/// Builds the regex for a command pattern.
///
/// Literal patterns are escaped, and the case-insensitive modifier is
/// prepended unless `match_case` is set.
///
/// # Errors
/// * `Error::InvalidPattern` if the expression does not compile
pub fn compile_pattern(pattern: &str, match_case: bool, regex: bool) -> Result<Regex> {
    let mut expression = if regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };
    if !match_case {
        expression.insert_str(0, CASE_INSENSITIVE_PREFIX);
    }
    Regex::new(&expression).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Collapses runs of spaces into one and trims spaces at both ends.
fn collapse_spaces(text: &str) -> String {
    text.split(' ').filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

fn store_full_name(file: &mut PathEntity, full_name: &str, keep_whitespace: bool) {
    if keep_whitespace {
        file.set_full_name(full_name);
        return;
    }
    file.set_full_name(&collapse_spaces(full_name));
    file.name = file.name.trim_matches(' ').to_string();
}

impl Command {
    /// Compiles the pattern of the command, if it has one.
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Search { pattern, match_case, regex, .. }
            | Command::Delete { pattern, match_case, regex, .. }
            | Command::Move { pattern, match_case, regex, .. } => {
                compile_pattern(pattern, *match_case, *regex).map(|_| ())
            }
            Command::Template { .. } => Ok(()),
        }
    }

    /// Applies the command to `file` in place.
    ///
    /// # Errors
    /// * `Error::InvalidPattern` if the pattern does not compile
    pub fn apply(&self, file: &mut PathEntity) -> Result<()> {
        let original = file.full_name();

        match self {
            Command::Search { pattern, replacement, match_case, regex, keep_whitespace } => {
                let re = compile_pattern(pattern, *match_case, *regex)?;
                let mut full_name = re
                    .replace_all(&original, replacement.as_str())
                    .into_owned();
                if *regex {
                    full_name = substitute_captures(&full_name, &re, &original);
                }
                store_full_name(file, &full_name, *keep_whitespace);
            }
            Command::Delete { pattern, match_case, regex, keep_whitespace } => {
                let re = compile_pattern(pattern, *match_case, *regex)?;
                let full_name = re.replace_all(&original, "");
                store_full_name(file, &full_name, *keep_whitespace);
            }
            Command::Template { template } => {
                let full_name = expand_file_placeholders(template, file);
                file.set_full_name(&full_name);
            }
            Command::Move { pattern, destination, match_case, regex } => {
                let re = compile_pattern(pattern, *match_case, *regex)?;
                if re.is_match(&original) {
                    file.base_dir = if *regex {
                        substitute_captures(destination, &re, &original)
                    } else {
                        destination.clone()
                    };
                }
            }
        }

        debug!("'{}' -> '{}'", original, file.full_name());
        Ok(())
    }
}
