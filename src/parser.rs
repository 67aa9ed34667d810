//! Parsing of command lines into [`Command`] values.
//!
//! ```text
//! <type><sep><field1>[<sep><field2>][<sep><flags>]
//! ```
//!
//! `type` is one of `s` (search), `d` (delete), `t` (template) and `m` (move).
//! Flags are single letters in any order: `m` matches case (matching is
//! case-insensitive without it), `r` reads the pattern as a regex and `w`
//! keeps whitespace as is.

use log::debug;

use crate::command::Command;
use crate::constants::{FLAG_KEEP_WHITESPACE, FLAG_MATCH_CASE, FLAG_REGEX};
use crate::error::{Error, Result};
use crate::tokenizer::{separator, tokenize};

/// A parsed command list. Blank lines are kept as `None`.
pub type CommandList = Vec<Option<Command>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Flags {
    match_case: bool,
    regex: bool,
    keep_whitespace: bool,
}

impl Flags {
    fn parse(flags: Option<&String>) -> Self {
        let Some(flags) = flags else {
            return Self::default();
        };
        Self {
            match_case: flags.contains(FLAG_MATCH_CASE),
            regex: flags.contains(FLAG_REGEX),
            keep_whitespace: flags.contains(FLAG_KEEP_WHITESPACE),
        }
    }
}

fn check_field_count(
    command: &str,
    fields: &[String],
    min: usize,
    max: usize,
    expected: &'static str,
) -> Result<()> {
    if (min..=max).contains(&fields.len()) {
        Ok(())
    } else {
        Err(Error::InvalidFieldCount {
            command: command.to_string(),
            expected,
            found: fields.len(),
        })
    }
}

// s, search, replace, flags
fn parse_search(command: &str, fields: Vec<String>) -> Result<Command> {
    check_field_count(command, &fields, 3, 4, "3 or 4")?;
    let flags = Flags::parse(fields.get(3));
    let mut fields = fields.into_iter().skip(1);
    Ok(Command::Search {
        pattern: fields.next().unwrap_or_default(),
        replacement: fields.next().unwrap_or_default(),
        match_case: flags.match_case,
        regex: flags.regex,
        keep_whitespace: flags.keep_whitespace,
    })
}

// d, value, flags
fn parse_delete(command: &str, fields: Vec<String>) -> Result<Command> {
    check_field_count(command, &fields, 2, 3, "2 or 3")?;
    let flags = Flags::parse(fields.get(2));
    Ok(Command::Delete {
        pattern: fields.into_iter().nth(1).unwrap_or_default(),
        match_case: flags.match_case,
        regex: flags.regex,
        keep_whitespace: flags.keep_whitespace,
    })
}

// t, template
fn parse_template(command: &str, fields: Vec<String>) -> Result<Command> {
    check_field_count(command, &fields, 2, 2, "2")?;
    Ok(Command::Template {
        template: fields.into_iter().nth(1).unwrap_or_default(),
    })
}

// m, pattern, destination, flags
fn parse_move(command: &str, fields: Vec<String>) -> Result<Command> {
    check_field_count(command, &fields, 3, 4, "3 or 4")?;
    let flags = Flags::parse(fields.get(3));
    let mut fields = fields.into_iter().skip(1);
    Ok(Command::Move {
        pattern: fields.next().unwrap_or_default(),
        destination: fields.next().unwrap_or_default(),
        match_case: flags.match_case,
        regex: flags.regex,
    })
}

/// Parses a single command line.
///
/// The pattern of the command is compiled here so that an invalid regex
/// fails before any file is processed.
///
/// # Errors
/// * `Error::UnsupportedSeparator` if the second character is not a separator
/// * `Error::UnknownCommandType` if the first character is not `s`, `d`, `t` or `m`
/// * `Error::MalformedRecord` on quoting errors
/// * `Error::InvalidFieldCount` if the command has too few or too many fields
/// * `Error::InvalidPattern` if the pattern does not compile
pub fn parse_command(command: &str) -> Result<Command> {
    // the separator is checked before the type letter: `x:a` is a separator error
    separator(command)?;

    let parse: fn(&str, Vec<String>) -> Result<Command> = match command.chars().next() {
        Some('s') => parse_search,
        Some('d') => parse_delete,
        Some('t') => parse_template,
        Some('m') => parse_move,
        _ => {
            return Err(Error::UnknownCommandType {
                command: command.to_string(),
            })
        }
    };

    let fields = tokenize(command)?;
    let parsed = parse(command, fields)?;
    parsed.validate()?;
    Ok(parsed)
}

/// Parses every line, keeping blank lines as `None` so positions match the source.
///
/// # Errors
/// The first failing line aborts parsing; the error carries its 1-based number.
pub fn parse_commands<S: AsRef<str>>(lines: &[S]) -> Result<CommandList> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            if line.trim().is_empty() {
                return Ok(None);
            }
            let command = parse_command(line).map_err(|e| e.at_line(index + 1))?;
            debug!("Parsed command on line {}: {:?}", index + 1, command);
            Ok(Some(command))
        })
        .collect()
}
