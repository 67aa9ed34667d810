//! Splits a command line into fields.
//!
//! The separator is the second character of the line. Fields follow the
//! usual double-quote convention: a field that starts with `"` may contain
//! the separator, and `""` inside it stands for a single quote.

use std::iter::Peekable;
use std::str::Chars;

use crate::constants::SEPARATORS;
use crate::error::{Error, Result};

/// Returns the separator of `command`, its second character.
pub fn separator(command: &str) -> Result<char> {
    command
        .chars()
        .nth(1)
        .filter(|c| SEPARATORS.contains(c))
        .ok_or_else(|| Error::UnsupportedSeparator {
            command: command.to_string(),
        })
}

/// Splits the whole command, type letter included, into its fields.
///
/// # Errors
/// * `Error::UnsupportedSeparator` if the second character is not a separator
/// * `Error::MalformedRecord` on unbalanced or misplaced quotes
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    let sep = separator(command)?;
    let line = command.strip_suffix('\n').unwrap_or(command);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    loop {
        let (field, more) = read_field(&mut chars, sep).map_err(|reason| Error::MalformedRecord {
            command: command.to_string(),
            reason: reason.to_string(),
        })?;
        fields.push(field);
        if !more {
            return Ok(fields);
        }
    }
}

/// Reads one field and reports whether a separator followed it.
fn read_field(
    chars: &mut Peekable<Chars<'_>>,
    sep: char,
) -> std::result::Result<(String, bool), &'static str> {
    let mut field = String::new();

    if chars.next_if_eq(&'"').is_none() {
        return loop {
            match chars.next() {
                None => break Ok((field, false)),
                Some(c) if c == sep => break Ok((field, true)),
                Some('"') => break Err("bare \" in non-quoted field"),
                Some(c) => field.push(c),
            }
        };
    }

    loop {
        match chars.next() {
            Some('"') if chars.next_if_eq(&'"').is_some() => field.push('"'),
            Some('"') => break,
            Some(c) => field.push(c),
            None => return Err("unterminated quoted field"),
        }
    }

    match chars.next() {
        None => Ok((field, false)),
        Some(c) if c == sep => Ok((field, true)),
        Some(_) => Err("extraneous \" in quoted field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            tokenize("s/saul/Saul Goodman").unwrap(),
            vec!["s", "saul", "Saul Goodman"]
        );
        assert_eq!(
            tokenize("m,saul,/dest,rm").unwrap(),
            vec!["m", "saul", "/dest", "rm"]
        );
        assert_eq!(tokenize("d\tfoo").unwrap(), vec!["d", "foo"]);
    }

    #[test]
    fn test_trailing_separator_gives_empty_field() {
        assert_eq!(tokenize("s/a/b/").unwrap(), vec!["s", "a", "b", ""]);
        assert_eq!(tokenize("d/").unwrap(), vec!["d", ""]);
    }

    #[test]
    fn test_quoted_field_keeps_separator_and_quotes() {
        assert_eq!(tokenize(r#"t/"a/b.%x""#).unwrap(), vec!["t", "a/b.%x"]);
        assert_eq!(
            tokenize(r#"s,"say ""hi""",x"#).unwrap(),
            vec!["s", r#"say "hi""#, "x"]
        );
        assert_eq!(tokenize(r#"s;"";x"#).unwrap(), vec!["s", "", "x"]);
    }

    #[test]
    fn test_line_ending_is_ignored() {
        assert_eq!(tokenize("d/foo\r\n").unwrap(), vec!["d", "foo"]);
        assert_eq!(tokenize("d/foo\n").unwrap(), vec!["d", "foo"]);
    }

    #[test]
    fn test_unsupported_separator() {
        for command in ["", "s", "s:a:b", "sxaxb"] {
            match tokenize(command) {
                Err(Error::UnsupportedSeparator { .. }) => (),
                other => panic!("Expected UnsupportedSeparator for {command:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_quotes() {
        for command in [r#"s/"abc/x"#, r#"s/ab"c/x"#, r#"s/"ab"c/x"#] {
            match tokenize(command) {
                Err(Error::MalformedRecord { .. }) => (),
                other => panic!("Expected MalformedRecord for {command:?}, got {other:?}"),
            }
        }
    }
}
