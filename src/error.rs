//! Error handling for rena.
//! Defines the error type shared by the command language, the rename plan
//! and the collaborators that execute it.

use std::io;
use thiserror::Error;

/// Custom error types for rena operations.
///
/// Parse and apply errors abort the whole batch before any file is touched.
/// Rename errors are reported per entry by the executor.
#[derive(Error, Debug)]
pub enum Error {
    /// The second character of a command is not one of `, ; / | <tab>`
    #[error("Separator is not supported: '{command}'.")]
    UnsupportedSeparator { command: String },

    /// Unbalanced or misplaced quotes in a command
    #[error("Malformed command ({reason}): '{command}'.")]
    MalformedRecord { command: String, reason: String },

    /// The command has the wrong number of fields for its type
    #[error("Invalid format, expected {expected} fields but found {found}: '{command}'.")]
    InvalidFieldCount {
        command: String,
        expected: &'static str,
        found: usize,
    },

    #[error("Unknown command: '{command}'.")]
    UnknownCommandType { command: String },

    /// The pattern of a search, delete or move command does not compile
    #[error("Invalid regex: '{pattern}'.")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A parse error together with the 1-based line it was found on
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// Two inputs would be renamed to the same path
    #[error(
        "Conflicts have been detected and must be resolved manually:\n\
         - '{first}' -> '{target}'\n\
         - '{second}' -> '{target}'"
    )]
    Conflict {
        first: String,
        second: String,
        target: String,
    },

    #[error("Can't read command script '{path}': {source}.")]
    ScriptError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a directory.")]
    NotADirectory { path: String },

    /// The destination directory of a move could not be created
    #[error("Can't create directory '{path}': {source}.")]
    DirectoryError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{source} ('{from}' -> '{to}').")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur while asking the user for confirmation
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Attaches the 1-based line number of the command that failed.
    pub fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Convenience type alias for Results with rena's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
