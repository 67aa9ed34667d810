//! rena renames files in batches from a small command language.
//! Each command searches and replaces, deletes, rewrites the name from a
//! template, or moves matching files to another directory. A list of
//! commands is applied to every input path to build a rename plan, which
//! is checked for conflicts before anything is executed.

/// Command-line interface module for rena
pub mod cli;

/// The four command kinds and their effect on a path
pub mod command;

pub mod constants;

/// Error types and handling for rena
pub mod error;

/// Path split into directory, stem and extension
pub mod file;

pub mod logger;

/// Command line parsing into typed commands
pub mod parser;

/// Application of a command list to a batch of paths
pub mod pipeline;

/// User confirmation handling
pub mod prompt;

/// File system execution of a rename plan
pub mod rename;

/// Platform rules for file names
pub mod safety;

/// Command script loading
pub mod script;

/// `%` placeholder substitution
pub mod template;

/// Field splitting with quoting
pub mod tokenizer;
