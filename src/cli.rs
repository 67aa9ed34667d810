//! Command-line interface implementation for rena.
//! Provides argument parsing and help text formatting using clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const COMMANDS_HELP: &str = r#"Commands:
  s<sep>search<sep>replace[<sep>flags]      replace every match
  d<sep>search[<sep>flags]                  delete every match
  t<sep>template                            rename from a template (%f name, %n stem, %x extension)
  m<sep>pattern<sep>directory[<sep>flags]   move matching files into a directory

  <sep> is the second character: one of , ; / | or tab.
  Flags: m  match case (matching is case-insensitive by default!)
         r  the search is a regex; use %0, %1 or %name for its groups
         w  keep repeated and surrounding spaces

Examples:
  rena -c 's/sa(ul)/%1/r' 'Better Call Saul.mkv'
  rena -c 't/%n.mp4' *.mkv
  rena -c 'm,saul,/media/saul' *.mkv"#;

/// Command-line arguments structure for rena.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rena: a simple utility to rename multiple files",
    long_about = None,
    after_help = COMMANDS_HELP
)]
pub struct Args {
    /// Files to rename
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Rename command to execute, may be repeated
    #[arg(short, long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Load commands from a script file, may be repeated.
    /// Script commands run before the ones given with --command.
    #[arg(short = 's', long = "command-script", value_name = "FILE")]
    pub scripts: Vec<PathBuf>,

    /// Execute without confirmation prompts
    #[arg(short, long)]
    pub force: bool,

    /// Print the rename plan without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the plan as JSON, together with --dry-run
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// True when no argument at all was given, flags included.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.commands.is_empty()
            && self.scripts.is_empty()
            && !(self.force || self.dry_run || self.verbose)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing the help when nothing was given
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());
    if args.is_empty() {
        // printing help only fails if stdout is gone
        let _ = Args::command().print_help();
        std::process::exit(0);
    }
    args
}
