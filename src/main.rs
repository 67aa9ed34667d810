//! rena's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the rename plan and its
//! confirmation, and reports the outcome of every rename.

use log::{debug, error, warn};
use rena::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    parser::parse_commands,
    pipeline::{build_plan, SkipReason},
    prompt::{DialoguerPrompter, Prompter},
    rename::{execute_plan, Outcome, RenameAction},
    safety::is_safe_name,
    script::collect_commands,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects commands from scripts and flags
/// 2. Parses every command, aborting on the first error
/// 3. Builds the rename plan, aborting on conflicts
/// 4. Reports skipped files
/// 5. Asks for confirmation unless forced
/// 6. Renames the files, reporting each result
fn run(args: Args) -> Result<()> {
    if args.files.is_empty() {
        return Ok(());
    }

    let commands = collect_commands(&args.scripts, &args.commands)?;
    let commands = parse_commands(&commands)?;
    let plan = build_plan(&commands, &args.files, is_safe_name)?;

    for skipped in &plan.skipped {
        match skipped.reason {
            SkipReason::UnsafeName => warn!(
                "Skipped because the end result contains a forbidden character: '{}' <- '{}'",
                skipped.entry.proposed, skipped.entry.original
            ),
            reason => debug!("Skipped '{}' ({:?})", skipped.entry.original, reason),
        }
    }

    if plan.is_empty() {
        return Ok(());
    }

    if args.dry_run {
        if args.json {
            println!("{}", plan.to_json()?);
        } else {
            for entry in &plan.entries {
                println!("{}", RenameAction::for_entry(entry).describe(entry));
            }
        }
        return Ok(());
    }

    if !args.force {
        for entry in &plan.entries {
            println!("{}", RenameAction::for_entry(entry).describe(entry));
        }
    }

    let prompt = DialoguerPrompter::new();
    if !prompt.confirm(args.force, "Are you sure?".to_string())? {
        return Ok(());
    }

    for (entry, outcome) in execute_plan(&plan) {
        match outcome {
            Outcome::Done(action) => println!("{}", action.done(entry)),
            Outcome::Missing => println!("{}: no such file or directory", entry.original),
            Outcome::Failed(e) => error!("{}", e),
        }
    }
    Ok(())
}
