//! User confirmation before the rename plan is executed.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Returns `true` if the user agrees to `prompt`, or right away when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Prompter backed by dialoguer. Pressing enter answers yes.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
