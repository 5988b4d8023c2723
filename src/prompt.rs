//! User interaction.
//! The only question cmakegen asks is whether to write into an existing directory.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Source of yes/no answers.
pub trait Prompter {
    /// Asks `prompt`, returning `true` right away when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Prompter backed by the terminal.
#[derive(Default)]
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
            .default(false)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}
