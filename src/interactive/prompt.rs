//
//  bb-repos
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Terminal prompts used when a value was not supplied on the command line.
//! Prompts block the calling thread until the operator answers; there is no
//! timeout and no cancellation beyond Ctrl+C.
//!
//! # Overview
//!
//! - [`prompt_input`] - Free text with TAB completion over a list of choices
//! - [`prompt_password`] - Masked input for secrets
//! - [`Prompter`] - The seam flows use, so they can run without a terminal
//!
//! # Example
//!
//! ```no_run
//! use bb_repos::interactive::{Prompter, TerminalPrompter};
//!
//! let choices = vec!["acme".to_string(), "acme-labs".to_string()];
//! let workspace = TerminalPrompter
//!     .prompt_value("Select a workspace (press TAB for hint)", &choices)
//!     .unwrap();
//! ```

use dialoguer::{Input, Password};
use thiserror::Error;

use super::completion::ChoiceCompletion;

/// Errors raised while asking the operator for a value.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Prompting was disabled and the value was not supplied up front.
    #[error("\"{label}\" was not supplied and prompting is disabled (--no-prompt)")]
    Disabled {
        /// The prompt that would have been shown.
        label: String,
    },

    /// The terminal interaction failed (e.g., stdin closed or not a TTY).
    #[error("Prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Source of operator answers.
///
/// Exactly one prompt is pending at a time; callers await each answer before
/// issuing the next request.
pub trait Prompter {
    /// Asks for a free-text value, offering `choices` for TAB completion.
    ///
    /// The answer is not validated against `choices`.
    fn prompt_value(&self, label: &str, choices: &[String]) -> Result<String, PromptError>;

    /// Asks for a secret without echoing it.
    fn prompt_secret(&self, label: &str) -> Result<String, PromptError>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt_value(&self, label: &str, choices: &[String]) -> Result<String, PromptError> {
        prompt_input(label, choices)
    }

    fn prompt_secret(&self, label: &str) -> Result<String, PromptError> {
        prompt_password(label)
    }
}

/// Refuses every prompt.
///
/// Used with `--no-prompt` so a missing value fails fast instead of waiting
/// for input that will never come.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPrompter;

impl Prompter for DisabledPrompter {
    fn prompt_value(&self, label: &str, _choices: &[String]) -> Result<String, PromptError> {
        Err(PromptError::Disabled {
            label: label.to_string(),
        })
    }

    fn prompt_secret(&self, label: &str) -> Result<String, PromptError> {
        Err(PromptError::Disabled {
            label: label.to_string(),
        })
    }
}

/// Prompts the user for text input with TAB completion.
///
/// Pressing TAB completes the first choice that starts with the typed text;
/// pressing it again on a complete choice moves to the next one. Free text
/// is accepted, whether or not it is one of the choices, and returned exactly
/// as typed.
///
/// # Notes
///
/// - The input cannot be empty - the prompt repeats until text is entered
/// - With no choices, TAB does nothing
pub fn prompt_input(message: &str, choices: &[String]) -> Result<String, PromptError> {
    let completion = ChoiceCompletion::new(choices);
    let input: String = Input::new()
        .with_prompt(message)
        .completion_with(&completion)
        .interact_text()?;
    Ok(input)
}

/// Prompts the user for password input with masked display.
///
/// Characters are not echoed to the terminal. The value is returned as a
/// plain `String` and is only kept in memory.
pub fn prompt_password(message: &str) -> Result<String, PromptError> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}
