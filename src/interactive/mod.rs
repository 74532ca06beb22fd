//
//  bb-repos
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal UI components, built on `dialoguer`.

pub mod completion;
pub mod prompt;

pub use completion::ChoiceCompletion;
pub use prompt::{prompt_input, prompt_password, DisabledPrompter, PromptError, Prompter, TerminalPrompter};

#[cfg(test)]
pub(crate) mod scripted;
