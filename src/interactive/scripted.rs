//
//  bb-repos
//  interactive/scripted.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Prompter that answers from a script and records what it was asked.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{PromptError, Prompter};

/// A prompt that was shown, with the choices it offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub label: String,
    pub choices: Vec<String>,
    pub secret: bool,
}

/// Answers prompts in order from a fixed list.
///
/// Running out of answers fails like a disabled prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<AskedPrompt>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.borrow().clone()
    }

    fn answer(&self, label: &str, choices: &[String], secret: bool) -> Result<String, PromptError> {
        self.asked.borrow_mut().push(AskedPrompt {
            label: label.to_string(),
            choices: choices.to_vec(),
            secret,
        });
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::Disabled {
                label: label.to_string(),
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_value(&self, label: &str, choices: &[String]) -> Result<String, PromptError> {
        self.answer(label, choices, false)
    }

    fn prompt_secret(&self, label: &str) -> Result<String, PromptError> {
        self.answer(label, &[], true)
    }
}
