//
//  bb-repos
//  interactive/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! TAB completion over a fixed list of choices.

use dialoguer::Completion;

/// Completes typed text against a list of choices.
///
/// Duplicate choices are collapsed, keeping the first occurrence, so cycling
/// never gets stuck on repeated placeholders.
///
/// # Example
///
/// ```rust
/// use bb_repos::interactive::ChoiceCompletion;
/// use dialoguer::Completion;
///
/// let choices = vec!["core".to_string(), "core-web".to_string(), "infra".to_string()];
/// let completion = ChoiceCompletion::new(&choices);
///
/// assert_eq!(completion.get("in").as_deref(), Some("infra"));
/// assert_eq!(completion.get("core").as_deref(), Some("core-web"));
/// assert_eq!(completion.get("x"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChoiceCompletion {
    choices: Vec<String>,
}

impl ChoiceCompletion {
    /// Creates a completion over `choices`, in order.
    pub fn new(choices: &[String]) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(choices.len());
        for choice in choices {
            if !unique.contains(choice) {
                unique.push(choice.clone());
            }
        }
        Self { choices: unique }
    }
}

impl Completion for ChoiceCompletion {
    /// Returns the completion for `input`.
    ///
    /// An input that is already a complete choice moves on to the next choice
    /// (wrapping around); otherwise the first choice starting with the input
    /// is returned.
    fn get(&self, input: &str) -> Option<String> {
        if let Some(pos) = self.choices.iter().position(|c| c == input) {
            let next = (pos + 1) % self.choices.len();
            return self.choices.get(next).cloned();
        }

        self.choices.iter().find(|c| c.starts_with(input)).cloned()
    }
}
