//
//  bb-repos
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Repository pages go to stdout as pretty-printed JSON (see [`json`]).
//! Everything meant for the operator rather than for a pipe (status lines,
//! warnings) goes to stderr through [`StatusWriter`].

mod json;

pub use json::*;

use console::style;

/// Writes styled status lines to stderr.
///
/// Styling is applied only when stderr supports colors.
#[derive(Debug, Clone, Copy)]
pub struct StatusWriter {
    color: bool,
}

impl Default for StatusWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusWriter {
    /// Creates a writer that colors output when stderr is a color terminal.
    pub fn new() -> Self {
        Self {
            color: console::colors_enabled_stderr(),
        }
    }

    /// Writes a success message to stderr, prefixed with a check mark.
    pub fn write_success(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    ///
    /// The message is prefixed with "warning:" and styled in yellow when
    /// color output is enabled.
    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }
}
