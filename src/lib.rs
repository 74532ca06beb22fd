//
//  bb-repos
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # bb-repos Library
//!
//! Lists the repositories that belong to a Bitbucket Cloud project.
//!
//! ## Overview
//!
//! The `bb-repos` binary authenticates with a username and app token, lets the
//! operator pick a workspace and a project (or takes them from flags), then
//! walks the cursor-paginated repository listing of that project and prints
//! every page as JSON.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line definitions and the orchestrating `run` entry point
//! - [`api`]: HTTP client, response decoding, pagination and Cloud resources
//! - [`auth`]: Basic-Auth credentials
//! - [`config`]: The parsed, immutable run configuration
//! - [`interactive`]: Terminal prompts with TAB completion
//! - [`output`]: Console output helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bb_repos::api::BitbucketClient;
//! use bb_repos::api::cloud::RepositoryPages;
//! use bb_repos::auth::Credentials;
//! use bb_repos::config::QueryContext;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = Credentials::new("jdoe", "app-token");
//! let client = BitbucketClient::new(&credentials)?;
//! let query = QueryContext::new("acme", "CORE");
//!
//! let mut pages = RepositoryPages::new(&client, &query);
//! while let Some(page) = pages.next_page().await? {
//!     println!("{} repositories on this page", page.values.len());
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions and the run orchestrator.
pub mod cli;

/// API client implementation for Bitbucket Cloud.
///
/// The client handles authentication, request building, response decoding
/// and cursor pagination.
pub mod api;

/// Basic-Auth credentials built from a username and an app token.
pub mod auth;

/// Run configuration parsed once from the command line.
pub mod config;

/// Interactive terminal prompts.
///
/// Provides free-text prompts with TAB completion over API results and a
/// masked prompt for secrets.
pub mod interactive;

/// Console output helpers.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the run configuration.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and the User-Agent.
pub const APP_NAME: &str = "bb-repos";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use bb_repos::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    ///
    /// Every repository page was fetched and printed.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// Any failure anywhere in the pipeline: network, HTTP status, decoding,
    /// or a prompt that could not be answered. Check stderr for details.
    pub const ERROR: i32 = 1;
}
