//
//  bb-repos
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! The run configuration is parsed once from command-line flags and their
//! environment variable fallbacks, then passed explicitly to every flow.
//! Nothing is read from or written to configuration files.
//!
//! ## Overview
//!
//! - [`Config`]: Immutable values supplied by the operator up front
//! - [`QueryContext`]: Workspace and project key the repository listing is scoped to
//!
//! Every optional field of [`Config`] that is `None` is asked for
//! interactively, unless prompting is disabled.

use crate::api::client::CLOUD_API_URL;
use crate::auth::Credentials;

/// Run configuration parsed from the command line.
///
/// # Example
///
/// ```rust
/// use bb_repos::Config;
///
/// let config = Config {
///     username: Some("jdoe".to_string()),
///     app_token: Some("token".to_string()),
///     workspace: Some("acme".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(config.api_url, "https://api.bitbucket.org/2.0");
/// assert!(config.credentials().is_some());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Bitbucket username
    pub username: Option<String>,
    /// Bitbucket app token
    pub app_token: Option<String>,
    /// Workspace slug
    pub workspace: Option<String>,
    /// Project key
    pub project: Option<String>,
    /// API root every request path is appended to
    pub api_url: String,
    /// Upper bound on fetched repository pages
    pub max_pages: Option<usize>,
    /// Fail instead of prompting for missing values
    pub no_prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            app_token: None,
            workspace: None,
            project: None,
            api_url: CLOUD_API_URL.to_string(),
            max_pages: None,
            no_prompt: false,
        }
    }
}

impl Config {
    /// Returns credentials when both username and app token were supplied.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.app_token) {
            (Some(username), Some(app_token)) => Some(Credentials::new(username, app_token)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("app_token", &self.app_token.as_ref().map(|_| "<redacted>"))
            .field("workspace", &self.workspace)
            .field("project", &self.project)
            .field("api_url", &self.api_url)
            .field("max_pages", &self.max_pages)
            .field("no_prompt", &self.no_prompt)
            .finish()
    }
}

/// Workspace and project key a repository listing is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    /// Workspace slug
    pub workspace: String,
    /// Project key used in the `project.key` filter (may be empty)
    pub project_key: String,
}

impl QueryContext {
    /// Creates a query context.
    pub fn new(workspace: impl Into<String>, project_key: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            project_key: project_key.into(),
        }
    }
}
