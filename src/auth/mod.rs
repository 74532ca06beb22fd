//
//  bb-repos
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Bitbucket Cloud accepts HTTP Basic authentication with an account username
//! and an app token (app password). This module holds those two values for the
//! lifetime of a run and turns them into the `Authorization` header.
//!
//! Credentials are never written anywhere: they come from flags, environment
//! variables or prompts and are dropped when the process exits.
//!
//! ## Example
//!
//! ```rust
//! use bb_repos::auth::Credentials;
//!
//! let credentials = Credentials::new("user", "token");
//! assert_eq!(credentials.basic_auth_value(), "Basic dXNlcjp0b2tlbg==");
//! ```

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Username and app token used for Basic authentication.
///
/// The `Debug` implementation redacts the token so the value can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The Bitbucket username (not the account email).
    username: String,
    /// The app token generated from Bitbucket personal settings.
    app_token: String,
}

impl Credentials {
    /// Creates credentials from a username and an app token.
    pub fn new(username: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            app_token: app_token.into(),
        }
    }

    /// Returns the `Authorization` header value.
    ///
    /// The value is `Basic ` followed by the standard base64 encoding of
    /// `username:app_token`.
    pub fn basic_auth_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.app_token);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Applies the `Authorization` header to an HTTP request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bb_repos::auth::Credentials;
    /// use reqwest::Client;
    ///
    /// async fn make_authenticated_request(credentials: &Credentials) {
    ///     let request = Client::new().get("https://api.bitbucket.org/2.0/workspaces");
    ///     let response = credentials.apply_to_request(request).send().await;
    /// }
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.basic_auth_value())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("app_token", &"<redacted>")
            .finish()
    }
}
