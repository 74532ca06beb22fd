//
//  bb-repos
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Bitbucket Cloud Responses
//!
//! Bitbucket Cloud uses cursor-based pagination: every page may carry a
//! `next` URL pointing at the following page, and iteration ends with the
//! first page that omits it.
//!
//! The `next` URL is absolute and shares the API base URL. The client only
//! requests paths relative to that base, so [`cursor_path`] rewrites the
//! cursor before it is requested again, and rejects one that points anywhere
//! else.
//!
//! # Example
//!
//! ```rust
//! use bb_repos::api::common::{cursor_path, PaginatedResponse};
//!
//! let json = r#"{
//!     "values": [{"slug": "svc-a"}],
//!     "next": "https://api.bitbucket.org/2.0/repositories/acme?page=2"
//! }"#;
//!
//! let page: PaginatedResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
//! let next = page.next_url().unwrap();
//! assert_eq!(
//!     cursor_path(next, "https://api.bitbucket.org/2.0"),
//!     Some("/repositories/acme?page=2")
//! );
//! ```

use serde::Deserialize;

/// Paginated response from Bitbucket Cloud API.
///
/// A page is immutable once received. Every field other than `values` may be
/// absent, depending on the `fields` filter of the request.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `values` array
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `values` | `Vec<T>` | Items in the current page (empty when absent) |
/// | `size` | `Option<u32>` | Total number of items across all pages |
/// | `next` | `Option<String>` | Absolute URL of the next page |
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Array of items in the current page.
    ///
    /// Defaults to empty so a body without `values` still decodes.
    #[serde(default)]
    pub values: Vec<T>,

    /// Total number of items across all pages.
    ///
    /// Omitted when the request's `fields` filter leaves it out.
    #[serde(default)]
    pub size: Option<u32>,

    /// URL to fetch the next page of results.
    ///
    /// When `None`, this is the last page.
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Returns the absolute URL for the next page of results.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Rewrites an absolute cursor URL into a path relative to `base_url`.
///
/// Returns `None` when the cursor lies outside `base_url`. The remainder must
/// begin a new path segment or the query, so a base of
/// `https://api.bitbucket.org` does not accept
/// `https://api.bitbucket.org.example.com/...`.
pub fn cursor_path<'a>(next: &'a str, base_url: &str) -> Option<&'a str> {
    let rest = next.strip_prefix(base_url)?;
    if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
        Some(rest)
    } else {
        None
    }
}
