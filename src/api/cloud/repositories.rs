//
//  bb-repos
//  api/cloud/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud repository listing.
//!
//! Repositories of a project are listed with a `project.key` filter on the
//! workspace's repository endpoint. The result is cursor-paginated, and
//! [`RepositoryPages`] walks it one page per call.
//!
//! # Example
//!
//! ```rust,no_run
//! use bb_repos::api::BitbucketClient;
//! use bb_repos::api::cloud::RepositoryPages;
//! use bb_repos::auth::Credentials;
//! use bb_repos::config::QueryContext;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = BitbucketClient::new(&Credentials::new("jdoe", "token"))?;
//! let mut pages = RepositoryPages::new(&client, &QueryContext::new("acme", "CORE"));
//!
//! while let Some(page) = pages.next_page().await? {
//!     for repo in page.values.iter().map(bb_repos::api::cloud::RepositoryRecord::from_value) {
//!         println!("{} {}", repo.slug, repo.uuid);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::api::client::BitbucketClient;
use crate::api::common::{cursor_path, field_or, ApiError, PaginatedResponse, MISSING_FIELD};
use crate::config::QueryContext;

/// One page of the repository listing.
///
/// Values stay raw JSON so they can be printed exactly as received.
pub type RepositoryPage = PaginatedResponse<Value>;

/// Builds the first request path of a project's repository listing.
///
/// The workspace is percent-encoded as a path segment. The `q` filter is
/// `project.key="<key>"`, form-urlencoded. An empty key is sent as-is and
/// simply matches nothing.
pub fn repositories_path(query: &QueryContext) -> String {
    let filter = format!("project.key=\"{}\"", query.project_key);
    let encoded: String = url::form_urlencoded::byte_serialize(filter.as_bytes()).collect();

    format!(
        "/repositories/{}?q={}&fields=values.slug,values.uuid,next",
        urlencoding::encode(&query.workspace),
        encoded
    )
}

/// A repository as returned by the filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// URL-safe repository identifier, `"-"` when missing.
    pub slug: String,
    /// Stable repository identifier, empty when missing.
    pub uuid: String,
}

impl RepositoryRecord {
    /// Reads a repository from a raw API record.
    pub fn from_value(value: &Value) -> Self {
        Self {
            slug: field_or(value, "slug", MISSING_FIELD),
            uuid: field_or(value, "uuid", ""),
        }
    }
}

#[derive(Debug)]
enum Cursor {
    /// A request path that has not been fetched yet.
    Pending(String),
    /// A `next` link outside the base URL; it is reported, never fetched.
    Foreign(String),
    Exhausted,
}

/// Forward-only cursor over the pages of a repository listing.
///
/// The first call to [`next_page`](Self::next_page) fetches the filtered
/// listing. Every following call fetches the page named by the previous
/// page's `next` link, with the client's base URL stripped from it. A `next`
/// link outside the base URL is never requested: the page carrying it is
/// still returned, and the following call fails with
/// [`ApiError::ForeignCursor`]. Once a page without `next` has been returned,
/// the cursor yields `None` forever.
///
/// A cursor can not be rewound; build a new one to start over. Any request
/// error ends the iteration.
///
/// There is no limit on the number of pages unless
/// [`with_max_pages`](Self::with_max_pages) sets one, so a server whose
/// `next` links form a cycle keeps the cursor going indefinitely.
#[derive(Debug)]
pub struct RepositoryPages<'a> {
    client: &'a BitbucketClient,
    cursor: Cursor,
    fetched: usize,
    max_pages: Option<usize>,
    truncated: bool,
}

impl<'a> RepositoryPages<'a> {
    /// Creates a cursor positioned before the first page of `query`'s listing.
    pub fn new(client: &'a BitbucketClient, query: &QueryContext) -> Self {
        Self {
            client,
            cursor: Cursor::Pending(repositories_path(query)),
            fetched: 0,
            max_pages: None,
            truncated: false,
        }
    }

    /// Caps the number of pages fetched. `None` means unbounded.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    /// Returns true when iteration stopped at the page cap with a `next`
    /// link still pending.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Fetches the next page.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(page))` - The next page, in server order
    /// - `Ok(None)` - The listing is exhausted (or the page cap was reached)
    /// - `Err(_)` - The request failed; the cursor is exhausted afterwards
    pub async fn next_page(&mut self) -> Result<Option<RepositoryPage>, ApiError> {
        let path = match std::mem::replace(&mut self.cursor, Cursor::Exhausted) {
            Cursor::Pending(path) => path,
            Cursor::Foreign(next) => {
                return Err(ApiError::ForeignCursor {
                    next,
                    base_url: self.client.base_url().to_string(),
                })
            }
            Cursor::Exhausted => return Ok(None),
        };

        if self.max_pages.is_some_and(|max| self.fetched >= max) {
            tracing::debug!(
                "page cap reached after {} pages, dropping cursor {}",
                self.fetched,
                path
            );
            self.truncated = true;
            return Ok(None);
        }

        let page: RepositoryPage = self.client.get(&path).await?;
        self.fetched += 1;

        if let Some(next) = page.next_url() {
            self.cursor = match cursor_path(next, self.client.base_url()) {
                Some(next_path) => {
                    tracing::debug!("page {} has next cursor {}", self.fetched, next_path);
                    Cursor::Pending(next_path.to_string())
                }
                None => Cursor::Foreign(next.to_string()),
            };
        }

        Ok(Some(page))
    }
}
