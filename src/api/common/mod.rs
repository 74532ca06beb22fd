//
//  bb-repos
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for Bitbucket Cloud
//!
//! This module provides the error type shared by every request, the cursor
//! page type, and the field defaulting policy used when reading records.
//!
//! # Overview
//!
//! - [`ApiError`] - Error type for all API operations
//! - [`field_or`] - Reads a field from a JSON record, falling back to a placeholder
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use bb_repos::api::common::field_or;
//! use serde_json::json;
//!
//! let record = json!({ "slug": "acme" });
//! assert_eq!(field_or(&record, "slug", "-"), "acme");
//! assert_eq!(field_or(&record, "uuid", ""), "");
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Placeholder used for display fields missing from a record.
pub const MISSING_FIELD: &str = "-";

/// Error type for all Bitbucket API operations.
///
/// Callers propagate these unchanged.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Status` | Any non-2xx response |
/// | `Network` | Connection, TLS or transport failure |
/// | `Decode` | A response body that is not JSON |
/// | `ForeignCursor` | A `next` link outside the API base URL |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the human readable message Bitbucket put in the error
    /// body, or the raw body when it could not be parsed.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: StatusCode,
        /// The extracted error message.
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A pagination cursor pointed outside the API base URL.
    ///
    /// The link is not followed, so credentials never leave the API host.
    #[error("Refusing to follow pagination link outside {base_url}: {next}")]
    ForeignCursor {
        /// The rejected `next` URL.
        next: String,
        /// The API root the client is bound to.
        base_url: String,
    },
}

/// Reads `key` from a JSON record.
///
/// Strings are returned as-is and other scalars are rendered as JSON text.
/// A missing field, a `null`, a nested object or array, or a record that is
/// not an object all yield `None`.
pub fn field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Reads `key` from a JSON record, returning `default` when it is absent.
///
/// This is the single defaulting policy for API records: anything [`field`]
/// cannot read yields `default` rather than an error.
///
/// # Example
///
/// ```rust
/// use bb_repos::api::common::field_or;
/// use serde_json::json;
///
/// assert_eq!(field_or(&json!({ "key": "CORE" }), "key", "-"), "CORE");
/// assert_eq!(field_or(&json!({ "key": null }), "key", "-"), "-");
/// assert_eq!(field_or(&json!("not a record"), "key", "-"), "-");
/// ```
pub fn field_or(record: &Value, key: &str, default: &str) -> String {
    field(record, key).unwrap_or_else(|| default.to_string())
}
