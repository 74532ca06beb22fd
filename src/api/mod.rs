//
//  bb-repos
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP access to the Bitbucket Cloud REST API v2.0 at `api.bitbucket.org`.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with Basic authentication and response decoding
//! - [`cloud`]: Workspace, project and repository resources, and the repository cursor
//! - [`common`]: Shared types (errors, pagination, field defaulting)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bb_repos::api::BitbucketClient;
//! use bb_repos::auth::Credentials;
//!
//! let client = BitbucketClient::new(&Credentials::new("jdoe", "app-token"))
//!     .expect("Failed to create client");
//! assert_eq!(client.base_url(), "https://api.bitbucket.org/2.0");
//! ```
//!
//! ## Error Handling
//!
//! Failed requests surface as [`ApiError`]: a non-2xx status with the message
//! Bitbucket returned, a network failure, or a body that is not JSON.

/// Core HTTP client wrapper for the Bitbucket API.
pub mod client;

/// Bitbucket Cloud API v2.0 resources.
///
/// - [`cloud::workspaces`]: Workspace records
/// - [`cloud::projects`]: Project records and key resolution
/// - [`cloud::repositories`]: Repository records and the page cursor
pub mod cloud;

/// Common types shared by every resource.
pub mod common;

/// Re-export of the main Bitbucket API client.
pub use client::{decode, BitbucketClient};

/// Re-export of common API types.
pub use common::{field_or, ApiError, PaginatedResponse};
