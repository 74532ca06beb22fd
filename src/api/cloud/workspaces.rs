//
//  bb-repos
//  api/cloud/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud workspace API types.
//!
//! Workspaces are the top-level organizational unit in Bitbucket Cloud. Each
//! workspace has a unique slug that forms part of repository URLs and API
//! paths.
//!
//! ```text
//! Workspace
//! ├── Projects
//! │   └── Repositories
//! └── Repositories (not in projects)
//! ```

use serde_json::Value;

use crate::api::client::BitbucketClient;
use crate::api::common::{field_or, ApiError, PaginatedResponse, MISSING_FIELD};

/// Lists workspaces, asking only for their slugs.
pub const WORKSPACES_PATH: &str = "/workspaces?fields=values.slug";

/// A workspace as returned by the list endpoint.
///
/// The slug falls back to `"-"` when the record does not carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRecord {
    /// URL-safe identifier used in API paths and repository URLs.
    pub slug: String,
}

impl WorkspaceRecord {
    /// Reads a workspace from a raw API record.
    pub fn from_value(value: &Value) -> Self {
        Self {
            slug: field_or(value, "slug", MISSING_FIELD),
        }
    }
}

/// Fetches the first page of workspaces visible to the authenticated user.
///
/// Only one page is read; records keep the order of the response.
pub async fn list_workspaces(client: &BitbucketClient) -> Result<Vec<WorkspaceRecord>, ApiError> {
    let page: PaginatedResponse<Value> = client.get(WORKSPACES_PATH).await?;
    Ok(page.values.iter().map(WorkspaceRecord::from_value).collect())
}
