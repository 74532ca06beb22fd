//
//  bb-repos
//  api/cloud/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud project API types.
//!
//! Projects group repositories inside a workspace. A project is identified by
//! a short, human-chosen key (e.g., `CORE`) and by a stable UUID.
//!
//! Operators select a project by key; [`resolve_project`] maps the typed key
//! back to the record it names.

use serde_json::Value;

use crate::api::client::BitbucketClient;
use crate::api::common::{field, ApiError, PaginatedResponse, MISSING_FIELD};

/// Builds the path listing the projects of a workspace, keys and UUIDs only.
///
/// The workspace is percent-encoded as a single path segment.
pub fn projects_path(workspace: &str) -> String {
    format!(
        "/workspaces/{}/projects?fields=values.key,values.uuid",
        urlencoding::encode(workspace)
    )
}

/// A project as returned by the list endpoint.
///
/// Fields the record does not carry stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectRecord {
    /// Short project key.
    pub key: Option<String>,
    /// Stable project identifier (includes curly braces).
    pub uuid: Option<String>,
}

impl ProjectRecord {
    /// Reads a project from a raw API record.
    pub fn from_value(value: &Value) -> Self {
        Self {
            key: field(value, "key"),
            uuid: field(value, "uuid"),
        }
    }

    /// Returns the key shown to the operator, `"-"` when missing.
    pub fn display_key(&self) -> &str {
        self.key.as_deref().unwrap_or(MISSING_FIELD)
    }
}

/// The project a typed key resolved to.
///
/// Both fields are empty when no record matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedProject {
    /// Key of the matching record.
    pub key: String,
    /// UUID of the matching record.
    pub uuid: String,
}

impl ResolvedProject {
    /// Returns true when no record matched.
    pub fn is_unmatched(&self) -> bool {
        self.key.is_empty() && self.uuid.is_empty()
    }
}

/// Finds the record whose key equals `key` exactly.
///
/// An unknown key never fails: it resolves to an empty [`ResolvedProject`].
/// A record without a key can not be matched, not even by typing `"-"`.
///
/// # Example
///
/// ```rust
/// use bb_repos::api::cloud::{resolve_project, ProjectRecord};
///
/// let records = vec![ProjectRecord {
///     key: Some("CORE".to_string()),
///     uuid: Some("{u-1}".to_string()),
/// }];
///
/// assert_eq!(resolve_project(&records, "CORE").uuid, "{u-1}");
/// assert!(resolve_project(&records, "core").is_unmatched());
/// ```
pub fn resolve_project(records: &[ProjectRecord], key: &str) -> ResolvedProject {
    records
        .iter()
        .find(|record| record.key.as_deref() == Some(key))
        .map(|record| ResolvedProject {
            key: key.to_string(),
            uuid: record.uuid.clone().unwrap_or_default(),
        })
        .unwrap_or_default()
}

/// Fetches the first page of projects in `workspace`.
pub async fn list_projects(
    client: &BitbucketClient,
    workspace: &str,
) -> Result<Vec<ProjectRecord>, ApiError> {
    let page: PaginatedResponse<Value> = client.get(&projects_path(workspace)).await?;
    Ok(page.values.iter().map(ProjectRecord::from_value).collect())
}
