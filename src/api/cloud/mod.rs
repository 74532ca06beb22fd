//
//  bb-repos
//  api/cloud/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud API v2.0 resources.
//!
//! Each submodule knows the request path of one list endpoint, the record it
//! returns, and how to read that record leniently through
//! [`field_or`](crate::api::common::field_or).
//!
//! - [`workspaces`] - Workspaces visible to the authenticated user
//! - [`projects`] - Projects of a workspace, and key to UUID resolution
//! - [`repositories`] - Repositories of a project, walked page by page
//!
//! # Notes
//!
//! - Every request uses a `fields` filter so responses only carry what is read
//! - UUIDs are returned with curly braces (e.g., `{123e4567-e89b-...}`)
//! - Pagination uses cursor-based navigation with `next` links

pub mod projects;
pub mod repositories;
pub mod workspaces;

pub use projects::{list_projects, resolve_project, ProjectRecord, ResolvedProject};
pub use repositories::{RepositoryPage, RepositoryPages, RepositoryRecord};
pub use workspaces::{list_workspaces, WorkspaceRecord};
