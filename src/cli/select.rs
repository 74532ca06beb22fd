//
//  bb-repos
//  cli/select.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace and project selection
//!
//! Each flow makes one list request, offers the returned identifiers as TAB
//! completions, and accepts whatever the operator types.

use anyhow::{Context, Result};

use crate::api::client::BitbucketClient;
use crate::api::cloud::{list_projects, list_workspaces, resolve_project, ResolvedProject};
use crate::interactive::Prompter;

/// Label of the workspace prompt.
pub const WORKSPACE_PROMPT: &str = "Select a workspace (press TAB for hint)";

/// Label of the project prompt.
pub const PROJECT_PROMPT: &str = "Select a project (press TAB for hint)";

/// Lists workspaces and asks the operator to pick one.
///
/// Choices are the workspace slugs in response order, `"-"` for records
/// without a slug. The typed value is returned verbatim, even when it is not
/// one of the choices.
pub async fn select_workspace<P: Prompter + ?Sized>(
    client: &BitbucketClient,
    prompter: &P,
) -> Result<String> {
    let workspaces = list_workspaces(client)
        .await
        .context("Failed to list workspaces")?;

    let choices: Vec<String> = workspaces.into_iter().map(|w| w.slug).collect();
    tracing::debug!("workspace choices: {:?}", choices);

    let workspace = prompter.prompt_value(WORKSPACE_PROMPT, &choices)?;
    Ok(workspace)
}

/// Lists the projects of `workspace` and asks the operator to pick one.
///
/// The typed key is matched exactly against the returned records. A key that
/// matches nothing resolves to an empty [`ResolvedProject`] and is reported as
/// a warning, not an error.
pub async fn select_project<P: Prompter + ?Sized>(
    client: &BitbucketClient,
    prompter: &P,
    workspace: &str,
) -> Result<ResolvedProject> {
    let projects = list_projects(client, workspace)
        .await
        .with_context(|| format!("Failed to list projects of workspace '{}'", workspace))?;

    let choices: Vec<String> = projects
        .iter()
        .map(|p| p.display_key().to_string())
        .collect();
    tracing::debug!("project choices: {:?}", choices);

    let key = prompter.prompt_value(PROJECT_PROMPT, &choices)?;
    let resolved = resolve_project(&projects, &key);

    if resolved.is_unmatched() {
        tracing::warn!(
            "Project '{}' is not one of the {} projects in '{}'; continuing with an empty project key",
            key,
            projects.len(),
            workspace
        );
    } else {
        tracing::debug!("project {} resolved to {}", resolved.key, resolved.uuid);
    }

    Ok(resolved)
}
