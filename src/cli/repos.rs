//
//  bb-repos
//  cli/repos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository listing output

use std::io::Write;

use anyhow::{Context, Result};

use crate::api::cloud::{RepositoryPages, RepositoryRecord};
use crate::output::write_json_to;

/// Totals of a completed repository listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Pages fetched and printed
    pub pages: usize,
    /// Repository records across all pages
    pub repositories: usize,
    /// Whether the page cap stopped the listing early
    pub truncated: bool,
}

/// Drains `pages`, printing each page's `values` as pretty JSON to `out`.
///
/// Pages are written as soon as they arrive, one JSON array per page.
pub async fn list_repositories<W: Write + ?Sized>(
    mut pages: RepositoryPages<'_>,
    out: &mut W,
) -> Result<ListingSummary> {
    let mut summary = ListingSummary::default();

    while let Some(page) = pages
        .next_page()
        .await
        .context("Failed to fetch repositories")?
    {
        summary.repositories += page.values.len();

        let slugs: Vec<String> = page
            .values
            .iter()
            .map(|v| RepositoryRecord::from_value(v).slug)
            .collect();
        tracing::debug!(
            "page {} ({:?} repositories in total): {:?}",
            pages.pages_fetched(),
            page.size,
            slugs
        );

        write_json_to(out, &page.values)?;
    }

    summary.pages = pages.pages_fetched();
    summary.truncated = pages.truncated();
    Ok(summary)
}
