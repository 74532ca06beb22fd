//
//  bb-repos
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for repository pages. Every value is followed by a
//! newline so consecutive pages stay readable when streamed to a terminal or
//! piped to `jq`.

use serde::Serialize;
use std::io::Write;

/// Writes a value as pretty-printed JSON to a custom writer.
///
/// # Example
///
/// ```rust
/// use bb_repos::output::write_json_to;
/// use serde_json::json;
///
/// let mut buffer = Vec::new();
/// write_json_to(&mut buffer, &json!([{"slug": "svc-a"}])).unwrap();
///
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.starts_with("[\n  {\n    \"slug\": \"svc-a\""));
/// assert!(output.ends_with("]\n"));
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The value cannot be serialized to JSON
/// - Writing to the destination fails
pub fn write_json_to<W: Write + ?Sized, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
