//! Reading and parsing a bundle from disk.
//!
//! Loading is transactional: callers get a fully parsed [`Bundle`] or a
//! descriptive error, never partially populated state. What to do with
//! prior state on failure is up to the caller.

use crate::bundle::Bundle;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a bundle from a JSON document.
///
/// Missing optional fields default per [`crate::bundle`]; malformed JSON
/// or a material missing `id`/`name` is an error.
pub fn parse_bundle(data: &str) -> Result<Bundle> {
    serde_json::from_str(data).context("invalid bundle JSON")
}

/// Read and parse a bundle file.
///
/// ### Returns
/// The parsed [`Bundle`], or an error naming the offending path for both
/// unreadable files and malformed documents.
pub fn load_bundle_from_path(path: &Path) -> Result<Bundle> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to open: {}", path.display()))?;
    parse_bundle(&data).with_context(|| format!("while loading {}", path.display()))
}
