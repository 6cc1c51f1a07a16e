//! Snapshot-file contribution sources.
//!
//! Remote API extraction happens outside this tool: pull-request and
//! issue authors arrive as exported JSON arrays, newest first (the
//! extractor's page order). Entries carry an author login either
//! directly (`"author": "alice"`) or nested (`"user": {"login": ...}`).

use std::error::Error;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{ContributionKind, ContributionSource};

#[derive(Debug)]
pub struct SnapshotSource {
    kind: ContributionKind,
    authors: std::vec::IntoIter<String>,
}

impl SnapshotSource {
    /// Load a snapshot file. Entries without a recognizable author are
    /// dropped; a file that is not a JSON array is an error.
    pub fn open(path: &Path, kind: ContributionKind) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {kind} snapshot {}: {e}", path.display()))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| format!("malformed {kind} snapshot {}: {e}", path.display()))?;
        let Value::Array(entries) = value else {
            return Err(format!("{kind} snapshot {} is not a JSON array", path.display()).into());
        };

        let authors: Vec<String> = entries.iter().filter_map(entry_author).collect();
        Ok(Self {
            kind,
            authors: authors.into_iter(),
        })
    }
}

fn entry_author(entry: &Value) -> Option<String> {
    entry
        .get("author")
        .and_then(Value::as_str)
        .or_else(|| {
            entry
                .get("user")
                .and_then(|u| u.get("login"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

impl ContributionSource for SnapshotSource {
    fn kind(&self) -> ContributionKind {
        self.kind
    }

    fn next_batch(&mut self, max: usize) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.authors.by_ref().take(max).collect())
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
