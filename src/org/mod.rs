//! Org hierarchy graph: username → manager lookups.
//!
//! Loaded once per run from `org-data.json` and read-only afterward.
//! Usernames are case-sensitive. A reverse manager → direct-reports
//! index is built at load time so closure passes in the boundary
//! resolver cost O(1) per lookup.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// The value object for one username key in `org-data.json`.
#[derive(Debug, Deserialize)]
struct OrgEntry {
    manager: Option<String>,
}

/// In-memory org hierarchy: every known username mapped to its optional
/// manager, plus the reverse index of direct reports.
///
/// Manager values need not themselves be keys — a manager with no entry
/// of its own is a root with no further manager.
#[derive(Debug)]
pub struct OrgGraph {
    managers: HashMap<String, Option<String>>,
    reports: HashMap<String, Vec<String>>,
}

impl OrgGraph {
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read org data {}: {e}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Parse org data from a JSON object of `{"user": {"manager": "boss"}}`
    /// entries. An empty username key is rejected; a missing, null, or
    /// empty manager value means the user has no manager.
    pub fn from_json(raw: &str) -> Result<Self, Box<dyn Error>> {
        let entries: HashMap<String, OrgEntry> =
            serde_json::from_str(raw).map_err(|e| format!("malformed org data: {e}"))?;

        let mut managers = HashMap::new();
        let mut reports: HashMap<String, Vec<String>> = HashMap::new();
        for (user, entry) in entries {
            if user.trim().is_empty() {
                return Err("malformed org data: empty username key".into());
            }
            let manager = entry.manager.filter(|m| !m.trim().is_empty());
            if let Some(m) = &manager {
                reports.entry(m.clone()).or_default().push(user.clone());
            }
            managers.insert(user, manager);
        }

        // Deterministic direct-reports order regardless of map iteration.
        for list in reports.values_mut() {
            list.sort();
        }

        Ok(Self { managers, reports })
    }

    pub fn contains(&self, user: &str) -> bool {
        self.managers.contains_key(user)
    }

    /// Manager of `user`, if the user is known and has one.
    pub fn manager(&self, user: &str) -> Option<&str> {
        self.managers.get(user).and_then(|m| m.as_deref())
    }

    /// Users whose manager is `user`, sorted. Empty for unknown users.
    pub fn direct_reports(&self, user: &str) -> &[String] {
        self.reports.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All usernames with their managers, in unspecified order.
    pub fn users(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.managers.iter().map(|(u, m)| (u.as_str(), m.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
