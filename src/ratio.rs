//! Contribution classification and the InnerSource ratio.
//!
//! Partitions the combined tally by team membership: a contributor
//! inside the resolved boundary counts toward the team, anyone else is
//! an InnerSource contributor.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::boundary::TeamBoundary;
use crate::contrib::ContributionTally;

/// Everything the report renderer needs: totals, the ratio, and the
/// per-bucket views, all deterministically ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub team_members: BTreeSet<String>,
    pub all_contributors: BTreeSet<String>,
    pub innersource_contributors: BTreeSet<String>,
    pub team_counts: BTreeMap<String, usize>,
    pub innersource_counts: BTreeMap<String, usize>,
    pub total_team: usize,
    pub total_innersource: usize,
    /// Fraction of contributions from outside the team, in [0,1].
    /// `None` when there are no contributions at all.
    pub ratio: Option<f64>,
}

impl ReportData {
    /// The ratio as a displayable fraction; zero when undefined.
    pub fn ratio_or_zero(&self) -> f64 {
        self.ratio.unwrap_or(0.0)
    }
}

/// Partition `tally` by membership in `team` and compute the ratio.
/// Pure: identical inputs always produce identical output.
pub fn classify(tally: &ContributionTally, team: &TeamBoundary) -> ReportData {
    let mut team_counts = BTreeMap::new();
    let mut innersource_counts = BTreeMap::new();

    for (user, &count) in tally {
        if team.contains(user) {
            team_counts.insert(user.clone(), count);
        } else {
            innersource_counts.insert(user.clone(), count);
        }
    }

    let total_team: usize = team_counts.values().sum();
    let total_innersource: usize = innersource_counts.values().sum();
    let total = total_team + total_innersource;

    // Explicit zero-denominator branch: no contributions means the
    // ratio is undefined, not a division error.
    let ratio = if total == 0 {
        None
    } else {
        Some(total_innersource as f64 / total as f64)
    };

    ReportData {
        team_members: team.clone(),
        all_contributors: tally.keys().cloned().collect(),
        innersource_contributors: innersource_counts.keys().cloned().collect(),
        team_counts,
        innersource_counts,
        total_team,
        total_innersource,
        ratio,
    }
}

#[cfg(test)]
#[path = "ratio_test.rs"]
mod tests;
