//! Team boundary resolution.
//!
//! Determines the set of usernames that jointly own the repository:
//! either an operator-supplied override, or a closure over the org graph
//! seeded at the original commit author — the author, the author's
//! manager and that manager's other reports, then everyone reporting up
//! into the set.
//!
//! Only one upward hop is taken (the author's manager); managers of
//! other members are not pulled in recursively. Operators who need a
//! wider team use the override instead.

use std::collections::BTreeSet;

use crate::org::OrgGraph;

/// The resolved owning team. Ordered for deterministic display.
pub type TeamBoundary = BTreeSet<String>;

/// Resolve the owning team.
///
/// A non-empty `override_team` wins outright and skips the graph —
/// useful when the first committer no longer represents current
/// ownership. Otherwise the team grows from `original_author` by one
/// upward hop plus unlimited downward closure. Missing data degrades to
/// a smaller team; this never fails.
pub fn resolve(
    original_author: Option<&str>,
    org: &OrgGraph,
    override_team: Option<&TeamBoundary>,
) -> TeamBoundary {
    if let Some(team) = override_team
        && !team.is_empty()
    {
        return team.clone();
    }

    let mut team = TeamBoundary::new();
    let Some(author) = original_author else {
        return team;
    };
    team.insert(author.to_string());

    // One upward hop: the author's manager, plus the manager's reports.
    if let Some(manager) = org.manager(author) {
        team.insert(manager.to_string());
        for peer in org.direct_reports(manager) {
            team.insert(peer.clone());
        }
    }

    // Downward closure to a fixpoint. A cycle cannot grow the team past
    // its own members, so |org| passes bound termination.
    for _ in 0..org.len() {
        let mut added = false;
        for (user, manager) in org.users() {
            if team.contains(user) {
                continue;
            }
            if let Some(m) = manager
                && team.contains(m)
            {
                team.insert(user.to_string());
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    team
}

#[cfg(test)]
#[path = "boundary_test.rs"]
mod tests;
