use super::*;

fn org() -> OrgGraph {
    OrgGraph::from_json(
        r#"{
            "alice": {"manager": "teamlead"},
            "bob": {"manager": "teamlead"},
            "charlie": {"manager": "alice"},
            "teamlead": {"manager": "director"},
            "dave": {"manager": "otherlead"},
            "otherlead": {"manager": "director"}
        }"#,
    )
    .unwrap()
}

fn team_of(members: &[&str]) -> TeamBoundary {
    members.iter().map(|m| m.to_string()).collect()
}

#[test]
fn resolves_author_manager_peers_and_reports() {
    let team = resolve(Some("alice"), &org(), None);
    assert_eq!(
        team,
        team_of(&["alice", "bob", "charlie", "teamlead", "director"])
    );
    assert!(!team.contains("dave"));
    assert!(!team.contains("otherlead"));
}

#[test]
fn override_wins_over_derivation() {
    let override_team = team_of(&["alice", "bob", "charlie"]);
    let team = resolve(Some("alice"), &org(), Some(&override_team));
    assert_eq!(team, override_team, "override is returned verbatim");
    assert!(!team.contains("teamlead"));
}

#[test]
fn empty_override_falls_back_to_derivation() {
    let empty = TeamBoundary::new();
    let team = resolve(Some("alice"), &org(), Some(&empty));
    assert!(team.contains("teamlead"));
}

#[test]
fn override_without_author_still_resolves() {
    let override_team = team_of(&["dave"]);
    let team = resolve(None, &org(), Some(&override_team));
    assert_eq!(team, override_team);
}

#[test]
fn no_author_and_no_override_is_empty() {
    assert!(resolve(None, &org(), None).is_empty());
}

#[test]
fn unknown_author_is_still_a_member() {
    let team = resolve(Some("ghost"), &org(), None);
    assert!(team.contains("ghost"));
    assert_eq!(team.len(), 1);
}

#[test]
fn unknown_author_still_closes_downward() {
    // "director" never appears as a key, only as a manager value, yet
    // everyone reporting up into the seed must still be pulled in.
    let team = resolve(Some("director"), &org(), None);
    assert_eq!(
        team,
        team_of(&[
            "alice", "bob", "charlie", "dave", "director", "otherlead", "teamlead"
        ])
    );
}

#[test]
fn empty_graph_degrades_to_author_only() {
    let org = OrgGraph::from_json("{}").unwrap();
    let team = resolve(Some("alice"), &org, None);
    assert_eq!(team, team_of(&["alice"]));
}

#[test]
fn manager_cycle_terminates() {
    let org = OrgGraph::from_json(
        r#"{
            "a": {"manager": "b"},
            "b": {"manager": "a"},
            "c": {"manager": "b"}
        }"#,
    )
    .unwrap();
    let team = resolve(Some("a"), &org, None);
    assert_eq!(team, team_of(&["a", "b", "c"]));
}

#[test]
fn self_managed_user_terminates() {
    let org = OrgGraph::from_json(r#"{"a": {"manager": "a"}}"#).unwrap();
    let team = resolve(Some("a"), &org, None);
    assert_eq!(team, team_of(&["a"]));
}

#[test]
fn deep_chain_closes_fully() {
    let org = OrgGraph::from_json(
        r#"{
            "l1": {"manager": "top"},
            "l2": {"manager": "l1"},
            "l3": {"manager": "l2"},
            "l4": {"manager": "l3"}
        }"#,
    )
    .unwrap();
    let team = resolve(Some("l1"), &org, None);
    assert_eq!(team, team_of(&["l1", "l2", "l3", "l4", "top"]));
}

#[test]
fn resolution_is_idempotent() {
    let graph = org();
    let first = resolve(Some("alice"), &graph, None);
    let again = resolve(Some("alice"), &graph, Some(&first));
    assert_eq!(first, again, "re-resolving the result adds nothing");
}

#[test]
fn resolution_is_deterministic() {
    let graph = org();
    assert_eq!(
        resolve(Some("alice"), &graph, None),
        resolve(Some("alice"), &graph, None)
    );
}
