use super::*;
use std::fs;

fn write_snapshot(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn reads_author_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        "pulls.json",
        r#"[{"author": "alice"}, {"author": "bob"}]"#,
    );
    let mut src = SnapshotSource::open(&path, ContributionKind::PullRequest).unwrap();
    assert_eq!(src.kind(), ContributionKind::PullRequest);
    assert_eq!(src.next_batch(10).unwrap(), ["alice", "bob"]);
    assert!(src.next_batch(10).unwrap().is_empty());
}

#[test]
fn reads_nested_user_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        "issues.json",
        r#"[{"user": {"login": "carol"}, "title": "bug"}, {"author": "dan"}]"#,
    );
    let mut src = SnapshotSource::open(&path, ContributionKind::Issue).unwrap();
    assert_eq!(src.next_batch(10).unwrap(), ["carol", "dan"]);
}

#[test]
fn entries_without_author_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        "issues.json",
        r#"[{"title": "no author"}, {"author": "alice"}, {"user": {}}]"#,
    );
    let mut src = SnapshotSource::open(&path, ContributionKind::Issue).unwrap();
    assert_eq!(src.next_batch(10).unwrap(), ["alice"]);
}

#[test]
fn batches_drain_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        "pulls.json",
        r#"[{"author": "a"}, {"author": "b"}, {"author": "c"}]"#,
    );
    let mut src = SnapshotSource::open(&path, ContributionKind::PullRequest).unwrap();
    assert_eq!(src.next_batch(2).unwrap(), ["a", "b"]);
    assert_eq!(src.next_batch(2).unwrap(), ["c"]);
    assert!(src.next_batch(2).unwrap().is_empty());
}

#[test]
fn non_array_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, "pulls.json", r#"{"author": "alice"}"#);
    let err = SnapshotSource::open(&path, ContributionKind::PullRequest).unwrap_err();
    assert!(err.to_string().contains("not a JSON array"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(SnapshotSource::open(&path, ContributionKind::Issue).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, "pulls.json", "[{");
    let err = SnapshotSource::open(&path, ContributionKind::PullRequest).unwrap_err();
    assert!(err.to_string().contains("malformed"));
}
