//! Tests for reachable-node retrieval by snapshot id or `latest`

mod common;

use rstest::rstest;

use api::ErrorKind;
use common::fixtures::{snapshot_ids, TestExportDir};

fn three_snapshots() -> TestExportDir {
    TestExportDir::new()
        .with_snapshot(snapshot_ids::OLDEST, &[100])
        .with_snapshot(snapshot_ids::MIDDLE, &[200, 201])
        .with_snapshot(snapshot_ids::NEWEST, &[300, 301, 302])
}

#[tokio::test]
async fn test_explicit_snapshot_returned_in_file_order() {
    let dir = three_snapshots();

    let nodes = dir
        .reachable_service()
        .get_reachable_nodes(snapshot_ids::MIDDLE)
        .await
        .unwrap();

    let heights: Vec<u64> = nodes.iter().map(|n| n.height).collect();
    assert_eq!(heights, vec![200, 201]);
}

#[tokio::test]
async fn test_latest_matches_most_recent_snapshot() {
    let dir = three_snapshots();
    let service = dir.reachable_service();

    let latest = service.get_reachable_nodes("latest").await.unwrap();
    let newest = service
        .get_reachable_nodes(snapshot_ids::NEWEST)
        .await
        .unwrap();

    assert_eq!(latest, newest);
    assert_eq!(latest.len(), 3);
}

#[tokio::test]
async fn test_latest_follows_new_files() {
    let dir = TestExportDir::new().with_snapshot(snapshot_ids::OLDEST, &[1]);
    let service = dir.reachable_service();

    assert_eq!(service.get_reachable_nodes("latest").await.unwrap().len(), 1);

    dir.write_snapshot(snapshot_ids::NEWEST, &[5, 6]);
    assert_eq!(service.get_reachable_nodes("latest").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_latest_on_empty_directory_is_not_found() {
    let dir = TestExportDir::new();

    let err = dir
        .reachable_service()
        .get_reachable_nodes("latest")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.public_message(), "Snapshot not found.");
}

#[tokio::test]
async fn test_unknown_snapshot_is_not_found() {
    let dir = three_snapshots();

    let err = dir
        .reachable_service()
        .get_reachable_nodes(snapshot_ids::MISSING)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.public_message(), "Snapshot not found.");
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("LATEST")]
#[case("1700000000.json")]
#[case("12abc")]
#[case("..")]
#[case("1700000000/../secret")]
#[tokio::test]
async fn test_malformed_snapshot_id_is_bad_request(#[case] snapshot_id: &str) {
    let dir = three_snapshots();

    let err = dir
        .reachable_service()
        .get_reachable_nodes(snapshot_id)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.public_message(), "Invalid snapshot id.");
}

#[tokio::test]
async fn test_corrupt_snapshot_is_unexpected() {
    let dir = TestExportDir::new();
    dir.write_raw("1700000000.json", "[1, 2, 3]");

    let err = dir
        .reachable_service()
        .get_reachable_nodes(snapshot_ids::OLDEST)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.public_message(), "An unknown error occurred.");
}
