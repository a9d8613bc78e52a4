//! File-backed surface state.

mod common;

use std::sync::Arc;

use blockwall::error::StateStoreError;
use blockwall::models::{BlockAssignment, BlockPos, Facing, SurfaceIdentity};
use blockwall::services::{FileStateStore, ScreenService, SurfaceStateStore};
use common::{fixtures, RecordingTransport};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_blocks() -> BlockAssignment {
    [
        (BlockPos::new(0, 64, 0), "red_concrete".to_string()),
        (BlockPos::new(1, 64, 0), "red_concrete".to_string()),
        (BlockPos::new(-1, 65, 3), "terracotta".to_string()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let store = FileStateStore::new(dir.path());
    let identity = fixtures::strip_identity();

    assert!(store.load(&identity).unwrap().is_none());
    store.save(&identity, &sample_blocks()).unwrap();

    assert_eq!(store.load(&identity).unwrap(), Some(sample_blocks()));
}

#[test]
fn test_state_survives_new_store_instance() {
    let dir = TempDir::new().unwrap();
    let identity = fixtures::strip_identity();

    FileStateStore::new(dir.path())
        .save(&identity, &sample_blocks())
        .unwrap();

    let reopened = FileStateStore::new(dir.path());
    assert_eq!(reopened.load(&identity).unwrap(), Some(sample_blocks()));
}

#[test]
fn test_save_creates_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("state").join("surfaces");
    let store = FileStateStore::new(&nested);

    store
        .save(&fixtures::strip_identity(), &sample_blocks())
        .unwrap();

    assert!(nested.is_dir());
    let files: Vec<_> = std::fs::read_dir(&nested).unwrap().collect();
    assert_eq!(files.len(), 1, "temporary file should be renamed away");
}

#[test]
fn test_document_contains_identity_and_timestamp() {
    let dir = TempDir::new().unwrap();
    let store = FileStateStore::new(dir.path());
    let identity = fixtures::strip_identity();
    store.save(&identity, &sample_blocks()).unwrap();

    let content = std::fs::read_to_string(store.path_for(&identity).unwrap()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(doc["identity"]["facing"], "north");
    assert_eq!(doc["identity"]["width"], 4);
    assert!(doc["rendered_at"].is_string());
    assert_eq!(doc["blocks"].as_array().unwrap().len(), 3);
}

#[test]
fn test_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileStateStore::new(dir.path());
    let identity = fixtures::strip_identity();

    store.save(&identity, &sample_blocks()).unwrap();
    store.delete(&identity).unwrap();
    store.delete(&identity).unwrap();

    assert!(store.load(&identity).unwrap().is_none());
}

#[test]
fn test_corrupt_document_is_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStateStore::new(dir.path());
    let identity = fixtures::strip_identity();
    std::fs::write(store.path_for(&identity).unwrap(), "{ not json").unwrap();

    assert!(matches!(
        store.load(&identity),
        Err(StateStoreError::Serialization(_))
    ));
}

#[test]
fn test_foreign_document_is_identity_mismatch() {
    let dir = TempDir::new().unwrap();
    let store = FileStateStore::new(dir.path());
    let identity = fixtures::strip_identity();
    let other = SurfaceIdentity::new(BlockPos::new(5, 5, 5), Facing::East, 2, 2);

    store.save(&other, &sample_blocks()).unwrap();
    std::fs::copy(
        store.path_for(&other).unwrap(),
        store.path_for(&identity).unwrap(),
    )
    .unwrap();

    assert!(matches!(
        store.load(&identity),
        Err(StateStoreError::IdentityMismatch)
    ));
}

#[test]
fn test_corrupt_state_degrades_to_full_render() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileStateStore::new(dir.path()));
    let identity = fixtures::strip_identity();
    std::fs::write(store.path_for(&identity).unwrap(), "garbage").unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let service = ScreenService::new(transport.clone(), store.clone());
    let report = service
        .render_raster(&identity, &fixtures::red_blue_strip(), &fixtures::nearest_options())
        .unwrap();

    assert!(!report.diffed);
    assert_eq!(report.commands_sent, 2);
    // the successful render replaced the broken document
    assert!(store.load(&identity).unwrap().is_some());
}

#[test]
fn test_unwritable_state_does_not_fail_render() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let service = ScreenService::new(transport.clone(), Arc::new(FileStateStore::new(&blocker)));
    let identity = fixtures::strip_identity();
    let options = fixtures::nearest_options();

    let first = service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();
    let second = service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();

    assert_eq!(first.commands_sent, 2);
    assert_eq!(second.commands_sent, 2);
}
