//! Clearing surfaces.

mod common;

use std::sync::Arc;

use blockwall::error::RenderError;
use blockwall::models::Facing;
use blockwall::services::{InMemoryStateStore, ScreenService, SurfaceStateStore};
use common::{fixtures, FailingTransport, LostReplyTransport, RecordingTransport};
use pretty_assertions::assert_eq;

#[test]
fn test_clear_emits_one_bounding_air_fill() {
    let transport = Arc::new(RecordingTransport::new());
    let store = Arc::new(InMemoryStateStore::new());
    let service = ScreenService::new(transport.clone(), store.clone());
    let identity = fixtures::strip_identity();

    service
        .render_raster(&identity, &fixtures::red_blue_strip(), &fixtures::nearest_options())
        .unwrap();
    transport.reset();

    service.clear(&identity).unwrap();

    common::assert_commands(&transport.sent(), &["fill 0 64 0 3 64 0 minecraft:air"]);
    assert!(store.load(&identity).unwrap().is_none());
}

#[test]
fn test_clear_covers_full_extent() {
    let transport = Arc::new(RecordingTransport::new());
    let service = ScreenService::new(transport.clone(), Arc::new(InMemoryStateStore::new()));

    service
        .clear(&fixtures::identity(Facing::West, 192, 108))
        .unwrap();

    common::assert_commands(
        &transport.sent(),
        &["fill 100 177 -20 100 70 171 minecraft:air"],
    );
}

#[test]
fn test_clear_is_idempotent() {
    let transport = Arc::new(RecordingTransport::new());
    let service = ScreenService::new(transport.clone(), Arc::new(InMemoryStateStore::new()));
    let identity = fixtures::strip_identity();

    service.clear(&identity).unwrap();
    service.clear(&identity).unwrap();

    assert_eq!(transport.sent().len(), 2);
}

#[test]
fn test_render_after_clear_is_full() {
    let transport = Arc::new(RecordingTransport::new());
    let service = ScreenService::new(transport.clone(), Arc::new(InMemoryStateStore::new()));
    let identity = fixtures::strip_identity();
    let options = fixtures::nearest_options();

    service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();
    service.clear(&identity).unwrap();
    let report = service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();

    assert!(!report.diffed);
    assert_eq!(report.commands_sent, 2);
}

#[test]
fn test_failed_clear_still_forgets_state() {
    let store = Arc::new(InMemoryStateStore::new());
    let identity = fixtures::strip_identity();

    ScreenService::new(Arc::new(RecordingTransport::new()), store.clone())
        .render_raster(&identity, &fixtures::red_blue_strip(), &fixtures::nearest_options())
        .unwrap();

    let result = ScreenService::new(Arc::new(FailingTransport::after(0)), store.clone())
        .clear(&identity);

    assert!(matches!(
        result,
        Err(RenderError::Transport { applied: 0, total: 1, .. })
    ));
    assert!(store.load(&identity).unwrap().is_none());
}

#[test]
fn test_render_after_lost_clear_reply_redraws() {
    let transport = Arc::new(LostReplyTransport::on("minecraft:air"));
    let service = ScreenService::new(transport.clone(), Arc::new(InMemoryStateStore::new()));
    let identity = fixtures::strip_identity();
    let options = fixtures::nearest_options();

    service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();
    assert!(service.clear(&identity).is_err());

    // the air fill landed, so the strip has to be drawn again
    let report = service
        .render_raster(&identity, &fixtures::red_blue_strip(), &options)
        .unwrap();

    assert!(!report.diffed);
    assert_eq!(report.commands_sent, 2);
    assert_eq!(transport.sent().len(), 5);
}
