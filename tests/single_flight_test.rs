//! Single-flight guard tests
//!
//! At most one data-mutating fetch (initial, load-more, refresh) may be in
//! flight. Triggers that arrive while one is running are dropped, never
//! queued, and the provider is not called for them.
//!
//! These run the real controller against `MockFeed` with a short latency so
//! the first fetch is still pending when the second trigger arrives.

use std::sync::Arc;
use std::time::Duration;

use waterfall::model::item::ThumbnailBean;
use waterfall::{DataController, FetchKind, FetchOutcome, GuardError, Item, LoadingState, MockFeed};

const LATENCY: Duration = Duration::from_millis(40);

fn page(len: usize) -> Vec<Item> {
    (0..len)
        .map(|i| {
            Item::Thumbnail(ThumbnailBean {
                title: format!("item {}", i),
                ..Default::default()
            })
        })
        .collect()
}

fn setup(page_len: usize) -> (Arc<MockFeed>, Arc<DataController>) {
    let feed = Arc::new(MockFeed::new(page(page_len), LATENCY));
    let controller = Arc::new(DataController::new(feed.clone()));
    (feed, controller)
}

/// Test: two load-more triggers in the same tick produce one provider call
#[tokio::test]
async fn test_concurrent_load_more_calls_provider_once() {
    let (feed, controller) = setup(4);
    controller.initial_load().await;
    assert_eq!(feed.calls(), 1);

    let (first, second) = tokio::join!(controller.load_more(), controller.load_more());

    assert_eq!(feed.calls(), 2, "second trigger must not reach the provider");
    assert!(matches!(
        first,
        FetchOutcome::Loaded {
            kind: FetchKind::LoadMore,
            received: 4,
            total: 8
        }
    ));
    assert_eq!(
        second,
        FetchOutcome::Skipped(GuardError::Busy {
            running: FetchKind::LoadMore
        })
    );
    assert_eq!(controller.item_count(), 8);
}

/// Test: refresh requested while a load-more runs is dropped, not queued
#[tokio::test]
async fn test_refresh_during_load_more_is_dropped() {
    let (feed, controller) = setup(3);
    controller.initial_load().await;

    let (more, refresh) = tokio::join!(controller.load_more(), controller.refresh());

    assert!(matches!(more, FetchOutcome::Loaded { total: 6, .. }));
    assert!(refresh.is_skipped());
    assert_eq!(feed.calls(), 2);

    // Nothing ran later on its behalf
    tokio::time::sleep(LATENCY * 3).await;
    assert_eq!(feed.calls(), 2);
    assert_eq!(controller.item_count(), 6);
}

/// Test: load-more requested while a refresh runs is dropped
#[tokio::test]
async fn test_load_more_during_refresh_is_dropped() {
    let (feed, controller) = setup(3);
    controller.initial_load().await;
    controller.load_more().await;
    assert_eq!(controller.item_count(), 6);

    let (refresh, more) = tokio::join!(controller.refresh(), controller.load_more());

    assert!(matches!(
        refresh,
        FetchOutcome::Loaded {
            kind: FetchKind::Refresh,
            total: 3,
            ..
        }
    ));
    assert!(more.is_skipped());
    assert_eq!(feed.calls(), 3);
    assert_eq!(controller.item_count(), 3);
}

/// Test: the slot is visible as busy while a fetch is pending
#[tokio::test]
async fn test_busy_while_in_flight() {
    let (_feed, controller) = setup(2);

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.initial_load().await })
    };
    tokio::time::sleep(LATENCY / 4).await;

    assert!(controller.is_busy());
    assert_eq!(controller.in_flight(), Some(FetchKind::Initial));
    assert_eq!(controller.loading_state(), LoadingState::Idle);

    pending.await.unwrap();
    assert!(!controller.is_busy());
}

/// Test: a cancelled fetch frees the slot instead of leaving it stuck
#[tokio::test]
async fn test_cancelled_fetch_releases_slot() {
    let (feed, controller) = setup(2);
    controller.initial_load().await;

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.load_more().await })
    };
    tokio::time::sleep(LATENCY / 4).await;
    assert!(controller.is_busy());

    pending.abort();
    let _ = pending.await;

    assert!(!controller.is_busy());
    assert_eq!(controller.loading_state(), LoadingState::Idle);

    // The next trigger goes through
    let outcome = controller.load_more().await;
    assert!(matches!(outcome, FetchOutcome::Loaded { total: 4, .. }));
    assert_eq!(feed.calls(), 3);
}

/// Test: initial load runs once
#[tokio::test]
async fn test_second_initial_load_rejected() {
    let (feed, controller) = setup(2);
    controller.initial_load().await;

    let again = controller.initial_load().await;
    assert_eq!(again, FetchOutcome::Skipped(GuardError::AlreadyInitialized));
    assert_eq!(feed.calls(), 1);
}
