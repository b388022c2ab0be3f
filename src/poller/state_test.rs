//! Tests for the shared poll status

use super::*;
use std::sync::Arc;

#[tokio::test]
async fn test_new_status_starts_polling() {
    let status = PollStatus::new("1.4", "https://example/+/go1.4");

    assert_eq!(status.phase().await, PollPhase::Polling);

    let view = status.snapshot().await;
    assert_eq!(view.target_label, "1.4");
    assert_eq!(view.check_url, "https://example/+/go1.4");
    assert!(!view.found);
}

#[tokio::test]
async fn test_mark_found_transitions_at_most_once() {
    let status = PollStatus::new("1.4", "https://example/+/go1.4");

    assert!(status.mark_found().await, "first call should transition");
    assert!(!status.mark_found().await, "second call should be a no-op");
    assert_eq!(status.phase().await, PollPhase::Found);
}

#[tokio::test]
async fn test_found_never_reverts() {
    let status = PollStatus::new("1.4", "https://example/+/go1.4");
    status.mark_found().await;

    // Repeated reads and redundant writes all observe Found
    for _ in 0..10 {
        assert!(status.snapshot().await.found);
        status.mark_found().await;
    }
    assert_eq!(status.phase().await, PollPhase::Found);
}

/// Concurrent readers must see either the before or the after state,
/// never a partial view.
#[tokio::test(flavor = "multi_thread")]
async fn test_snapshot_is_complete_under_concurrency() {
    let status = Arc::new(PollStatus::new("1.4", "https://example/+/go1.4"));

    let mut readers = Vec::new();
    for _ in 0..8 {
        let status = Arc::clone(&status);
        readers.push(tokio::spawn(async move {
            let mut views = Vec::new();
            for _ in 0..100 {
                views.push(status.snapshot().await);
                tokio::task::yield_now().await;
            }
            views
        }));
    }

    let writer = Arc::clone(&status);
    let write_handle = tokio::spawn(async move {
        tokio::task::yield_now().await;
        writer.mark_found().await
    });

    assert!(write_handle.await.expect("writer should not panic"));
    for reader in readers {
        for view in reader.await.expect("reader should not panic") {
            // Label and URL are present regardless of which side of the
            // transition the snapshot landed on
            assert_eq!(view.target_label, "1.4");
            assert_eq!(view.check_url, "https://example/+/go1.4");
        }
    }

    // After the write completes, every snapshot observes found
    assert!(status.snapshot().await.found);
}
