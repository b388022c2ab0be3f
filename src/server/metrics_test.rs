//! Tests for the status counters

use super::metrics::{create_metrics, StatusMetrics};
use std::sync::Arc;

#[test]
fn test_metrics_creation_and_encoding() {
    let metrics = StatusMetrics::new().expect("should create metrics");

    metrics.page_hits_total.inc();
    metrics.polls_total.inc();
    metrics.polls_total.inc();
    metrics.record_poll_error("no such host");

    let output = metrics.encode().expect("should encode metrics");
    assert!(output.contains("tagwatch_page_hits_total 1"));
    assert!(output.contains("tagwatch_polls_total 2"));
    assert!(output.contains("tagwatch_poll_errors_total 1"));
}

#[test]
fn test_last_poll_error_updates_each_time() {
    let metrics = StatusMetrics::new().expect("should create metrics");
    assert_eq!(metrics.last_poll_error(), None);

    metrics.record_poll_error("dns failure");
    assert_eq!(metrics.last_poll_error().as_deref(), Some("dns failure"));

    metrics.record_poll_error("connection refused");
    assert_eq!(metrics.last_poll_error().as_deref(), Some("connection refused"));

    assert_eq!(metrics.poll_errors_total.get(), 2);
}

#[test]
fn test_shared_handle_observes_same_counters() {
    let metrics = create_metrics().expect("should create metrics");

    let clone = Arc::clone(&metrics);
    clone.polls_total.inc();

    assert_eq!(metrics.polls_total.get(), 1);
}
