//! Poll and page-view counters
//!
//! Process-wide monotonic counters, diagnostic only. Built as an
//! explicit injectable collector (shared via [`SharedMetrics`]) rather
//! than ambient global state, and exposed read-only on `/metrics`.

use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use std::sync::{Arc, RwLock};

/// Counter registry shared by the poller and the page handlers
pub struct StatusMetrics {
    registry: Registry,
    /// Total status page views
    pub page_hits_total: IntCounter,
    /// Total probe attempts
    pub polls_total: IntCounter,
    /// Total probe transport failures
    pub poll_errors_total: IntCounter,
    /// Text of the most recent probe error (prometheus has no string
    /// metric, so this lives beside the registry)
    last_poll_error: RwLock<Option<String>>,
}

impl StatusMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let page_hits_total = IntCounter::with_opts(Opts::new(
            "tagwatch_page_hits_total",
            "Total number of status page views",
        ))?;
        registry.register(Box::new(page_hits_total.clone()))?;

        let polls_total = IntCounter::with_opts(Opts::new(
            "tagwatch_polls_total",
            "Total number of tag probe attempts",
        ))?;
        registry.register(Box::new(polls_total.clone()))?;

        let poll_errors_total = IntCounter::with_opts(Opts::new(
            "tagwatch_poll_errors_total",
            "Total number of failed tag probes",
        ))?;
        registry.register(Box::new(poll_errors_total.clone()))?;

        Ok(Self {
            registry,
            page_hits_total,
            polls_total,
            poll_errors_total,
            last_poll_error: RwLock::new(None),
        })
    }

    /// Record a failed probe: bump the counter and remember the error text
    pub fn record_poll_error(&self, error: &str) {
        self.poll_errors_total.inc();
        if let Ok(mut last) = self.last_poll_error.write() {
            *last = Some(error.to_string());
        }
    }

    /// Text of the most recent probe error, if any
    pub fn last_poll_error(&self) -> Option<String> {
        self.last_poll_error.read().ok().and_then(|last| last.clone())
    }

    /// Encode all counters to Prometheus text format
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            prometheus::Error::Msg(format!("Failed to encode metrics as UTF-8: {}", e))
        })
    }
}

/// Shared metrics handle for use across poller and server
pub type SharedMetrics = Arc<StatusMetrics>;

/// Create a new shared metrics instance
pub fn create_metrics() -> Result<SharedMetrics, prometheus::Error> {
    Ok(Arc::new(StatusMetrics::new()?))
}
