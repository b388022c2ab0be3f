//! Tag poller
//!
//! Probes the change URL on a fixed interval until the tag first appears,
//! then stops permanently. Probe failures are counted and logged, never
//! fatal; the fixed-interval loop is the only retry mechanism.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use super::state::{PollPhase, PollStatus};
use crate::server::SharedMetrics;

#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("probe request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Transport(err.to_string())
    }
}

/// Existence probe against a URL
///
/// `Ok(true)` means the resource is present, `Ok(false)` means not yet
/// available (any non-success status), `Err` means the request itself
/// failed (DNS, connection, timeout).
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> Result<bool, ProbeError>;
}

/// HEAD-request prober; presence is defined as HTTP 200
///
/// No timeout is layered on top of the client's transport defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> Result<bool, ProbeError> {
        let response = self.client.head(url).send().await?;
        Ok(response.status() == reqwest::StatusCode::OK)
    }
}

/// Sleep capability injected into the poller so tests can run without
/// real delays
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, period: Duration);
}

#[derive(Debug, Clone, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}

/// Completion signal, fired exactly once when the tag is first found
pub trait Notifier: Send + Sync {
    fn poll_done(&self);
}

/// Production notifier; the found state itself is the signal
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn poll_done(&self) {}
}

/// Background poller driving the Polling -> Found transition
pub struct Poller {
    status: Arc<PollStatus>,
    metrics: SharedMetrics,
    prober: Arc<dyn Prober>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
}

impl Poller {
    pub fn new(
        status: Arc<PollStatus>,
        metrics: SharedMetrics,
        prober: Arc<dyn Prober>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
    ) -> Self {
        Self {
            status,
            metrics,
            prober,
            clock,
            notifier,
            interval,
        }
    }

    /// Poll until the tag is first seen, then stop permanently
    ///
    /// Each iteration issues one probe. Transport errors and non-success
    /// statuses both leave the status untouched and resume the normal
    /// cadence after one interval sleep. No backoff.
    pub async fn run(self) {
        info!(
            url = %self.status.check_url(),
            interval = ?self.interval,
            "poller starting"
        );

        loop {
            // Loop-exit check under the same lock discipline as the write
            if self.status.phase().await == PollPhase::Found {
                return;
            }

            self.metrics.polls_total.inc();
            match self.prober.probe(self.status.check_url()).await {
                Ok(true) => {
                    self.status.mark_found().await;
                    info!(url = %self.status.check_url(), "tag found, polling stopped");
                    self.notifier.poll_done();
                    return;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, url = %self.status.check_url(), "probe failed");
                    self.metrics.record_poll_error(&e.to_string());
                }
            }

            self.clock.sleep(self.interval).await;
        }
    }
}
