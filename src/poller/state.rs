//! Shared poll status
//!
//! One record shared between a single writer (the poller) and many
//! readers (the page handlers). The found flag flips at most once.

use tokio::sync::RwLock;

/// Poll lifecycle phase
///
/// `Polling` self-transitions on every failed probe; `Found` is terminal.
/// No other states or transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    Polling,
    Found,
}

/// Shared record of the awaited tag, the probed URL and the found flag
///
/// The poller owns the only write path (`mark_found`); request handlers
/// observe through `snapshot`. Label and URL are immutable for the
/// process lifetime.
#[derive(Debug)]
pub struct PollStatus {
    target_label: String,
    check_url: String,
    phase: RwLock<PollPhase>,
}

/// Immutable view of the status, copied under a single read lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub target_label: String,
    pub check_url: String,
    pub found: bool,
}

impl PollStatus {
    /// Create a new status in the `Polling` phase
    pub fn new(target_label: impl Into<String>, check_url: impl Into<String>) -> Self {
        Self {
            target_label: target_label.into(),
            check_url: check_url.into(),
            phase: RwLock::new(PollPhase::Polling),
        }
    }

    /// URL the poller probes
    pub fn check_url(&self) -> &str {
        &self.check_url
    }

    /// Current phase, read under the shared lock
    pub async fn phase(&self) -> PollPhase {
        *self.phase.read().await
    }

    /// Record the first successful probe
    ///
    /// Returns `true` on the Polling -> Found transition, `false` if the
    /// tag was already found. Found never reverts.
    pub async fn mark_found(&self) -> bool {
        let mut phase = self.phase.write().await;
        match *phase {
            PollPhase::Polling => {
                *phase = PollPhase::Found;
                true
            }
            PollPhase::Found => false,
        }
    }

    /// Copy all fields into an immutable view
    ///
    /// All three fields are read inside one read-lock critical section,
    /// so a reader never observes a partial update.
    pub async fn snapshot(&self) -> StatusView {
        let phase = self.phase.read().await;
        StatusView {
            target_label: self.target_label.clone(),
            check_url: self.check_url.clone(),
            found: *phase == PollPhase::Found,
        }
    }
}
