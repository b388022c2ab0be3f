//! Background tag poller and its shared status
//!
//! A single poller task writes the one-shot found flag; any number of
//! page handlers read it concurrently through [`PollStatus::snapshot`].

mod poll;
mod state;

pub use poll::{Clock, HttpProber, NoopNotifier, Notifier, Poller, ProbeError, Prober, TokioClock};
pub use state::{PollPhase, PollStatus, StatusView};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_tests;

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_tests;
