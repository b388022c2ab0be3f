//! Command-line flags and probe URL composition

use clap::Parser;
use std::time::Duration;

/// Base of the change URL; the version label is appended as `go<label>`.
pub const BASE_CHANGE_URL: &str = "https://go.googlesource.com/go/+/";

/// Startup flags. All values are immutable for the process lifetime.
#[derive(Parser, Debug, Clone)]
#[command(name = "tagwatch")]
#[command(about = "Polls for a Go release tag and serves a yes/no status page")]
pub struct Config {
    /// Listen address for the status page
    #[arg(long = "http", default_value = "localhost:8080")]
    pub http_addr: String,

    /// Poll period in seconds
    #[arg(long = "poll", default_value_t = 5)]
    pub poll_secs: u64,

    /// Go version label to await
    #[arg(long = "version", default_value = "1.4")]
    pub version: String,
}

impl Config {
    /// Interval between probes
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_secs)
    }

    /// URL probed for the tag
    pub fn change_url(&self) -> String {
        change_url(BASE_CHANGE_URL, &self.version)
    }
}

/// Compose the probe URL: `<base>go<label>`
pub fn change_url(base: &str, version: &str) -> String {
    format!("{}go{}", base, version)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
