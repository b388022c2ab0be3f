//! HTTP server for the status page
//!
//! Routes:
//! - `/` - yes/no status page (HTML)
//! - `/metrics` - poll/page counters in Prometheus text format

mod page;
pub mod metrics;

pub use metrics::{create_metrics, SharedMetrics, StatusMetrics};
pub use page::{render_status_page, AppState, RenderError};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

/// Run the status server on `addr`
///
/// A bind failure is returned to the caller and is fatal; after a
/// successful bind the server runs until process exit.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    // Log after successful bind - server is actually listening
    info!(addr = %addr, "status server listening");

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::status_page))
        .route("/metrics", get(page::metrics_page))
        .with_state(state)
}

#[cfg(test)]
#[path = "page_test.rs"]
mod page_tests;

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_tests;
