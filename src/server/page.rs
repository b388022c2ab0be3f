//! Status page handlers
//!
//! `GET /` renders the yes/no page from a consistent status snapshot;
//! `GET /metrics` exposes the counters in Prometheus text format.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::fmt::Write as _;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use super::metrics::SharedMetrics;
use crate::poller::{PollStatus, StatusView};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format status page: {0}")]
    Format(#[from] std::fmt::Error),
}

/// State shared with every handler
#[derive(Clone)]
pub struct AppState {
    pub status: Arc<PollStatus>,
    pub metrics: SharedMetrics,
}

/// `GET /` - the status page
///
/// Rendering failure is the only error path here and yields a generic
/// 500; it never touches the poll status.
pub(super) async fn status_page(State(app): State<AppState>) -> Response {
    app.metrics.page_hits_total.inc();
    let view = app.status.snapshot().await;
    match render_status_page(&view) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!(error = %e, "failed to render status page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// `GET /metrics` - Prometheus text encoding of the counters
pub(super) async fn metrics_page(State(app): State<AppState>) -> Response {
    match app.metrics.encode() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Render the page body for a status snapshot
///
/// The "Yes" branch links to the change URL; the "No" branch is plain text.
pub fn render_status_page(view: &StatusView) -> Result<String, RenderError> {
    let mut body = String::new();
    writeln!(body, "<!DOCTYPE html>")?;
    writeln!(body, "<html>")?;
    writeln!(body, "<body>")?;
    writeln!(body, "<center>")?;
    writeln!(body, "<h2>Is Go {} out yet?</h2>", view.target_label)?;
    if view.found {
        writeln!(body, "<h1><a href=\"{}\">Yes!</a></h1>", view.check_url)?;
    } else {
        writeln!(body, "<h1>No.</h1>")?;
    }
    writeln!(body, "</center>")?;
    writeln!(body, "</body>")?;
    writeln!(body, "</html>")?;
    Ok(body)
}
