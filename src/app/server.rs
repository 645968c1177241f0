//! Metrics HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use super::fault::{Fault, FaultSender};
use crate::metrics::PostmarkMetrics;

/// Bind the listener and serve scrapes until cancelled.
///
/// A bind or serve failure is handed to `faults` and the task ends; the
/// coordinator decides what happens to the process.
pub async fn serve(
    addr: SocketAddr,
    metrics: Arc<PostmarkMetrics>,
    shutdown: watch::Receiver<bool>,
    faults: FaultSender,
) {
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, %addr, "failed to bind metrics listener");
            faults.report(Fault::Serve(err.into()));
            return;
        }
    };

    info!(%addr, "metrics server listening");

    if let Err(err) = serve_on(listener, metrics, shutdown).await {
        error!(error = %err, "metrics server failed");
        faults.report(Fault::Serve(err.into()));
    }
}

/// Serve scrapes on an already-bound listener until cancelled.
///
/// Graceful shutdown: stop accepting once the cancellation signal fires and
/// let in-flight requests finish.
pub async fn serve_on(
    listener: TcpListener,
    metrics: Arc<PostmarkMetrics>,
    shutdown: watch::Receiver<bool>,
) -> std::io::Result<()> {
    axum::serve(listener, router(metrics))
        .with_graceful_shutdown(cancelled(shutdown))
        .await
}

/// Build the scrape router.
pub fn router(metrics: Arc<PostmarkMetrics>) -> Router {
    Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(metrics)
}

async fn render_metrics(State(metrics): State<Arc<PostmarkMetrics>>) -> Response {
    match metrics.render() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn cancelled(mut shutdown: watch::Receiver<bool>) {
    while !*shutdown.borrow_and_update() {
        if shutdown.changed().await.is_err() {
            break;
        }
    }
}
