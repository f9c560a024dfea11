use crate::domain::MetricsPtr;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Content type of the Prometheus text exposition format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handler for the `/metrics` endpoint.
///
/// Returns metrics in Prometheus text format for scraping. The state is the
/// bare `MetricsPtr`, so the same handler serves both the application router
/// (app2) and the standalone metrics listener (app1).
#[tracing::instrument(skip_all)]
pub async fn metrics_handler(
    State(metrics): State<MetricsPtr>,
) -> Result<impl IntoResponse, StatusCode> {
    // ---

    let metrics_text = metrics.render().map_err(|err| {
        tracing::error!("Failed to render metrics: {:?}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        StatusCode::OK,
        [("content-type", METRICS_CONTENT_TYPE)],
        metrics_text,
    ))
}
