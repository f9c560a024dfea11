use super::instrument::instrumented;
use crate::app_state::AppState;
use axum::{
    extract::{MatchedPath, State},
    http::{Method, StatusCode},
    Json,
};

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Responds with the health status of the server.
///
/// Always `200 OK` with `{ "status": "ok" }` while the process is serving.
/// The request is counted like any other instrumented route.
///
/// # Examples
/// - `GET /health` → 200 OK
#[tracing::instrument(skip_all)]
pub async fn health_check(
    State(state): State<AppState>,
    method: Method,
    path: MatchedPath,
) -> Result<(StatusCode, Json<HealthResponse>), StatusCode> {
    // ---
    instrumented(state.metrics(), &method, path.as_str(), || async {
        Ok::<_, StatusCode>((StatusCode::OK, Json(HealthResponse { status: "ok" })))
    })
    .await
}
