//! Index (app1) and home (app2) handlers for `GET /`.

use super::instrument::instrumented;
use crate::app_state::AppState;
use crate::domain::ServiceVariant;
use crate::infrastructure::host;
use axum::{
    extract::{MatchedPath, State},
    http::{Method, StatusCode},
    Json,
};
use serde::Serialize;

/// Payload returned by app1 from `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    app: &'static str,
    version: String,
    environment: String,
}

/// Payload returned by app2 from `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    message: String,
    hostname: String,
    hostip: String,
    environment: String,
    version: String,
}

/// Handler for `GET /` on app1.
///
/// Responds with `200 OK` and the app name, version and environment.
#[tracing::instrument(skip_all)]
pub async fn index_handler(
    State(state): State<AppState>,
    method: Method,
    path: MatchedPath,
) -> Result<(StatusCode, Json<IndexResponse>), StatusCode> {
    // ---
    instrumented(state.metrics(), &method, path.as_str(), || index(&state)).await
}

async fn index(state: &AppState) -> Result<(StatusCode, Json<IndexResponse>), StatusCode> {
    // ---
    tracing::info!("Received request for index page");

    let config = state.config();
    let response = IndexResponse {
        app: state.variant().name(),
        version: config.version.clone(),
        environment: config.environment.clone(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Handler for `GET /` on app2.
///
/// Responds with `200 OK`, a greeting and the serving host's name and
/// address. If the host cannot be resolved, responds with
/// `500 Internal Server Error` and records nothing.
#[tracing::instrument(skip_all)]
pub async fn home_handler(
    State(state): State<AppState>,
    method: Method,
    path: MatchedPath,
) -> Result<(StatusCode, Json<HomeResponse>), StatusCode> {
    // ---
    instrumented(state.metrics(), &method, path.as_str(), || home(&state)).await
}

async fn home(state: &AppState) -> Result<(StatusCode, Json<HomeResponse>), StatusCode> {
    // ---
    let config = state.config();
    let host = host::lookup(config.hostname.as_deref())
        .await
        .map_err(|err| {
            tracing::error!("Host lookup failed: {:?}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let response = HomeResponse {
        message: greeting(state.variant()),
        hostname: host.hostname,
        hostip: host.ip.to_string(),
        environment: config.environment.clone(),
        version: config.version.clone(),
    };

    Ok((StatusCode::OK, Json(response)))
}

fn greeting(variant: ServiceVariant) -> String {
    format!("Hello from {}!", variant.display_name())
}
