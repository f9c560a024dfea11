// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{routing::get, Router};

use domain::{MetricsExposure, MetricsPtr};
use handlers::{health_check, home_handler, index_handler, metrics_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod server;
mod telemetry;

pub use config::*;

// Hoist up only the public symbol(s)
pub use domain::ServiceVariant;
pub use handlers::{instrumented, METRICS_CONTENT_TYPE};
pub use infrastructure::metrics::prometheus::{PrometheusMetrics, REQUEST_COUNT, REQUEST_LATENCY};
pub use server::serve;
pub use telemetry::init_tracing;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
    create_prom_metrics_with_registry,
};

/// Build the metrics implementation selected by `metrics_type`.
pub fn create_metrics(metrics_type: MetricsType) -> Result<MetricsPtr> {
    // ---
    match metrics_type {
        MetricsType::Prom => create_prom_metrics(),
        MetricsType::Noop => create_noop_metrics(),
    }
}

/// Build the application router for `config.variant`.
///
/// Both variants serve `/` and `/health`. Variants that expose metrics on
/// the application port also get `/metrics`.
pub fn create_router(config: AppConfig, metrics: MetricsPtr) -> Router {
    // ---
    let variant = config.variant;
    let app_state = AppState::new(metrics, config);

    let root = match variant {
        ServiceVariant::App1 => get(index_handler),
        ServiceVariant::App2 => get(home_handler),
    };

    let router = Router::new()
        .route("/", root)
        .route("/health", get(health_check));

    let router = match variant.metrics_exposure() {
        MetricsExposure::Route => router.route("/metrics", get(metrics_handler)),
        MetricsExposure::SeparatePort => router,
    };

    router.with_state(app_state)
}

/// Build the standalone metrics-exposition router.
///
/// Serves the exposition on both `/` and `/metrics`.
pub fn create_metrics_router(metrics: MetricsPtr) -> Router {
    // ---
    Router::new()
        .route("/", get(metrics_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}
