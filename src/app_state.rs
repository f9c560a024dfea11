//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` carries the
//! metrics registry and the startup configuration.
//!
//! The state is cheaply cloneable (everything sits behind an `Arc`) so it
//! can be handed to each request handler without copying resources.

use crate::config::AppConfig;
use crate::domain::{MetricsPtr, ServiceVariant};
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the application.
/// The metrics registry is owned here rather than living in a process-wide
/// global, so every router (and every test) can be given its own.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording request counts and latencies.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,

    /// Startup configuration, immutable after initialization.
    config: Arc<AppConfig>,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, config: AppConfig) -> Self {
        // ---
        AppState {
            metrics,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the startup configuration.
    pub(crate) fn config(&self) -> &AppConfig {
        // ---
        &self.config
    }

    /// The service variant this state belongs to.
    pub(crate) fn variant(&self) -> ServiceVariant {
        // ---
        self.config.variant
    }
}

/// Lets handlers that only need the registry extract `State<MetricsPtr>`.
impl FromRef<AppState> for MetricsPtr {
    fn from_ref(state: &AppState) -> Self {
        // ---
        state.metrics.clone()
    }
}
