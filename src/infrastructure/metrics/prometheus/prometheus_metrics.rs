//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the `prometheus` crate. Every instance owns its `Registry`, so two routers
//! (or two tests) never share counters unless they are handed the same
//! `MetricsPtr`. Counter and histogram updates are atomic, which keeps
//! concurrent requests from losing increments.

use crate::domain::{MetricSample, Metrics};
use prometheus::{HistogramVec, IntCounterVec, Registry};

/// Prometheus-based metrics implementation.
pub struct PrometheusMetrics {
    registry: Registry,
    request_count: IntCounterVec,
    request_latency: HistogramVec,
}

impl PrometheusMetrics {
    /// Register the request families with the given registry.
    ///
    /// # Errors
    /// Fails if the registry already holds families with the same names.
    pub fn new(registry: Registry) -> prometheus::Result<Self> {
        // ---
        tracing::info!("Creating Prometheus metrics");

        let request_count = super::register_request_count(&registry)?;
        let request_latency = super::register_request_latency(&registry)?;

        Ok(PrometheusMetrics {
            registry,
            request_count,
            request_latency,
        })
    }

    /// Current count for `(method, route, status)`.
    pub fn request_count(&self, method: &str, route: &str, status: u16) -> u64 {
        // ---
        let status = status.to_string();
        self.request_count
            .get_metric_with_label_values(&[method, route, status.as_str()])
            .map(|counter| counter.get())
            .unwrap_or(0)
    }

    /// Number of latency observations for `(method, route)`.
    pub fn latency_sample_count(&self, method: &str, route: &str) -> u64 {
        // ---
        self.request_latency
            .get_metric_with_label_values(&[method, route])
            .map(|histogram| histogram.get_sample_count())
            .unwrap_or(0)
    }

    /// Sum of latency observations for `(method, route)`, in seconds.
    pub fn latency_sample_sum(&self, method: &str, route: &str) -> f64 {
        // ---
        self.request_latency
            .get_metric_with_label_values(&[method, route])
            .map(|histogram| histogram.get_sample_sum())
            .unwrap_or(0.0)
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> anyhow::Result<String> {
        super::render_registry(&self.registry)
    }

    fn record_http_request(&self, sample: &MetricSample) {
        // ---
        tracing::debug!(
            method = %sample.method,
            route = %sample.route,
            status = sample.status,
            duration = sample.duration,
            "Recording HTTP request"
        );

        let status = sample.status.to_string();
        self.request_count
            .with_label_values(&[sample.method.as_str(), sample.route.as_str(), status.as_str()])
            .inc();
        self.request_latency
            .with_label_values(&[sample.method.as_str(), sample.route.as_str()])
            .observe(sample.duration);
    }
}
