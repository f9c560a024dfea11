// Test helpers are intentionally partially used
#![allow(dead_code)]

use instrumented_apps::{
    create_metrics_router, create_router, AppConfig, PrometheusMetrics, ServiceVariant,
};
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;

// ============================================================================
// Test Setup
// ============================================================================

/// Application config for tests: defaults plus a hostname that always resolves.
pub fn test_config(variant: ServiceVariant) -> AppConfig {
    // ---
    AppConfig {
        hostname: Some("localhost".to_string()),
        ..AppConfig::defaults(variant)
    }
}

/// A fresh Prometheus backend on its own registry.
pub fn fresh_metrics() -> Arc<PrometheusMetrics> {
    // ---
    Arc::new(PrometheusMetrics::new(prometheus::Registry::new()).expect("registry"))
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub metrics_addr: Option<std::net::SocketAddr>,
    pub client: Client,
    pub metrics: Arc<PrometheusMetrics>,
}

impl TestServer {
    // ---
    pub async fn new(variant: ServiceVariant) -> Self {
        // --
        let metrics = fresh_metrics();
        let app = create_router(test_config(variant), metrics.clone());
        let addr = spawn(app).await;

        // app1 exposes metrics on a second listener; mirror that here.
        let metrics_addr = match variant {
            ServiceVariant::App1 => Some(spawn(create_metrics_router(metrics.clone())).await),
            ServiceVariant::App2 => None,
        };

        let client = Client::new();

        Self {
            addr,
            metrics_addr,
            client,
            metrics,
        }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// URL on whichever listener serves the Prometheus exposition.
    pub fn metrics_url(&self) -> String {
        // ---
        format!("http://{}/metrics", self.metrics_addr.unwrap_or(self.addr))
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        // ---
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn scrape(&self) -> String {
        // ---
        let res = self
            .client
            .get(self.metrics_url())
            .send()
            .await
            .expect("Failed to scrape metrics");
        assert!(res.status().is_success(), "Metrics endpoint should return success");

        res.text().await.expect("Failed to read metrics body")
    }
}

/// Serve `router` on an ephemeral local port in the background.
async fn spawn(router: axum::Router) -> std::net::SocketAddr {
    // ---
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}
