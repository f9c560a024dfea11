//! Request instrumentation wrapper.
//!
//! Times a handler and, when it returns normally, records one count under
//! `(method, route, status)` and one latency observation under
//! `(method, route)`. Errors pass through untouched and are not recorded.

use crate::domain::{MetricSample, MetricsPtr};
use axum::http::{Method, StatusCode};
use std::future::Future;
use std::time::Instant;

/// Run `handler` and record its outcome in `metrics`.
///
/// `route` should be the matched route template, not the raw request path,
/// so label cardinality stays bounded. The handler's status and payload are
/// returned unmodified.
pub async fn instrumented<F, Fut, T, E>(
    metrics: &MetricsPtr,
    method: &Method,
    route: &str,
    handler: F,
) -> Result<(StatusCode, T), E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(StatusCode, T), E>>,
{
    // ---
    let start = Instant::now();
    let (status, payload) = handler().await?;

    let sample = MetricSample::since(start, method.as_str(), route, status.as_u16());
    metrics.record_http_request(&sample);

    Ok((status, payload))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::{MetricSample, Metrics};
    use crate::infrastructure::metrics::prometheus::PrometheusMetrics;
    use prometheus::Registry;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Captures every sample so tests can inspect exactly what was recorded.
    #[derive(Default)]
    struct CapturingMetrics {
        samples: Mutex<Vec<MetricSample>>,
    }

    impl Metrics for CapturingMetrics {
        fn render(&self) -> anyhow::Result<String> {
            Ok(String::new())
        }

        fn record_http_request(&self, sample: &MetricSample) {
            self.samples.lock().unwrap().push(sample.clone());
        }
    }

    #[tokio::test]
    async fn returns_handler_output_unchanged() {
        // ---
        let metrics: MetricsPtr = Arc::new(CapturingMetrics::default());

        let result: Result<_, StatusCode> =
            instrumented(&metrics, &Method::GET, "/", || async {
                Ok((StatusCode::CREATED, "payload"))
            })
            .await;

        assert_eq!(result, Ok((StatusCode::CREATED, "payload")));
    }

    #[tokio::test]
    async fn records_one_sample_with_labels_and_duration() {
        // ---
        let capture = Arc::new(CapturingMetrics::default());
        let metrics: MetricsPtr = capture.clone();

        let _: Result<_, StatusCode> = instrumented(&metrics, &Method::GET, "/health", || async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok((StatusCode::OK, ()))
        })
        .await;

        let samples = capture.samples.lock().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].method, "GET");
        assert_eq!(samples[0].route, "/health");
        assert_eq!(samples[0].status, 200);
        assert!(samples[0].duration >= 0.01);
    }

    #[tokio::test]
    async fn errors_propagate_and_are_not_recorded() {
        // ---
        let capture = Arc::new(CapturingMetrics::default());
        let metrics: MetricsPtr = capture.clone();

        let result: Result<(StatusCode, ()), StatusCode> =
            instrumented(&metrics, &Method::GET, "/", || async {
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            })
            .await;

        assert_eq!(result, Err(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(capture.samples.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn n_calls_add_n_to_the_counter() {
        // ---
        let prom = Arc::new(PrometheusMetrics::new(Registry::new()).unwrap());
        let metrics: MetricsPtr = prom.clone();

        // Seed a non-zero starting point.
        let _: Result<_, StatusCode> =
            instrumented(&metrics, &Method::GET, "/", || async { Ok((StatusCode::OK, ())) })
                .await;
        let before = prom.request_count("GET", "/", 200);

        for _ in 0..5 {
            let _: Result<_, StatusCode> =
                instrumented(&metrics, &Method::GET, "/", || async { Ok((StatusCode::OK, ())) })
                    .await;
        }

        assert_eq!(prom.request_count("GET", "/", 200), before + 5);
        assert_eq!(prom.latency_sample_count("GET", "/"), before + 5);
        assert!(prom.latency_sample_sum("GET", "/") >= 0.0);
    }

    #[tokio::test]
    async fn concurrent_requests_lose_no_increments() {
        // ---
        let prom = Arc::new(PrometheusMetrics::new(Registry::new()).unwrap());
        let metrics: MetricsPtr = prom.clone();

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let metrics = metrics.clone();
                tokio::spawn(async move {
                    let _: Result<_, StatusCode> =
                        instrumented(&metrics, &Method::GET, "/health", || async {
                            tokio::task::yield_now().await;
                            Ok((StatusCode::OK, ()))
                        })
                        .await;
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(prom.request_count("GET", "/health", 200), 64);
    }
}
