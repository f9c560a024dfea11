use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

/// Name of the per-request counter family.
pub const REQUEST_COUNT: &str = "app_request_count_total";

/// Name of the per-request latency histogram family.
pub const REQUEST_LATENCY: &str = "app_request_latency_seconds";

/// Latency buckets in seconds, matching the classic Prometheus client defaults.
pub const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Build the request counter and register it with `registry`.
///
/// Labels: `method`, `endpoint`, `http_status`.
pub fn register_request_count(registry: &Registry) -> prometheus::Result<IntCounterVec> {
    // ---
    let counter = IntCounterVec::new(
        Opts::new(REQUEST_COUNT, "Application Request Count"),
        &["method", "endpoint", "http_status"],
    )?;
    registry.register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Build the request latency histogram and register it with `registry`.
///
/// Labels: `method`, `endpoint`.
pub fn register_request_latency(registry: &Registry) -> prometheus::Result<HistogramVec> {
    // ---
    let histogram = HistogramVec::new(
        HistogramOpts::new(REQUEST_LATENCY, "Application Request Latency")
            .buckets(LATENCY_BUCKETS.to_vec()),
        &["method", "endpoint"],
    )?;
    registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}
