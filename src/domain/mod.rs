mod metrics;
mod variant;

// Publicly expose the Metrics abstraction
pub use metrics::{MetricSample, Metrics, MetricsPtr};

// Publicly expose the service variants
pub use variant::{MetricsExposure, ServiceVariant};
