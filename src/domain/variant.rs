//! The two services built from this crate.
//!
//! Both variants share the health route and the request instrumentation.
//! They differ in the payload returned from `/`, in the default reported
//! environment, and in where the Prometheus exposition is served.

use std::fmt;

/// Where a variant serves its Prometheus exposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsExposure {
    /// A dedicated listener (`APP_METRICS_BIND_ADDR`) serves the exposition.
    SeparatePort,

    /// The application router itself serves `GET /metrics`.
    Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVariant {
    /// Index payload with app name, version and environment. Metrics on a
    /// separate port.
    App1,

    /// Home payload with greeting and host details. Metrics on `/metrics`.
    App2,
}

impl ServiceVariant {
    /// Short service name as reported in payloads and logs.
    pub fn name(&self) -> &'static str {
        // ---
        match self {
            ServiceVariant::App1 => "app1",
            ServiceVariant::App2 => "app2",
        }
    }

    /// Human-facing name used in greetings.
    pub fn display_name(&self) -> &'static str {
        // ---
        match self {
            ServiceVariant::App1 => "App1",
            ServiceVariant::App2 => "App2",
        }
    }

    /// Value reported for `environment` when `ENVIRONMENT` is unset.
    pub fn default_environment(&self) -> &'static str {
        // ---
        match self {
            ServiceVariant::App1 => "development",
            ServiceVariant::App2 => "unknown",
        }
    }

    pub fn metrics_exposure(&self) -> MetricsExposure {
        // ---
        match self {
            ServiceVariant::App1 => MetricsExposure::SeparatePort,
            ServiceVariant::App2 => MetricsExposure::Route,
        }
    }
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
