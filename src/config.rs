// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every setting is optional; missing or unparsable values fall back to
//! the documented defaults.

use crate::domain::ServiceVariant;
use anyhow::Result;
use std::net::SocketAddr;
use tracing::Level;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default string.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Default application listener.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default listener for the standalone metrics exposition (app1).
pub const DEFAULT_METRICS_BIND_ADDR: &str = "0.0.0.0:9090";

/// Default reported service version.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Which metrics backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsType {
    Prom,
    Noop,
}

impl std::str::FromStr for MetricsType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // ---
        match s.to_ascii_lowercase().as_str() {
            "prom" | "prometheus" => Ok(MetricsType::Prom),
            "noop" | "none" => Ok(MetricsType::Noop),
            other => Err(anyhow::anyhow!("Unknown metrics type: {other}")),
        }
    }
}

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Which of the two services this process runs.
    pub variant: ServiceVariant,

    /// Maximum log level (`LOG_LEVEL`). Defaults to INFO.
    pub log_level: Level,

    /// Deployment environment reported in payloads (`ENVIRONMENT`).
    pub environment: String,

    /// Service version reported in payloads (`VERSION`). Defaults to 1.0.0.
    pub version: String,

    /// Application listener (`APP_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Metrics listener (`APP_METRICS_BIND_ADDR`), used by app1 only.
    pub metrics_bind_addr: SocketAddr,

    /// Metrics backend (`APP_METRICS_TYPE`). Defaults to Prometheus.
    pub metrics_type: MetricsType,

    /// Hostname override for the home payload (`APP_HOSTNAME`).
    pub hostname: Option<String>,
}

impl AppConfig {
    /// Loads application configuration for `variant` from the environment.
    ///
    /// # Errors
    /// Returns an error only if a built-in default address fails to parse.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env(variant: ServiceVariant) -> Result<Self> {
        // ---
        let log_level = parse_log_level(&optional_env!("LOG_LEVEL", "INFO"));
        let environment = optional_env!("ENVIRONMENT", variant.default_environment());
        let version = optional_env!("VERSION", DEFAULT_VERSION);

        let bind_addr =
            optional_env_parse!("APP_BIND_ADDR", SocketAddr, DEFAULT_BIND_ADDR.parse()?);
        let metrics_bind_addr = optional_env_parse!(
            "APP_METRICS_BIND_ADDR",
            SocketAddr,
            DEFAULT_METRICS_BIND_ADDR.parse()?
        );
        let metrics_type = optional_env_parse!("APP_METRICS_TYPE", MetricsType, MetricsType::Prom);
        let hostname = std::env::var("APP_HOSTNAME").ok().filter(|h| !h.is_empty());

        Ok(Self {
            variant,
            log_level,
            environment,
            version,
            bind_addr,
            metrics_bind_addr,
            metrics_type,
            hostname,
        })
    }

    /// Configuration with every default applied, ignoring the environment.
    pub fn defaults(variant: ServiceVariant) -> Self {
        // ---
        Self {
            variant,
            log_level: Level::INFO,
            environment: variant.default_environment().to_string(),
            version: DEFAULT_VERSION.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            metrics_bind_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            metrics_type: MetricsType::Prom,
            hostname: None,
        }
    }
}

/// Map a `LOG_LEVEL` value to a tracing level.
///
/// Accepts tracing names and the Python-style `WARNING` and `CRITICAL`,
/// case-insensitively. Anything else falls back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    // ---
    match value.trim().to_ascii_uppercase().as_str() {
        "WARNING" => Level::WARN,
        "CRITICAL" | "FATAL" => Level::ERROR,
        other => other.parse().unwrap_or(Level::INFO),
    }
}

// ============================================================
// Tests
// ============================================================
