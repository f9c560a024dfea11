pub mod noop;
pub mod prometheus;

// Re-export the factory functions for easy access
pub use self::prometheus::create as create_prom_metrics;
pub use self::prometheus::create_with_registry as create_prom_metrics_with_registry;
pub use noop::create as create_noop_metrics;
