// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod instrument;
mod metrics;
mod root;

// Core handlers
pub use health::health_check;
pub use metrics::{metrics_handler, METRICS_CONTENT_TYPE};
pub use root::{home_handler, index_handler};

// Request instrumentation
pub use instrument::instrumented;
