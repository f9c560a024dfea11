//! Logging setup.

use tracing::Level;

/// Install the global `tracing` subscriber at `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(level: Level) {
    // ---
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .ok(); // Ignores if already initialized
}
