//! Tracing setup — structured logging for the pipeline.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `CASCADE_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CASCADE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();

    tracing::info!(version = cascade_core::constants::VERSION, "tracing initialized");
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYZE: &str = "cascade.analyze";
    pub const CORRELATE: &str = "cascade.correlate";
    pub const STRANDS: &str = "cascade.strands";
    pub const DECIDE: &str = "cascade.decide";
    pub const FEEDBACK: &str = "cascade.feedback";
}
