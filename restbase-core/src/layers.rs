//! Default tower layers and the tracing bootstrap.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Request/response logging layer at DEBUG level.
pub fn default_trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Permissive CORS — any origin, method, header. Development use.
pub fn default_cors() -> CorsLayer {
    CorsLayer::permissive()
}
