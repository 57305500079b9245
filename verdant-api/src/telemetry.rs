//! Tracing setup for the API process.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to info-level output for
/// the workspace crates and quiet HTTP tracing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("verdant=info,verdant_api=info,tower_http=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
