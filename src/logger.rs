//! Tracing subscriber setup for binaries.
//!
//! Library code only emits events via `tracing` macros; installing a
//! subscriber is left to the hosting binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `app_name=default_level`
/// is used as the filter directive.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let directive = format!("{}={}", app_name.replace('-', "_"), default_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
