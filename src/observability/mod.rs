//! # Observability
//!
//! Structured logging via the tracing ecosystem. Initialized once from
//! `main`; repository and handler spans are created with `#[instrument]`.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured default level filters
/// this crate and the HTTP trace layer. With `json` enabled, log lines are
/// emitted as structured JSON for ingestion.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rescat={level},tower_http={level}", level = config.level))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    // try_init: tests may install their own subscriber first.
    if config.json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
