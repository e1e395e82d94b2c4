//! Tracing subscriber setup for hosts embedding driftlens.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

static INIT: OnceLock<bool> = OnceLock::new();

/// Install a global `fmt` subscriber. `RUST_LOG` overrides the configured
/// filter. Later calls are no-ops; returns whether this call installed it.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let mut installed = false;
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed = result.is_ok();
        installed
    });
    installed
}
