//! JSON tracing output, in its own process so it gets the global subscriber.

use driftlens_core::config::ObservabilityConfig;
use driftlens_core::observability::init_tracing;

#[test]
fn json_subscriber_installs() {
    let config = ObservabilityConfig {
        log_filter: "not a [valid filter".to_string(),
        json: true,
    };
    assert!(init_tracing(&config));
    tracing::info!(component = "observability", "json subscriber installed");
    assert!(!init_tracing(&config));
}
