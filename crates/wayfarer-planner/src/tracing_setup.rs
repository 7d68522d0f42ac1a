//! Subscriber setup for binaries and tests embedding the planner.

use tracing_subscriber::EnvFilter;
use wayfarer_core::config::ObservabilityConfig;
use wayfarer_core::constants::LOG_ENV_VAR;

/// Install the global subscriber. `WAYFARER_LOG` overrides the configured
/// level. Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
