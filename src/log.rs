//! Structured logging via the `tracing` ecosystem.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const DEFAULT_FILTER: &str = "info";

/// Picks the filter string: the configured level if set, `info` otherwise.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the config.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_config_filter() {
        let mut config = Config::default();
        config.debug.log_level = "debug,planet_sim::body=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,planet_sim::body=trace");

        config.debug.log_level.clear();
        assert_eq!(filter_directive(Some(&config)), "info");
    }

    #[test]
    fn test_env_filter_parsing() {
        for filter_str in ["info", "debug,planet_sim=trace", "warn"] {
            assert!(EnvFilter::try_new(filter_str).is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }
}
