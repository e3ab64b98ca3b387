//! Logging setup
//!
//! Diagnostics go to stderr so that report and JSON output on stdout stay
//! clean. The filter comes from `EXPENSE_TRACKER_LOG` when set, otherwise
//! from the `log_level` setting.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

/// Build the filter from the environment or the given default level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(default_level: &str) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(stderr_log.with_filter(build_filter(default_level)))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_default_level() {
        let filter = build_filter("debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let filter = build_filter("tracker=loudest");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("info");
    }
}
