//! Logging initialization.
//!
//! The subscriber is assembled from [`LoggingConfig`]: `level` seeds the env
//! filter (an explicit `RUST_LOG` still wins) and `format` picks the output
//! shape. Machine-readable JSON is the default; anything else falls back to
//! a compact human-readable form for local development.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

fn wants_json(format: &str) -> bool {
    format.eq_ignore_ascii_case("json")
}

/// Installs the global tracing subscriber. Call once, before any log line.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    if wants_json(&config.format) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_target(false))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_detection() {
        assert!(wants_json("json"));
        assert!(wants_json("JSON"));
        assert!(!wants_json("pretty"));
        assert!(!wants_json(""));
    }
}
