//! Logging
//!
//! `tracing` subscriber writing formatted events to the browser console
//! through `tracing-web`, one console call per event, routed by level.

use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Parse `filter`, falling back to `info` when it is not valid
/// `EnvFilter` directive syntax.
pub fn parse_filter(filter: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(filter) {
        Ok(parsed) => (parsed, None),
        Err(e) => (
            EnvFilter::new("info"),
            Some(format!("Invalid log filter {:?}: {}", filter, e)),
        ),
    }
}

/// Install the console subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `client_dashboard=debug`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(filter: &str) {
    let (filter, rejected) = parse_filter(filter);

    // No wall clock in wasm32-unknown-unknown
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_ok();

    if let (true, Some(message)) = (installed, rejected) {
        tracing::warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        let (filter, rejected) = parse_filter("client_dashboard=debug");
        assert!(rejected.is_none());
        assert_eq!(filter.to_string(), "client_dashboard=debug");

        let (filter, rejected) = parse_filter("client_dashboard=loud");
        assert!(rejected.unwrap().contains("client_dashboard=loud"));
        assert_eq!(filter.to_string(), "info");
    }
}
