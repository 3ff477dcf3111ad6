//! Tracing subscriber setup for applications embedding the palette.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line format.
    #[default]
    Text,
    /// Structured JSON lines, one event per line.
    Json,
}

/// Initialise the global tracing subscriber.
///
/// `default_filter` is the filter used when `RUST_LOG` is not set, e.g.
/// `"inkdown_palette=debug"`.
pub fn init_tracing(default_filter: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let layer = match format {
        LogFormat::Text => fmt::layer().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    };
    Registry::default().with(filter).with(layer).init();
}
