//! Tracing subscriber setup

use crate::config::Settings;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// `RUST_LOG` takes precedence; otherwise the filter from `settings` is used.
/// Output goes to stderr in the compact format. Fails if a global subscriber
/// is already installed or the filter directive does not parse.
pub fn init(settings: &Settings) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Create a span grouping the work of one combinator call
pub fn combinator_span(name: &str, len: usize) -> Span {
    span!(Level::TRACE, "combinator", name = %name, len = %len)
}
