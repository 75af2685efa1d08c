//! Diagnostic logging.
//!
//! Logs go to stderr with a compact timestamp so NDJSON on stdout stays
//! parseable. `RUST_LOG` takes precedence over everything:
//!
//! ```bash
//! RUST_LOG=place_html=debug place-html -i html -o js
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Level implied by the number of `-v` flags, if any were given
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    level_for_verbosity(verbose)
        .map(str::to_string)
        .unwrap_or_else(|| config.level.clone())
}

/// Initialize logging.
///
/// Only the first call takes effect. Without `RUST_LOG`, the level comes from
/// `-v` when given, otherwise from `[logging] level` (default `warn`).
pub fn init(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter_directive(config, verbose))
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
