//! Logging setup for the `thybot` binary.
//!
//! Events go to **stderr** so they never interleave with the conversation
//! printed on stdout. The filter comes from `RUST_LOG`; without it only
//! warnings from dependencies and `info` from ThyBot's own crates are shown.

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,thybot=info,thybot_groq=info";

/// RFC3339 UTC timer, e.g. `2025-09-12T10:20:30Z`.
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Install the global subscriber. Calling it twice is harmless: the second
/// call reports the existing subscriber and leaves it in place.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(ChronoRfc3339Utc)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
}
