//! Internal diagnostics.
//!
//! multilog reports its own events (reconfiguration, swallowed sink
//! failures) through `tracing`, never through its own channels.

use crate::sink::SinkErrorObserver;
use multilog_types::{MultilogError, Result, Severity};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the `tracing` filter for internal diagnostics.
pub const DIAGNOSTICS_ENV: &str = "MULTILOG_DIAGNOSTICS";

/// Install a `tracing` subscriber printing multilog's own diagnostics to
/// stderr, filtered by [`DIAGNOSTICS_ENV`] (default `warn`).
pub fn init_default() -> Result<()> {
    let filter = EnvFilter::try_from_env(DIAGNOSTICS_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|e| MultilogError::Config(format!("Failed to install diagnostics subscriber: {}", e)))
}

/// Observer forwarding sink failures to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SinkErrorObserver for TracingObserver {
    fn sink_failed(&self, channel: Option<Severity>, index: usize, error: &io::Error) {
        match channel {
            Some(channel) => tracing::warn!(%channel, sink = index, %error, "log sink write failed"),
            None => tracing::warn!(sink = index, %error, "log sink write failed"),
        }
    }
}
