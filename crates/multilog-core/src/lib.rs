//! # multilog Core
//!
//! A leveled logging facade that multiplexes each line to any number of
//! sinks.
//!
//! This crate provides:
//!
//! - **Sinks**: the [`Sink`] trait and a plain-text renderer ([`TextSink`])
//! - **Fan-out**: [`FanOut`], replicating one write across ordered sinks
//! - **Registry**: [`Registry`], one fan-out per severity channel behind a
//!   single lock, plus the verbose flag gating debug output
//! - **Facade**: free functions and macros on a process-wide default registry
//! - **Configuration**: YAML and environment driven setup
//! - **Diagnostics**: `tracing` integration for the logger's own failures
//!
//! ## Example
//!
//! ```rust
//! use multilog_core::{facade, info, Flags};
//!
//! facade::configure(Flags::STD | Flags::SHORT_FILE);
//! facade::set_verbose(true);
//!
//! facade::info("starting");
//! info!("loaded {} entries", 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod diagnostics;
pub mod facade;
pub mod fanout;
mod macros;
pub mod registry;
pub mod sink;
pub mod text;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use facade::default_registry;
pub use fanout::FanOut;
pub use multilog_types::{Flags, LogConfig, MultilogError, Result, Severity};
pub use registry::{Registry, FATAL_EXIT_CODE};
pub use sink::{CallSite, NullSink, Sink, SinkErrorObserver};
pub use text::{SharedWriter, TextSink};

/// multilog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
