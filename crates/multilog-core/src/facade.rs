//! Process-wide logging facade.
//!
//! Free functions forwarding to a lazily created default [`Registry`]. Code
//! that needs isolation (tests, embedded use) should construct its own
//! registry instead.

use crate::registry::Registry;
use multilog_types::{Flags, Result};
use once_cell::sync::Lazy;
use std::fmt;
use std::fs::File;
use std::path::Path;

static DEFAULT: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry used by the free functions and macros.
pub fn default_registry() -> &'static Registry {
    &DEFAULT
}

/// Enable or disable debug output.
pub fn set_verbose(verbose: bool) {
    DEFAULT.set_verbose(verbose);
}

/// Whether debug output is enabled.
pub fn verbose() -> bool {
    DEFAULT.verbose()
}

/// Recreate all outputs with new flags.
pub fn configure(flags: Flags) {
    DEFAULT.configure(flags);
}

/// Silence every channel.
pub fn reset() {
    DEFAULT.reset();
}

/// Also write every channel to the file at `path`.
pub fn append_file_destination(path: impl AsRef<Path>) -> Result<()> {
    DEFAULT.append_file_destination(path)
}

/// Also write every channel to an already-open file.
pub fn append_descriptor(file: File) {
    DEFAULT.append_descriptor(file);
}

/// Info logging of a single value. Several values are joined with
/// [`info_fmt`] or the [`info!`](crate::info) macro.
#[track_caller]
pub fn info(message: impl fmt::Display) {
    DEFAULT.info(message);
}

/// Info logging with formatting.
#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.info_fmt(args);
}

/// Debug logging.
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    DEFAULT.debug(message);
}

/// Debug logging with formatting.
#[track_caller]
pub fn debug_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.debug_fmt(args);
}

/// Warning logging of a single value; see [`info`].
#[track_caller]
pub fn warning(message: impl fmt::Display) {
    DEFAULT.warning(message);
}

/// Warning logging with formatting.
#[track_caller]
pub fn warning_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.warning_fmt(args);
}

/// Fatal logging, with exit.
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    DEFAULT.fatal(message)
}

/// Fatal logging with formatting, with exit.
#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatal_fmt(args)
}

/// Line-oriented info logging.
#[track_caller]
pub fn println(args: fmt::Arguments<'_>) {
    DEFAULT.println(args);
}

/// Formatted info logging.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    DEFAULT.printf(args);
}

/// Formatted info logging on behalf of a wrapper `up` frames above.
#[track_caller]
pub fn printf_level(up: usize, args: fmt::Arguments<'_>) {
    DEFAULT.printf_level(up, args);
}
