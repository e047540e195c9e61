//! Channel registry.
//!
//! A [`Registry`] binds each [`Severity`] to its own [`FanOut`] writer and
//! owns the verbose flag that gates the debug channel. All four channels sit
//! behind one lock: emissions to any channel are totally ordered with respect
//! to each other, and reconfiguration never overlaps an emission.
//!
//! ## Example
//!
//! ```
//! use multilog_core::{Flags, Registry};
//!
//! let registry = Registry::new();
//! registry.configure(Flags::SHORT_FILE);
//! registry.info("service started");
//!
//! registry.set_verbose(true);
//! registry.debug_fmt(format_args!("listening on port {}", 8080));
//! ```

use crate::fanout::FanOut;
use crate::sink::{Sink, SinkErrorObserver};
use crate::text::{SharedWriter, TextSink};
use multilog_types::{Flags, Result, Severity};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flags used by the default sinks of a new registry.
pub const DEFAULT_FLAGS: Flags =
    Flags::from_bits_truncate(Flags::STD.bits() | Flags::SHORT_FILE.bits());

/// Flags used by file and descriptor destinations.
pub const FILE_FLAGS: Flags = DEFAULT_FLAGS;

/// Exit status used by the fatal channel.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Depth passed to a channel for a direct facade call: the facade method and
/// its caller.
pub(crate) const CALLER_DEPTH: usize = 2;

type Destination = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

struct Channels {
    writers: [FanOut; 4],
    flags: Flags,
    observer: Option<Arc<dyn SinkErrorObserver>>,
}

impl Channels {
    fn empty(flags: Flags, observer: Option<Arc<dyn SinkErrorObserver>>) -> Self {
        let writers = Severity::ALL.map(|severity| {
            let mut fanout = FanOut::new();
            fanout.set_channel(severity);
            fanout.set_observer(observer.clone());
            fanout
        });
        Self {
            writers,
            flags,
            observer,
        }
    }

    fn writer(&mut self, severity: Severity) -> &mut FanOut {
        &mut self.writers[severity.index()]
    }
}

/// Process- or test-scoped logging state: four channels and a verbose flag.
pub struct Registry {
    channels: Mutex<Channels>,
    verbose: AtomicBool,
    destination: Destination,
}

impl Registry {
    /// Create a registry writing every channel to stdout with
    /// [`DEFAULT_FLAGS`].
    pub fn new() -> Self {
        Self::with_destination(|| Box::new(io::stdout()))
    }

    /// Create a registry whose default sinks write to writers produced by
    /// `destination`. The factory is called once per channel on every
    /// [`configure`](Self::configure).
    pub fn with_destination<F>(destination: F) -> Self
    where
        F: Fn() -> Box<dyn Write + Send> + Send + Sync + 'static,
    {
        let registry = Self {
            channels: Mutex::new(Channels::empty(DEFAULT_FLAGS, None)),
            verbose: AtomicBool::new(false),
            destination: Arc::new(destination),
        };
        registry.configure(DEFAULT_FLAGS);
        registry
    }

    /// Create a registry with every channel silenced.
    pub fn silent() -> Self {
        let registry = Self::new();
        registry.reset();
        registry
    }

    /// Rebuild all four channels, each with one default-destination sink
    /// rendering with `flags`. Previously appended sinks are dropped.
    pub fn configure(&self, flags: Flags) {
        {
            let mut channels = self.channels.lock();
            let mut rebuilt = Channels::empty(flags, channels.observer.clone());
            for severity in Severity::ALL {
                let sink = TextSink::new((self.destination)(), severity.prefix(), flags);
                rebuilt.writer(severity).append(sink);
            }
            *channels = rebuilt;
        }
        // Subscribers may log back into this registry; the lock must be free.
        tracing::debug!(%flags, "log channels reconfigured");
    }

    /// Replace all four channels with empty writers, silencing all output.
    pub fn reset(&self) {
        let mut channels = self.channels.lock();
        let silenced = Channels::empty(channels.flags, channels.observer.clone());
        *channels = silenced;
        drop(channels);
        tracing::debug!("log channels reset");
    }

    /// Flags passed to the last [`configure`](Self::configure).
    pub fn flags(&self) -> Flags {
        self.channels.lock().flags
    }

    /// Number of sinks currently bound to `severity`.
    pub fn sink_count(&self, severity: Severity) -> usize {
        self.channels.lock().writers[severity.index()].len()
    }

    /// Append `path` as an extra destination on every channel.
    ///
    /// The file is created if missing and appended to, never truncated. Lines
    /// use [`FILE_FLAGS`] regardless of the current configuration. If the
    /// file cannot be opened no channel is modified.
    pub fn append_file_destination(&self, path: impl AsRef<Path>) -> Result<()> {
        self.append_file_destination_with(path, FILE_FLAGS)
    }

    /// Like [`append_file_destination`](Self::append_file_destination) with
    /// explicit annotation flags.
    pub fn append_file_destination_with(&self, path: impl AsRef<Path>, flags: Flags) -> Result<()> {
        let path = path.as_ref();
        let file = open_append(path)?;
        self.append_writer_with(file, flags);
        tracing::debug!(path = %path.display(), "log file destination appended");
        Ok(())
    }

    /// Append an already-open file as an extra destination on every channel,
    /// using [`FILE_FLAGS`].
    pub fn append_descriptor(&self, file: File) {
        self.append_writer_with(file, FILE_FLAGS);
    }

    /// Append any writer as an extra destination on every channel, using
    /// [`FILE_FLAGS`]. The four channels share the writer.
    pub fn append_writer<W: Write + Send + 'static>(&self, writer: W) {
        self.append_writer_with(writer, FILE_FLAGS);
    }

    /// Append a shared writer to every channel with explicit flags.
    pub fn append_writer_with<W: Write + Send + 'static>(&self, writer: W, flags: Flags) {
        let shared = SharedWriter::new(writer);
        let mut channels = self.channels.lock();
        for severity in Severity::ALL {
            let sink = TextSink::new(shared.clone(), severity.prefix(), flags);
            channels.writer(severity).append(sink);
        }
    }

    /// Append one custom sink to a single channel.
    pub fn append(&self, severity: Severity, sink: impl Sink + 'static) {
        self.channels.lock().writer(severity).append(sink);
    }

    /// Install an observer notified of every failed sink write. The observer
    /// survives [`configure`](Self::configure) and [`reset`](Self::reset).
    pub fn set_observer(&self, observer: Arc<dyn SinkErrorObserver>) {
        self.install_observer(Some(observer));
    }

    /// Remove the sink failure observer.
    pub fn clear_observer(&self) {
        self.install_observer(None);
    }

    fn install_observer(&self, observer: Option<Arc<dyn SinkErrorObserver>>) {
        let mut channels = self.channels.lock();
        for writer in channels.writers.iter_mut() {
            writer.set_observer(observer.clone());
        }
        channels.observer = observer;
    }

    /// Enable or disable the debug channel.
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Whether debug lines are emitted.
    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Write `line` to the channel for `severity`, bypassing the verbose
    /// gate. `depth` counts the frames above this call.
    #[track_caller]
    pub fn emit(&self, severity: Severity, depth: usize, line: &str) {
        let site = Location::caller();
        let mut channels = self.channels.lock();
        // FanOut::output never fails.
        let _ = channels.writer(severity).output(depth, site, line);
    }

    /// Log at info level.
    ///
    /// Takes a single value. To log several values as one line, format them
    /// together, e.g. `registry.info_fmt(format_args!("{} {}", a, b))` or
    /// `info!(in registry; "{} {}", a, b)`.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, CALLER_DEPTH, &message.to_string());
    }

    /// Log a formatted message at info level.
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, CALLER_DEPTH, &fmt::format(args));
    }

    /// Log at debug level if verbose.
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        if self.verbose() {
            self.emit(Severity::Debug, CALLER_DEPTH, &message.to_string());
        }
    }

    /// Log a formatted message at debug level if verbose.
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        if self.verbose() {
            self.emit(Severity::Debug, CALLER_DEPTH, &fmt::format(args));
        }
    }

    /// Log at warning level. Like [`info`](Self::info), one value per call;
    /// use [`warning_fmt`](Self::warning_fmt) to join several.
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(Severity::Warning, CALLER_DEPTH, &message.to_string());
    }

    /// Log a formatted message at warning level.
    #[track_caller]
    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warning, CALLER_DEPTH, &fmt::format(args));
    }

    /// Log to the fatal channel, then exit the process with
    /// [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.emit(Severity::Fatal, CALLER_DEPTH, &message.to_string());
        process::exit(FATAL_EXIT_CODE)
    }

    /// Log a formatted message to the fatal channel, then exit the process
    /// with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::Fatal, CALLER_DEPTH, &fmt::format(args));
        process::exit(FATAL_EXIT_CODE)
    }

    /// Log to the info channel with a trailing newline.
    #[track_caller]
    pub fn println(&self, args: fmt::Arguments<'_>) {
        let mut line = fmt::format(args);
        line.push('\n');
        self.emit(Severity::Info, CALLER_DEPTH, &line);
    }

    /// Log a formatted message to the info channel.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, CALLER_DEPTH, &fmt::format(args));
    }

    /// Log to the info channel on behalf of a wrapper `up` frames above the
    /// direct caller.
    ///
    /// `up` is only added to the depth handed to sinks; the built-in
    /// [`TextSink`] ignores it. The reported location comes from
    /// `#[track_caller]`, so every wrapper between the original call site and
    /// this method must itself be `#[track_caller]`. A plain wrapper reports
    /// its own line whatever `up` is.
    #[track_caller]
    pub fn printf_level(&self, up: usize, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, CALLER_DEPTH + up, &fmt::format(args));
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.lock();
        f.debug_struct("Registry")
            .field("writers", &channels.writers)
            .field("flags", &channels.flags)
            .field("verbose", &self.verbose())
            .finish()
    }
}

/// Open `path` for appending, creating it owner-read/write if missing.
pub(crate) fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
