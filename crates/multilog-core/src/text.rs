//! Plain-text line renderer.
//!
//! [`TextSink`] is the default destination behind every channel. It writes
//! `<prefix><date> <time> <file>:<line>: message` with the annotations chosen
//! by [`Flags`].

use crate::sink::{CallSite, Sink};
use chrono::{Local, NaiveDateTime, Utc};
use multilog_types::Flags;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Arc;

/// Sink rendering lines as text onto a writer.
pub struct TextSink<W> {
    writer: W,
    prefix: String,
    flags: Flags,
    buf: String,
}

impl<W: Write + Send> TextSink<W> {
    /// Create a sink writing to `writer` with the given line prefix.
    pub fn new(writer: W, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            writer,
            prefix: prefix.into(),
            flags,
            buf: String::new(),
        }
    }

    /// Annotation flags in use.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Line prefix in use.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for TextSink<W> {
    fn output(&mut self, _depth: usize, site: CallSite, line: &str) -> io::Result<()> {
        let now = if !self.flags.has_timestamp() {
            NaiveDateTime::default()
        } else if self.flags.contains(Flags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        };

        self.buf.clear();
        format_line(&mut self.buf, &self.prefix, self.flags, now, site, line);
        self.writer.write_all(self.buf.as_bytes())?;
        self.writer.flush()
    }
}

/// Render one complete line, including the trailing newline, into `buf`.
pub fn format_line(
    buf: &mut String,
    prefix: &str,
    flags: Flags,
    now: NaiveDateTime,
    site: CallSite,
    message: &str,
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
    }
    if flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
        let _ = write!(buf, "{}", now.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", now.format("%.6f"));
        }
        buf.push(' ');
    }

    if flags.has_file() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(site.file())
        } else {
            site.file()
        };
        let _ = write!(buf, "{}:{}: ", file, site.line());
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    buf.push_str(message);
    if !message.ends_with('\n') {
        buf.push('\n');
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}

/// Writer handle shared by several sinks, e.g. one file behind all four
/// channels.
pub struct SharedWriter<W>(Arc<Mutex<W>>);

impl<W> SharedWriter<W> {
    /// Wrap `writer` so it can be cloned into several sinks.
    pub fn new(writer: W) -> Self {
        Self(Arc::new(Mutex::new(writer)))
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::panic::Location;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2009, 1, 23)
            .unwrap()
            .and_hms_micro_opt(1, 23, 23, 123123)
            .unwrap()
    }

    fn render(flags: Flags, message: &str) -> (String, CallSite) {
        let site = Location::caller();
        let mut buf = String::new();
        format_line(&mut buf, "I:", flags, fixed_time(), site, message);
        (buf, site)
    }

    #[test]
    fn test_date_and_time() {
        let (line, _) = render(Flags::STD, "message");
        assert_eq!(line, "I:2009/01/23 01:23:23 message\n");
    }

    #[test]
    fn test_microseconds_imply_time() {
        let (line, _) = render(Flags::MICROSECONDS, "message");
        assert_eq!(line, "I:01:23:23.123123 message\n");
    }

    #[test]
    fn test_short_file_only() {
        let (line, site) = render(Flags::SHORT_FILE, "hello");
        assert_eq!(line, format!("I:text.rs:{}: hello\n", site.line()));
    }

    #[test]
    fn test_long_file() {
        let (line, site) = render(Flags::LONG_FILE, "hello");
        assert_eq!(line, format!("I:{}:{}: hello\n", site.file(), site.line()));
    }

    #[test]
    fn test_short_file_overrides_long() {
        let (line, site) = render(Flags::LONG_FILE | Flags::SHORT_FILE, "hello");
        assert_eq!(line, format!("I:text.rs:{}: hello\n", site.line()));
    }

    #[test]
    fn test_msg_prefix_moves_prefix() {
        let (line, _) = render(Flags::DATE | Flags::MSG_PREFIX, "boot");
        assert_eq!(line, "2009/01/23 I:boot\n");
    }

    #[test]
    fn test_newline_not_doubled() {
        let (line, _) = render(Flags::empty(), "already\n");
        assert_eq!(line, "I:already\n");
    }

    #[test]
    fn test_short_file_handles_windows_separators() {
        assert_eq!(short_file("src\\lib.rs"), "lib.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }

    #[test]
    fn test_sink_writes_whole_line() {
        let mut sink = TextSink::new(Vec::new(), "W:", Flags::empty());
        sink.output(2, Location::caller(), "disk almost full").unwrap();
        sink.output(2, Location::caller(), "disk full").unwrap();
        assert_eq!(sink.prefix(), "W:");
        assert!(sink.flags().is_empty());
        assert_eq!(sink.get_ref().len(), 31);
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "W:disk almost full\nW:disk full\n"
        );
    }

    #[test]
    fn test_shared_writer_interleaves_sinks() {
        let shared = SharedWriter::new(Vec::new());
        let mut info = TextSink::new(shared.clone(), "I:", Flags::empty());
        let mut warn = TextSink::new(shared.clone(), "W:", Flags::empty());

        info.output(2, Location::caller(), "one").unwrap();
        warn.output(2, Location::caller(), "two").unwrap();

        let bytes = shared.0.lock().clone();
        assert_eq!(String::from_utf8(bytes).unwrap(), "I:one\nW:two\n");
    }
}
