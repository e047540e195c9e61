//! Test doubles shared by the unit tests.

use crate::sink::{CallSite, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Collects `"<name>:<line>"` entries from any number of named sinks.
#[derive(Clone, Default)]
pub(crate) struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub(crate) fn named(&self, name: &str) -> RecordingSink {
        RecordingSink {
            name: name.to_string(),
            entries: self.0.clone(),
        }
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

pub(crate) struct RecordingSink {
    name: String,
    entries: Arc<Mutex<Vec<String>>>,
}

impl Sink for RecordingSink {
    fn output(&mut self, _depth: usize, _site: CallSite, line: &str) -> io::Result<()> {
        self.entries.lock().push(format!("{}:{}", self.name, line));
        Ok(())
    }
}

pub(crate) struct FailingSink;

impl Sink for FailingSink {
    fn output(&mut self, _depth: usize, _site: CallSite, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// In-memory destination that can be cloned into several writers.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
