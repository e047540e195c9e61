//! The sink abstraction.
//!
//! A sink records one already-formatted line. Sinks are owned by a
//! [`FanOut`](crate::fanout::FanOut) once appended and are only ever called
//! with the registry lock held, so implementations need `Send` but not `Sync`.

use multilog_types::Severity;
use std::io;
use std::panic::Location;

/// Source location of the code that issued a log call.
pub type CallSite = &'static Location<'static>;

/// A destination capable of recording one formatted line.
#[cfg_attr(test, mockall::automock)]
pub trait Sink: Send {
    /// Render and write one line.
    ///
    /// `depth` counts the logging frames between this sink and the code that
    /// issued the call; wrappers increment it on the way down. `site` is the
    /// location of that original caller.
    fn output(&mut self, depth: usize, site: CallSite, line: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn output(&mut self, depth: usize, site: CallSite, line: &str) -> io::Result<()> {
        (**self).output(depth, site, line)
    }
}

/// Receives sink failures that the fan-out layer would otherwise swallow.
///
/// Observers are invoked while the registry lock is held and must not log
/// through the same registry.
pub trait SinkErrorObserver: Send + Sync {
    /// Called once per failed sink write. `index` is the sink's position in
    /// its channel.
    fn sink_failed(&self, channel: Option<Severity>, index: usize, error: &io::Error);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn output(&mut self, _depth: usize, _site: CallSite, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        assert!(sink.output(0, Location::caller(), "ignored").is_ok());
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut mock = MockSink::new();
        mock.expect_output()
            .times(1)
            .returning(|depth, _, line| {
                assert_eq!(depth, 5);
                assert_eq!(line, "boxed");
                Ok(())
            });

        let mut boxed: Box<dyn Sink> = Box::new(mock);
        boxed.output(5, Location::caller(), "boxed").unwrap();
    }
}
