//! Fan-out writer.
//!
//! Replicates one write across an ordered list of sinks. A failing sink never
//! stops the batch and never fails the caller; failures only reach the
//! optional [`SinkErrorObserver`].

use crate::sink::{CallSite, Sink, SinkErrorObserver};
use multilog_types::Severity;
use std::fmt;
use std::io;
use std::sync::Arc;

/// An ordered set of sinks written as one.
#[derive(Default)]
pub struct FanOut {
    sinks: Vec<Box<dyn Sink>>,
    channel: Option<Severity>,
    observer: Option<Arc<dyn SinkErrorObserver>>,
}

impl FanOut {
    /// Create an empty fan-out writer. Writes to it are silent no-ops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fan-out writer holding a single sink.
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        let mut fanout = Self::new();
        fanout.append(sink);
        fanout
    }

    /// Add a sink to the end of the list.
    pub fn append(&mut self, sink: impl Sink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Number of sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether writes are no-ops.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Tag reported to the observer with each failure.
    pub fn set_channel(&mut self, channel: Severity) {
        self.channel = Some(channel);
    }

    /// Install or remove the failure observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn SinkErrorObserver>>) {
        self.observer = observer;
    }
}

impl Sink for FanOut {
    /// Write to every sink in insertion order. Always succeeds.
    fn output(&mut self, depth: usize, site: CallSite, line: &str) -> io::Result<()> {
        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(error) = sink.output(depth + 1, site, line) {
                if let Some(observer) = &self.observer {
                    observer.sink_failed(self.channel, index, &error);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("sinks", &self.sinks.len())
            .field("channel", &self.channel)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSink;
    use crate::testing::{Recorder, FailingSink};
    use mockall::predicate::{always, eq};
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use std::panic::Location;

    #[derive(Default)]
    struct Failures(Mutex<Vec<(Option<Severity>, usize)>>);

    impl SinkErrorObserver for Failures {
        fn sink_failed(&self, channel: Option<Severity>, index: usize, _error: &io::Error) {
            self.0.lock().push((channel, index));
        }
    }

    #[test]
    fn test_empty_is_noop() {
        let mut fanout = FanOut::new();
        assert!(fanout.is_empty());
        assert!(fanout.output(2, Location::caller(), "nothing").is_ok());
    }

    #[test]
    fn test_writes_in_append_order() {
        let recorder = Recorder::default();
        let mut fanout = FanOut::new();
        for name in ["first", "second", "third"] {
            fanout.append(recorder.named(name));
        }

        fanout.output(2, Location::caller(), "line").unwrap();

        assert_eq!(
            recorder.entries(),
            vec!["first:line", "second:line", "third:line"]
        );
    }

    #[test]
    fn test_depth_is_incremented() {
        let mut mock = MockSink::new();
        mock.expect_output()
            .with(eq(3), always(), eq("hello"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut fanout = FanOut::with_sink(mock);
        fanout.output(2, Location::caller(), "hello").unwrap();
    }

    #[test]
    fn test_nested_fanout_adds_one_level_each() {
        let mut mock = MockSink::new();
        mock.expect_output()
            .with(eq(4), always(), always())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut outer = FanOut::with_sink(FanOut::with_sink(mock));
        outer.output(2, Location::caller(), "nested").unwrap();
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let recorder = Recorder::default();
        let failures = Arc::new(Failures::default());

        let mut fanout = FanOut::new();
        fanout.set_channel(Severity::Warning);
        fanout.set_observer(Some(failures.clone()));
        fanout.append(recorder.named("a"));
        fanout.append(FailingSink);
        fanout.append(recorder.named("c"));

        assert!(fanout.output(2, Location::caller(), "x").is_ok());

        assert_eq!(recorder.entries(), vec!["a:x", "c:x"]);
        assert_eq!(*failures.0.lock(), vec![(Some(Severity::Warning), 1)]);
    }

    #[test]
    fn test_failure_without_observer_is_swallowed() {
        let mut fanout = FanOut::with_sink(FailingSink);
        assert!(fanout.output(2, Location::caller(), "x").is_ok());
    }

    proptest! {
        #[test]
        fn prop_order_matches_appends(names in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
            let recorder = Recorder::default();
            let mut fanout = FanOut::new();
            for name in &names {
                fanout.append(recorder.named(name));
            }

            fanout.output(2, Location::caller(), "m").unwrap();

            let expected: Vec<String> = names.iter().map(|n| format!("{}:m", n)).collect();
            prop_assert_eq!(recorder.entries(), expected);
        }
    }
}
