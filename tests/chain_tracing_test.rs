//! Tests for the trace events emitted by chains with `trace_decisions`.

use framesift::testkit::{Abstain, PrefixClassifier};
use framesift::{ChainOptions, CompositeClassifier, StackFrame, StackTraceClassifier, StackTraceRelevance};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// In-memory sink for formatted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a TRACE-level subscriber writing into the returned buffer.
fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

fn jdk_chain(trace_decisions: bool) -> CompositeClassifier {
    CompositeClassifier::builder()
        .options(
            ChainOptions::default()
                .with_label("jdk-chain")
                .with_trace_decisions(trace_decisions),
        )
        .with(Abstain)
        .with(PrefixClassifier::new(StackTraceRelevance::System, ["java."]))
        .build()
}

#[test]
fn test_decided_frame_emits_classifier_and_index() {
    let chain = jdk_chain(true);
    let frame = StackFrame::new("java.lang.Thread", "run")
        .with_file("Thread.java")
        .with_line(833);

    let logs = capture(|| {
        assert_eq!(chain.classify(&frame), Some(StackTraceRelevance::System));
    });

    assert!(logs.contains("frame classified"), "logs: {}", logs);
    assert!(logs.contains("chain=jdk-chain"), "logs: {}", logs);
    assert!(logs.contains("classifier="), "logs: {}", logs);
    assert!(logs.contains("PrefixClassifier"), "logs: {}", logs);
    assert!(logs.contains("index=1"), "logs: {}", logs);
    assert!(logs.contains("relevance=system"), "logs: {}", logs);
    assert!(logs.contains("java.lang.Thread.run(Thread.java:833)"), "logs: {}", logs);
}

#[test]
fn test_undecided_frame_emits_no_match_event() {
    let chain = jdk_chain(true);
    let frame = StackFrame::new("com.acme.Main", "main");

    let logs = capture(|| {
        assert_eq!(chain.classify(&frame), None);
    });

    assert!(logs.contains("no classifier matched"), "logs: {}", logs);
    assert!(logs.contains("com.acme.Main.main(Unknown Source)"), "logs: {}", logs);
    assert!(!logs.contains("frame classified"), "logs: {}", logs);
}

#[test]
fn test_no_events_when_tracing_disabled() {
    let chain = jdk_chain(false);
    let decided = StackFrame::new("java.lang.Thread", "run");
    let undecided = StackFrame::new("com.acme.Main", "main");

    let logs = capture(|| {
        chain.classify(&decided);
        chain.classify(&undecided);
    });

    assert_eq!(logs, "");
}
