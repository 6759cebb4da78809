//! Classifier test doubles.

use crate::classifier::StackTraceClassifier;
use crate::frame::StackFrame;
use crate::relevance::StackTraceRelevance;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Classifier that never recognises a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Abstain;

impl StackTraceClassifier for Abstain {
    fn classify(&self, _frame: &StackFrame) -> Option<StackTraceRelevance> {
        None
    }

    fn name(&self) -> &str {
        "abstain"
    }
}

/// Classifier that panics when consulted.
///
/// Placed after a classifier that always answers, it proves the chain
/// stopped early. Placed where it is reached, it proves failures propagate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panicking;

impl StackTraceClassifier for Panicking {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        panic!("classifier failure on {}", frame)
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// Wraps a classifier and counts how often it is consulted.
#[derive(Debug, Default)]
pub struct Counting<C> {
    inner: C,
    calls: AtomicUsize,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<C: StackTraceClassifier> StackTraceClassifier for Counting<C> {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.classify(frame)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Answers a fixed verdict for frames whose declaring type starts with one
/// of the configured prefixes.
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    prefixes: Vec<String>,
    relevance: StackTraceRelevance,
}

impl PrefixClassifier {
    pub fn new<I, S>(relevance: StackTraceRelevance, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            relevance,
        }
    }
}

impl StackTraceClassifier for PrefixClassifier {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        self.prefixes
            .iter()
            .any(|prefix| frame.declaring_type().starts_with(prefix.as_str()))
            .then_some(self.relevance)
    }
}
