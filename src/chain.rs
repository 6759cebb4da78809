//! First-match-wins composition of frame classifiers.
//!
//! A [`CompositeClassifier`] asks each of its classifiers in construction
//! order and returns the first definite verdict. Position is the only
//! priority: callers put the most specific classifiers first. The chain is
//! itself a [`StackTraceClassifier`], so chains nest.
//!
//! ```
//! use framesift::{from_fn, CompositeClassifier, Constant, StackFrame, StackTraceRelevance};
//! use framesift::StackTraceClassifier;
//!
//! let chain = CompositeClassifier::builder()
//!     .with(from_fn("jdk", |frame: &StackFrame| {
//!         frame.declaring_type().starts_with("java.").then_some(StackTraceRelevance::System)
//!     }))
//!     .with(Constant::USER_CODE)
//!     .build();
//!
//! let jdk = StackFrame::new("java.lang.Thread", "run");
//! let app = StackFrame::new("com.acme.Main", "main");
//! assert_eq!(chain.classify(&jdk), Some(StackTraceRelevance::System));
//! assert_eq!(chain.classify(&app), Some(StackTraceRelevance::UserCode));
//! ```

use crate::classifier::StackTraceClassifier;
use crate::config::ChainOptions;
use crate::frame::StackFrame;
use crate::relevance::StackTraceRelevance;
use std::fmt;

/// Ordered, immutable chain of classifiers.
pub struct CompositeClassifier {
    classifiers: Vec<Box<dyn StackTraceClassifier>>,
    options: ChainOptions,
}

impl CompositeClassifier {
    /// Build a chain from classifiers in priority order.
    ///
    /// The classifiers are moved into storage owned by the chain, so the
    /// caller's collection cannot change the chain afterwards. An empty
    /// chain is valid and has no opinion on any frame.
    pub fn new<I>(classifiers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn StackTraceClassifier>>,
    {
        Self {
            classifiers: classifiers.into_iter().collect(),
            options: ChainOptions::default(),
        }
    }

    pub fn builder() -> CompositeClassifierBuilder {
        CompositeClassifierBuilder::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Classify every frame of a trace, keeping one entry per frame.
    pub fn classify_all(&self, frames: &[StackFrame]) -> Vec<Option<StackTraceRelevance>> {
        frames.iter().map(|frame| self.classify(frame)).collect()
    }

    /// Index of the first frame classified as user code.
    pub fn first_user_frame(&self, frames: &[StackFrame]) -> Option<usize> {
        frames
            .iter()
            .position(|frame| self.classify(frame).is_some_and(|r| r.is_user_code()))
    }
}

impl StackTraceClassifier for CompositeClassifier {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        for (index, classifier) in self.classifiers.iter().enumerate() {
            if let Some(relevance) = classifier.classify(frame) {
                if self.options.trace_decisions {
                    tracing::trace!(
                        chain = %self.options.label,
                        classifier = classifier.name(),
                        index,
                        relevance = %relevance,
                        frame = %frame,
                        "frame classified"
                    );
                }
                return Some(relevance);
            }
        }

        if self.options.trace_decisions {
            tracing::trace!(chain = %self.options.label, frame = %frame, "no classifier matched");
        }
        None
    }

    fn name(&self) -> &str {
        &self.options.label
    }
}

impl FromIterator<Box<dyn StackTraceClassifier>> for CompositeClassifier {
    fn from_iter<I: IntoIterator<Item = Box<dyn StackTraceClassifier>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Debug for CompositeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.classifiers.iter().map(|c| c.name()).collect();
        f.debug_struct("CompositeClassifier")
            .field("classifiers", &names)
            .field("options", &self.options)
            .finish()
    }
}

/// Incremental construction of a [`CompositeClassifier`].
#[derive(Default)]
pub struct CompositeClassifierBuilder {
    classifiers: Vec<Box<dyn StackTraceClassifier>>,
    options: ChainOptions,
}

impl CompositeClassifierBuilder {
    /// Append a classifier after those already added.
    #[must_use]
    pub fn with<C>(mut self, classifier: C) -> Self
    where
        C: StackTraceClassifier + 'static,
    {
        self.classifiers.push(Box::new(classifier));
        self
    }

    #[must_use]
    pub fn options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> CompositeClassifier {
        CompositeClassifier::new(self.classifiers).with_options(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{from_fn, Constant};
    use crate::testkit::{Abstain, Counting, Panicking};
    use std::sync::Arc;

    fn frame() -> StackFrame {
        StackFrame::new("com.acme.Service", "run")
            .with_file("Service.java")
            .with_line(10)
    }

    #[test]
    fn test_empty_chain_has_no_opinion() {
        let chain = CompositeClassifier::new(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.classify(&frame()), None);
    }

    #[test]
    fn test_abstaining_classifiers_fall_through() {
        let chain = CompositeClassifier::builder()
            .with(Abstain)
            .with(Abstain)
            .build();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.classify(&frame()), None);
    }

    #[test]
    fn test_first_definite_verdict_wins() {
        let chain = CompositeClassifier::builder()
            .with(Abstain)
            .with(Constant(StackTraceRelevance::Runtime))
            .with(Constant(StackTraceRelevance::UserCode))
            .build();
        assert_eq!(chain.classify(&frame()), Some(StackTraceRelevance::Runtime));
    }

    #[test]
    fn test_order_decides_between_conflicting_classifiers() {
        let internal_first = CompositeClassifier::builder()
            .with(Constant(StackTraceRelevance::Internal))
            .with(Constant(StackTraceRelevance::UserCode))
            .build();
        let user_first = CompositeClassifier::builder()
            .with(Constant(StackTraceRelevance::UserCode))
            .with(Constant(StackTraceRelevance::Internal))
            .build();

        assert_eq!(
            internal_first.classify(&frame()),
            Some(StackTraceRelevance::Internal)
        );
        assert_eq!(
            user_first.classify(&frame()),
            Some(StackTraceRelevance::UserCode)
        );
    }

    #[test]
    fn test_later_classifiers_not_consulted_after_match() {
        let counter = Arc::new(Counting::new(Abstain));
        let chain = CompositeClassifier::builder()
            .with(Constant(StackTraceRelevance::System))
            .with(Arc::clone(&counter))
            .with(Panicking)
            .build();

        assert_eq!(chain.classify(&frame()), Some(StackTraceRelevance::System));
        assert_eq!(counter.calls(), 0);
    }

    #[test]
    fn test_abstaining_classifier_is_consulted_once_per_frame() {
        let counter = Arc::new(Counting::new(Abstain));
        let chain = CompositeClassifier::builder()
            .with(Arc::clone(&counter))
            .with(Constant::USER_CODE)
            .build();

        chain.classify(&frame());
        chain.classify(&frame());
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    #[should_panic(expected = "classifier failure")]
    fn test_classifier_panic_propagates() {
        let chain = CompositeClassifier::builder()
            .with(Abstain)
            .with(Panicking)
            .with(Constant::USER_CODE)
            .build();
        chain.classify(&frame());
    }

    #[test]
    fn test_duplicates_first_occurrence_wins() {
        let chain = CompositeClassifier::builder()
            .with(Constant(StackTraceRelevance::Internal))
            .with(Constant(StackTraceRelevance::Internal))
            .build();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.classify(&frame()), Some(StackTraceRelevance::Internal));
    }

    #[test]
    fn test_source_collection_is_copied() {
        let mut source: Vec<Box<dyn StackTraceClassifier>> =
            vec![Box::new(Constant(StackTraceRelevance::Runtime))];
        let chain: CompositeClassifier = source.drain(..).collect();
        source.push(Box::new(Constant(StackTraceRelevance::UserCode)));

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.classify(&frame()), Some(StackTraceRelevance::Runtime));
    }

    #[test]
    fn test_nested_chain_is_a_classifier() {
        let inner = CompositeClassifier::builder()
            .with(Abstain)
            .with(from_fn("acme", |frame: &StackFrame| {
                frame
                    .declaring_type()
                    .starts_with("com.acme.")
                    .then_some(StackTraceRelevance::Internal)
            }))
            .build();
        let outer = CompositeClassifier::builder()
            .with(inner)
            .with(Constant::USER_CODE)
            .build();

        assert_eq!(outer.classify(&frame()), Some(StackTraceRelevance::Internal));
        assert_eq!(
            outer.classify(&StackFrame::new("org.app.Main", "main")),
            Some(StackTraceRelevance::UserCode)
        );
    }

    #[test]
    fn test_classify_all_and_first_user_frame() {
        let chain = CompositeClassifier::builder()
            .with(from_fn("jdk", |frame: &StackFrame| {
                frame
                    .declaring_type()
                    .starts_with("java.")
                    .then_some(StackTraceRelevance::System)
            }))
            .build();
        let frames = vec![
            StackFrame::new("java.lang.Thread", "run"),
            StackFrame::new("org.app.Main", "main"),
        ];

        assert_eq!(
            chain.classify_all(&frames),
            vec![Some(StackTraceRelevance::System), None]
        );
        assert_eq!(chain.first_user_frame(&frames), None);

        let with_fallback = CompositeClassifier::builder()
            .with(chain)
            .with(Constant::USER_CODE)
            .build();
        assert_eq!(with_fallback.first_user_frame(&frames), Some(1));
    }

    #[test]
    fn test_options_label_names_chain() {
        let chain = CompositeClassifier::builder()
            .options(ChainOptions::default().with_label("internal").with_trace_decisions(true))
            .with(Constant(StackTraceRelevance::Internal))
            .build();
        assert_eq!(chain.name(), "internal");
        assert!(chain.options().trace_decisions);
        assert_eq!(chain.classify(&frame()), Some(StackTraceRelevance::Internal));
        assert!(format!("{:?}", chain).contains("internal"));
    }

    #[test]
    fn test_chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompositeClassifier>();
    }
}
