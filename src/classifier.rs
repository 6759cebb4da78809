//! The frame classifier capability.
//!
//! A classifier looks at one frame and either gives a definite
//! [`StackTraceRelevance`] or returns `None` to defer to whoever is asked
//! next. Concrete classifiers (framework internals, test libraries, runtime
//! plumbing) live with the code that knows those frameworks; this module
//! only defines the contract and a few adapters.

use crate::frame::StackFrame;
use crate::relevance::StackTraceRelevance;
use std::sync::Arc;

/// Maps a stack frame to a relevance verdict, or defers.
///
/// Implementations must be pure functions of the frame and their own fixed
/// configuration, and must answer `None` rather than fail when they do not
/// recognise a frame.
pub trait StackTraceClassifier: Send + Sync {
    /// Classify a frame, returning `None` for "no opinion".
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance>;

    /// Name used when reporting which classifier decided a frame
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T: StackTraceClassifier + ?Sized> StackTraceClassifier for &T {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        (**self).classify(frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: StackTraceClassifier + ?Sized> StackTraceClassifier for Box<T> {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        (**self).classify(frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: StackTraceClassifier + ?Sized> StackTraceClassifier for Arc<T> {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        (**self).classify(frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Classifier that gives the same verdict for every frame.
///
/// Placed last in a chain, [`Constant::USER_CODE`] turns "nobody recognised
/// this frame" into "treat it as user code".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub StackTraceRelevance);

impl Constant {
    pub const USER_CODE: Constant = Constant(StackTraceRelevance::UserCode);
}

impl StackTraceClassifier for Constant {
    fn classify(&self, _frame: &StackFrame) -> Option<StackTraceRelevance> {
        Some(self.0)
    }

    fn name(&self) -> &str {
        self.0.as_str()
    }
}

/// Classifier backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnClassifier<F> {
    name: &'static str,
    f: F,
}

impl<F> std::fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnClassifier")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> StackTraceClassifier for FnClassifier<F>
where
    F: Fn(&StackFrame) -> Option<StackTraceRelevance> + Send + Sync,
{
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        (self.f)(frame)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Wrap a closure as a named classifier.
///
/// ```
/// use framesift::{from_fn, StackFrame, StackTraceClassifier, StackTraceRelevance};
///
/// let jdk = from_fn("jdk", |frame: &StackFrame| {
///     frame
///         .declaring_type()
///         .starts_with("java.")
///         .then_some(StackTraceRelevance::System)
/// });
/// let frame = StackFrame::new("java.util.ArrayList", "get");
/// assert_eq!(jdk.classify(&frame), Some(StackTraceRelevance::System));
/// ```
pub fn from_fn<F>(name: &'static str, f: F) -> FnClassifier<F>
where
    F: Fn(&StackFrame) -> Option<StackTraceRelevance> + Send + Sync,
{
    FnClassifier { name, f }
}
