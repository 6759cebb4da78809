//! Relevance classification for stack-trace frames.
//!
//! Failure reports read better when frames from the user's own code stand
//! out from framework internals, reflection plumbing and the standard
//! library. `framesift` provides the composition primitive for that
//! decision: a [`StackTraceClassifier`] looks at one [`StackFrame`] and
//! answers a [`StackTraceRelevance`] or defers, and a
//! [`CompositeClassifier`] tries an ordered list of classifiers until one
//! answers.
//!
//! ```
//! use framesift::{from_fn, CompositeClassifier, Constant, StackFrame};
//! use framesift::{StackTraceClassifier, StackTraceRelevance};
//!
//! let chain = CompositeClassifier::builder()
//!     .with(from_fn("gradle", |frame: &StackFrame| {
//!         frame
//!             .declaring_type()
//!             .starts_with("org.gradle.")
//!             .then_some(StackTraceRelevance::Internal)
//!     }))
//!     .with(Constant::USER_CODE)
//!     .build();
//!
//! let frame: StackFrame = "org.gradle.api.internal.AbstractTask.execute(AbstractTask.java:95)"
//!     .parse()
//!     .unwrap();
//! assert_eq!(chain.classify(&frame), Some(StackTraceRelevance::Internal));
//! ```

pub mod chain;
pub mod classifier;
pub mod config;
pub mod error;
pub mod frame;
pub mod relevance;
pub mod testkit;

// Re-export commonly used types
pub use crate::chain::{CompositeClassifier, CompositeClassifierBuilder};
pub use crate::classifier::{from_fn, Constant, FnClassifier, StackTraceClassifier};
pub use crate::config::ChainOptions;
pub use crate::error::{ConfigError, Error, FrameParseError, Result, UnknownRelevance};
pub use crate::frame::StackFrame;
pub use crate::relevance::StackTraceRelevance;
