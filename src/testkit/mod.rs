//! Test doubles and helpers for code that composes classifier chains.
//!
//! Chains are only as interesting as the classifiers inside them, so this
//! module provides small classifiers with observable behaviour:
//!
//! - **[`Abstain`]**: never has an opinion
//! - **[`Panicking`]**: fails loudly if it is ever consulted
//! - **[`Counting`]**: wraps another classifier and counts calls
//! - **[`PrefixClassifier`]**: answers a verdict for declaring types with a
//!   given prefix
//!
//! # Quick Start
//!
//! ```rust
//! use framesift::testkit::{Abstain, Panicking};
//! use framesift::{CompositeClassifier, Constant, StackFrame, StackTraceClassifier};
//!
//! let chain = CompositeClassifier::builder()
//!     .with(Abstain)
//!     .with(Constant::USER_CODE)
//!     .with(Panicking)
//!     .build();
//!
//! // Panicking is never reached because Constant answers first.
//! assert!(chain.classify(&StackFrame::new("a.B", "c")).is_some());
//! ```

pub mod doubles;
pub mod helpers;

pub use doubles::{Abstain, Counting, Panicking, PrefixClassifier};
pub use helpers::{frame, sample_trace};
