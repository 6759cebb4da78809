//! Relevance verdicts assigned to stack frames.

use crate::error::UnknownRelevance;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a frame should be treated by a failure reporter.
///
/// The chain never inspects the variant it returns; the vocabulary belongs
/// to the classifiers that produce it and the reporters that consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackTraceRelevance {
    /// Code written by the user whose build or program failed
    UserCode,
    /// Internals of the tool or framework hosting the user code
    Internal,
    /// Dynamic dispatch, reflection and other runtime plumbing
    Runtime,
    /// Standard library and platform frames
    System,
}

impl StackTraceRelevance {
    /// Every verdict, in declaration order.
    pub const ALL: [StackTraceRelevance; 4] = [
        StackTraceRelevance::UserCode,
        StackTraceRelevance::Internal,
        StackTraceRelevance::Runtime,
        StackTraceRelevance::System,
    ];

    /// Stable snake_case name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserCode => "user_code",
            Self::Internal => "internal",
            Self::Runtime => "runtime",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn is_user_code(&self) -> bool {
        matches!(self, Self::UserCode)
    }
}

impl fmt::Display for StackTraceRelevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackTraceRelevance {
    type Err = UnknownRelevance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|relevance| relevance.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRelevance(s.to_string()))
    }
}
