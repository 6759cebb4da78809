//! Error types for framesift
//!
//! Classification itself never fails: a classifier that cannot decide
//! answers `None`. These errors cover the textual surfaces around the
//! chain (frame text, verdict names and chain options).

use thiserror::Error;

/// Main error type for framesift operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed textual stack frame
    #[error(transparent)]
    FrameParse(#[from] FrameParseError),

    /// Unrecognised verdict name
    #[error(transparent)]
    Relevance(#[from] UnknownRelevance),

    /// Invalid chain options
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing `Type.method(File:line)` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameParseError {
    #[error("empty stack frame")]
    Empty,

    #[error("stack frame '{0}' has no location in parentheses")]
    MissingLocation(String),

    #[error("stack frame '{0}' has no '.' between type and method")]
    MissingMethod(String),

    #[error("stack frame '{0}' has a malformed class loader or module prefix")]
    MalformedPrefix(String),

    #[error("invalid line number '{line}' in stack frame '{frame}'")]
    InvalidLine { frame: String, line: String },
}

/// Error returned when a verdict name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stack trace relevance '{0}'")]
pub struct UnknownRelevance(pub String);

/// Errors produced while reading chain options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse chain options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid chain option '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// Create a validation error for a specific field
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
