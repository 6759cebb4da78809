//! Options attached to a classification chain.
//!
//! Options are parsed from TOML text supplied by the caller, for example a
//! table embedded in the host application's own configuration:
//!
//! ```toml
//! label = "gradle-internal"
//! trace_decisions = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Diagnostics options for a [`CompositeClassifier`](crate::CompositeClassifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainOptions {
    /// Name reported in trace events emitted by the chain
    #[serde(default = "default_label")]
    pub label: String,

    /// Emit a trace event for every decided frame (default: false)
    #[serde(default = "default_trace_decisions")]
    pub trace_decisions: bool,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            label: default_label(),
            trace_decisions: default_trace_decisions(),
        }
    }
}

fn default_label() -> String {
    "default".to_string()
}

fn default_trace_decisions() -> bool {
    false
}

impl ChainOptions {
    /// Parse and validate options from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let options = toml::from_str::<ChainOptions>(contents)?;
        options.validate()?;
        log::debug!(
            "Loaded chain options: label={}, trace_decisions={}",
            options.label,
            options.trace_decisions
        );
        Ok(options)
    }

    /// Check field values that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::invalid("label", "must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_trace_decisions(mut self, enabled: bool) -> Self {
        self.trace_decisions = enabled;
        self
    }
}
