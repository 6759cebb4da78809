//! Stack frame model and its textual form.
//!
//! A frame is rendered and parsed as `Type.method(File:line)`, the form
//! used by JVM-style stack traces:
//!
//! - `com.acme.Service.run(Service.java:42)`
//! - `com.acme.Service.run(Service.java)` when the line is unknown
//! - `com.acme.Service.run(Unknown Source)` when the file is unknown
//!
//! Parsing also accepts a leading `at ` and `(Native Method)`, and the
//! class-loader and module prefix that newer JVMs print in front of the
//! type:
//!
//! - `java.base/java.lang.Thread.run(Thread.java:833)` (module)
//! - `app//com.acme.Main.main(Main.java:5)` (class loader, no module)
//! - `loader/mod@1.0/com.acme.Main.main(Main.java:5)` (both)
//!
//! The prefix is kept apart from the declaring type so that classifiers
//! matching on type names see `java.lang.Thread`, not `java.base/...`.

use crate::error::FrameParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UNKNOWN_SOURCE: &str = "Unknown Source";
const NATIVE_METHOD: &str = "Native Method";

static FRAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:at\s+)?(?P<qualified>[^\s()]+)\((?P<location>[^()]*)\)$").unwrap());
static LOCATION_WITH_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<file>.+):(?P<line>-?\d+)$").unwrap());

/// One entry of a captured call stack.
///
/// Frames are immutable once built and are only borrowed by classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_loader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    module: Option<String>,
    declaring_type: String,
    method: String,
    file: Option<String>,
    line: Option<u32>,
}

impl StackFrame {
    pub fn new(declaring_type: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class_loader: None,
            module: None,
            declaring_type: declaring_type.into(),
            method: method.into(),
            file: None,
            line: None,
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_class_loader(mut self, class_loader: impl Into<String>) -> Self {
        self.class_loader = Some(class_loader.into());
        self
    }

    /// Module name, including any `@version` suffix.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn class_loader(&self) -> Option<&str> {
        self.class_loader.as_deref()
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// `Type.method`, the form most classifiers match prefixes against.
    pub fn qualified_method(&self) -> String {
        format!("{}.{}", self.declaring_type, self.method)
    }
}

/// Renders the JVM form. Two cases do not survive a parse back:
/// a line without a file prints as `(Unknown Source)` and drops the line,
/// and a file name ending in `:digits` with no line reads back as file
/// plus line.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.class_loader, &self.module) {
            (Some(loader), module) => {
                write!(f, "{}/{}/", loader, module.as_deref().unwrap_or(""))?
            }
            (None, Some(module)) => write!(f, "{}/", module)?,
            (None, None) => {}
        }
        write!(f, "{}.{}(", self.declaring_type, self.method)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}", file, line)?,
            (Some(file), None) => f.write_str(file)?,
            (None, _) => f.write_str(UNKNOWN_SOURCE)?,
        }
        f.write_str(")")
    }
}

impl FromStr for StackFrame {
    type Err = FrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(FrameParseError::Empty);
        }

        let captures = FRAME_PATTERN
            .captures(text)
            .ok_or_else(|| FrameParseError::MissingLocation(text.to_string()))?;

        let (class_loader, module, qualified) = split_prefix(&captures["qualified"], text)?;
        let (declaring_type, method) = qualified
            .rsplit_once('.')
            .filter(|(ty, method)| !ty.is_empty() && !method.is_empty())
            .ok_or_else(|| FrameParseError::MissingMethod(text.to_string()))?;

        let mut frame = StackFrame::new(declaring_type, method);
        frame.class_loader = class_loader;
        frame.module = module;
        parse_location(frame, captures["location"].trim(), text)
    }
}

type Prefix<'a> = (Option<String>, Option<String>, &'a str);

/// Split `[loader/][module/]Type.method` into its parts.
fn split_prefix<'a>(qualified: &'a str, text: &str) -> Result<Prefix<'a>, FrameParseError> {
    let parts: Vec<&str> = qualified.split('/').collect();

    match parts.as_slice() {
        [rest] => Ok((None, None, *rest)),
        [module, rest] => Ok((None, non_empty(module), *rest)),
        [loader, module, rest] if !loader.is_empty() => {
            Ok((non_empty(loader), non_empty(module), *rest))
        }
        _ => Err(FrameParseError::MalformedPrefix(text.to_string())),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_location(
    frame: StackFrame,
    location: &str,
    text: &str,
) -> Result<StackFrame, FrameParseError> {
    if location.is_empty() || location == UNKNOWN_SOURCE || location == NATIVE_METHOD {
        return Ok(frame);
    }

    match LOCATION_WITH_LINE.captures(location) {
        Some(captures) => {
            let line = captures["line"]
                .parse::<u32>()
                .map_err(|_| FrameParseError::InvalidLine {
                    frame: text.to_string(),
                    line: captures["line"].to_string(),
                })?;
            Ok(frame.with_file(&captures["file"]).with_line(line))
        }
        None => Ok(frame.with_file(location)),
    }
}
