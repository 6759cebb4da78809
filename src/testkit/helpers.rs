//! Factory functions for test frames.

use crate::frame::StackFrame;

/// Parse a frame from `Type.method(File:line)` text.
///
/// # Panics
///
/// Panics if the text is not a valid frame.
pub fn frame(text: &str) -> StackFrame {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to parse test frame '{}': {}", text, e))
}

/// A short trace mixing JDK, framework and application frames, innermost
/// frame first.
pub fn sample_trace() -> Vec<StackFrame> {
    [
        "java.util.Objects.requireNonNull(Objects.java:233)",
        "org.gradle.internal.Cast.uncheckedCast(Cast.java:41)",
        "jdk.internal.reflect.DirectMethodHandleAccessor.invoke(DirectMethodHandleAccessor.java:103)",
        "com.acme.build.GreetingTask.greet(GreetingTask.java:18)",
        "org.gradle.api.internal.AbstractTask.execute(AbstractTask.java:95)",
        "java.lang.Thread.run(Thread.java:1583)",
    ]
    .into_iter()
    .map(frame)
    .collect()
}
