//! Exception details attached to a record and their trace rendering.
//!
//! The trace layout follows the conventional `Traceback (most recent call last):`
//! block that log tooling already knows how to fold, ending with `<Type>: <message>`.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt::Write;

/// One frame of the trace, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub file: String,
    pub line: u32,
    pub function: String,
}

/// An error captured at a log call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,
    pub frames: Vec<Frame>,
    /// Raw backtrace text, when one was captured.
    pub backtrace: Option<String>,
    /// Messages of `source()` errors, nearest first.
    pub causes: Vec<String>,
}

impl ExceptionInfo {
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: Vec::new(),
            backtrace: None,
            causes: Vec::new(),
        }
    }

    /// Captures an error's short type name, message, and `source()` chain.
    /// A backtrace is recorded only when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enable it.
    #[must_use]
    pub fn from_error<E: StdError + 'static>(err: &E) -> Self {
        let mut info = Self::new(crate::naming::short_type_name::<E>(), err.to_string());

        let mut source = err.source();
        while let Some(cause) = source {
            info.causes.push(cause.to_string());
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            info.backtrace = Some(backtrace.to_string());
        }
        info
    }

    /// Adds a frame; frames render in insertion order.
    #[must_use]
    #[track_caller]
    pub fn frame_here(self, function: &str) -> Self {
        let location = std::panic::Location::caller();
        self.frame(location.file(), location.line(), function)
    }

    #[must_use]
    pub fn frame(mut self, file: &str, line: u32, function: &str) -> Self {
        self.frames.push(Frame {
            file: file.to_string(),
            line,
            function: function.to_string(),
        });
        self
    }

    /// Multi-line trace text without a trailing newline.
    #[must_use]
    pub fn format_trace(&self) -> String {
        let mut out = String::from("Traceback (most recent call last):");

        for frame in &self.frames {
            let _ = write!(
                out,
                "\n  File \"{}\", line {}, in {}",
                frame.file, frame.line, frame.function
            );
        }

        if let Some(backtrace) = &self.backtrace {
            for line in backtrace.lines().filter(|l| !l.trim().is_empty()) {
                let _ = write!(out, "\n  {}", line.trim_end());
            }
        }

        let _ = write!(out, "\n{}: {}", self.type_name, self.message);

        for cause in &self.causes {
            let _ = write!(out, "\nCaused by: {cause}");
        }

        out
    }
}
