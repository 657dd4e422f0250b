//! Destinations for rendered entries. The built-in console and rotating-file
//! sinks cover the declarative config; the `Sink` trait lets callers route a
//! handler somewhere else (tests capture with [`MemorySink`]).

mod console;
mod memory;
mod rotating;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use rotating::RotatingFileSink;

use crate::config::SinkSpec;
use std::sync::Arc;

/// `Send + Sync` so one registry can be shared by every thread that logs.
pub trait Sink: Send + Sync {
    /// Writes one rendered entry followed by a newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write_entry(&self, entry: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_entry(&self, entry: &str) -> Result<(), crate::Error> {
        (**self).write_entry(entry)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}

/// Builds the sink a handler spec describes.
#[must_use]
pub fn from_spec(spec: &SinkSpec) -> Arc<dyn Sink> {
    match spec {
        SinkSpec::Console { stream } => Arc::new(ConsoleSink::new(*stream)),
        SinkSpec::RotatingFile {
            path,
            max_bytes,
            backup_count,
        } => Arc::new(RotatingFileSink::new(path, *max_bytes, *backup_count)),
    }
}
