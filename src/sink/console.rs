//! stderr/stdout sink.

use super::Sink;
use crate::config::ConsoleStream;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    #[must_use]
    pub const fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write_entry(&self, entry: &str) -> Result<(), crate::Error> {
        // Locking keeps multi-line entries (traces) from interleaving across threads.
        match self.stream {
            ConsoleStream::Stderr => writeln!(io::stderr().lock(), "{entry}")?,
            ConsoleStream::Stdout => writeln!(io::stdout().lock(), "{entry}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            ConsoleStream::Stderr => io::stderr().flush()?,
            ConsoleStream::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }
}
