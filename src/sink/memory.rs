//! In-memory capture, for tests and for embedding hosts that ship entries themselves.

use super::Sink;
use std::sync::{Arc, Mutex, PoisonError};

/// Clones share one buffer, so a test can route a clone and inspect the original.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in write order, one per record.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Physical lines, as they would appear in a file. Traces span several.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .flat_map(|entry| entry.lines().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write_entry(&self, entry: &str) -> Result<(), crate::Error> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
