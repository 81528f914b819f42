//! Reporter trait for dependency injection
//!
//! Core logic reports what it did to the index without being coupled to a
//! console. The binary prints; tests record or ignore.

use std::path::Path;

/// Receives one event per processed artifact.
pub trait Reporter {
    /// A new artifact link is about to be appended to `index_path`.
    fn publishing(&self, file_name: &str, index_path: &Path);

    /// `index_path` already lists `file_name`; nothing was written.
    fn already_exists(&self, file_name: &str, index_path: &Path);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn publishing(&self, _file_name: &str, _index_path: &Path) {}
    fn already_exists(&self, _file_name: &str, _index_path: &Path) {}
}
