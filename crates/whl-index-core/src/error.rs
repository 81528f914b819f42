//! Domain-specific errors for publishing

use std::path::{Path, PathBuf};
use thiserror::Error;
use whl_index_schema::FilenameError;

/// Everything that can abort a publish run. None of these are retried.
#[derive(Error, Debug)]
pub enum PublishError {
    /// An artifact filename does not follow the wheel label grammar.
    #[error(transparent)]
    Filename(#[from] FilenameError),

    /// A filesystem operation failed.
    #[error("{action} '{}'", path.display())]
    Io {
        /// What was being attempted (e.g. "reading index page").
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// Wrap an I/O error with the action and path it concerned.
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, PublishError>;
