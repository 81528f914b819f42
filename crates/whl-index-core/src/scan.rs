//! Artifact directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PublishError, Result};

/// List the artifacts directly inside `source_dir` whose extension is
/// `extension`, sorted by file name.
///
/// # Errors
///
/// Returns [`PublishError::Io`] if the directory does not exist or cannot be
/// read. An existing directory without artifacts yields an empty list.
pub fn scan_artifacts(source_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(source_dir)
        .map_err(|e| PublishError::io("reading artifact directory", source_dir, e))?;

    let mut artifacts = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| PublishError::io("reading artifact directory", source_dir, e))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            artifacts.push(path);
        }
    }

    artifacts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %source_dir.display(), count = artifacts.len(), "scanned artifacts");
    Ok(artifacts)
}
