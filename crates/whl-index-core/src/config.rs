//! Publish run configuration.

use std::path::PathBuf;

/// Directory scanned for artifacts when none is given.
pub const DEFAULT_SOURCE_DIR: &str = "dist";

/// GitHub organisation hosting the release assets.
pub const DEFAULT_ORG: &str = "vectorch-ai";

/// Extension of publishable artifacts.
pub const WHEEL_EXTENSION: &str = "whl";

/// Inputs of a publish run. The output root is explicit; nothing is resolved
/// against the process working directory behind the caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Directory holding the built artifacts (non-recursive).
    pub source_dir: PathBuf,
    /// Root of the index tree; `index.html` here links to the `cu*` directories.
    pub output_root: PathBuf,
    /// GitHub organisation used in download URLs.
    pub org: String,
    /// Artifact file extension, without the dot.
    pub extension: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_root: PathBuf::from("."),
            org: DEFAULT_ORG.to_string(),
            extension: WHEEL_EXTENSION.to_string(),
        }
    }
}

impl PublishConfig {
    /// Config for the given source and output directories, other fields defaulted.
    pub fn new(source_dir: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    /// Override the GitHub organisation.
    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }
}
