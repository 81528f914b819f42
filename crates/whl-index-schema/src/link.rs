//! Link lines of an index page.

use crate::descriptor::WheelDescriptor;
use crate::hash::Sha256Digest;

/// File name of every page in the tree.
pub const INDEX_FILE: &str = "index.html";

/// Content of a freshly created page. Entries are appended after it.
pub const INDEX_HEADER: &str = "<!DOCTYPE html>";

/// One anchor line in an index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEntry {
    /// Link to an immediate child directory.
    Directory {
        /// Child directory name, used as both href and text.
        name: String,
    },
    /// Link to an externally hosted artifact.
    Artifact {
        /// Artifact file name, the visible text.
        file_name: String,
        /// Download URL including the `#sha256=` fragment.
        url: String,
    },
}

impl LinkEntry {
    /// Visible text of the link. Existence checks look for `>key<`.
    pub fn key(&self) -> &str {
        match self {
            Self::Directory { name } => name,
            Self::Artifact { file_name, .. } => file_name,
        }
    }

    /// The exact bytes appended to a page, leading newline included.
    pub fn render(&self) -> String {
        match self {
            Self::Directory { name } => format!("\n<a href=\"{name}\">{name}</a><br>"),
            Self::Artifact { file_name, url } => {
                format!("\n<a href=\"{url}\">{file_name}</a><br>")
            }
        }
    }
}

/// GitHub release download URL for an artifact, with its digest as fragment.
///
/// `https://github.com/<org>/<package>/releases/download/v<version>/<file>#sha256=<hex>`
pub fn release_url(
    org: &str,
    descriptor: &WheelDescriptor,
    file_name: &str,
    digest: &Sha256Digest,
) -> String {
    format!(
        "https://github.com/{org}/{}/releases/download/v{}/{file_name}#sha256={digest}",
        descriptor.package, descriptor.version
    )
}
