//! Nested index pages, one per directory level.

use std::fs;
use std::path::{Path, PathBuf};

use whl_index_schema::LinkEntry;

use crate::error::{PublishError, Result};
use crate::page::IndexPage;

/// Make sure every level from `root` down to `root/<segments...>` has an
/// index page linking to the next segment, and return the deepest page.
///
/// Existing pages and entries are left untouched; missing links are appended.
///
/// # Errors
///
/// Returns [`PublishError::Io`] if a directory or page cannot be created,
/// read or appended to.
pub fn ensure_index_tree<S: AsRef<str>>(root: &Path, segments: &[S]) -> Result<IndexPage> {
    let mut target = root.to_path_buf();
    for segment in segments {
        let segment: &str = segment.as_ref();
        target.push(segment);
    }
    fs::create_dir_all(&target)
        .map_err(|e| PublishError::io("creating index directory", &target, e))?;

    let mut cursor = PathBuf::new();
    for segment in segments {
        let segment: &str = segment.as_ref();
        let mut page = IndexPage::open_or_create(root, &cursor)?;
        let linked = page.append(&LinkEntry::Directory {
            name: segment.to_string(),
        })?;
        if linked {
            tracing::debug!(
                page = %page.relative_path().display(),
                child = segment,
                "linked directory"
            );
        }
        cursor.push(segment);
    }

    IndexPage::open_or_create(root, &cursor)
}
