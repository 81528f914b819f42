//! A single `index.html` page of the tree.
//!
//! Pages start as the bare doctype and are only ever appended to. A link is
//! already present when some line contains its delimiter-bounded text
//! (`>key<`), so `torch1` is never mistaken for an existing `torch12`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use whl_index_schema::{INDEX_FILE, INDEX_HEADER, LinkEntry};

use crate::error::{PublishError, Result};

/// An index page loaded from disk, kept line by line.
#[derive(Debug)]
pub struct IndexPage {
    path: PathBuf,
    relative_path: PathBuf,
    lines: Vec<String>,
}

impl IndexPage {
    /// Open `root/dir/index.html`, creating it with the bare header if absent.
    ///
    /// `dir` is relative to `root` and must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the page cannot be created or read.
    pub fn open_or_create(root: &Path, dir: &Path) -> Result<Self> {
        let relative_path = dir.join(INDEX_FILE);
        let path = root.join(&relative_path);

        if !path.exists() {
            fs::write(&path, INDEX_HEADER)
                .map_err(|e| PublishError::io("creating index page", &path, e))?;
            tracing::debug!(path = %path.display(), "created index page");
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| PublishError::io("reading index page", &path, e))?;

        Ok(Self {
            path,
            relative_path,
            lines: content.lines().map(str::to_string).collect(),
        })
    }

    /// Location of the page on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the page relative to the index root.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Whether a link with visible text `key` is already on the page.
    pub fn contains(&self, key: &str) -> bool {
        let needle = format!(">{key}<");
        self.lines.iter().any(|line| line.contains(&needle))
    }

    /// Append `entry` unless its key is already present.
    ///
    /// Returns `true` if the page was written to.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the page cannot be opened for appending.
    pub fn append(&mut self, entry: &LinkEntry) -> Result<bool> {
        if self.contains(entry.key()) {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| PublishError::io("opening index page", &self.path, e))?;
        let rendered = entry.render();
        file.write_all(rendered.as_bytes())
            .map_err(|e| PublishError::io("appending to index page", &self.path, e))?;

        self.lines.extend(rendered.lines().map(str::to_string));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dir_entry(name: &str) -> LinkEntry {
        LinkEntry::Directory {
            name: name.to_string(),
        }
    }

    #[test]
    fn creates_header_only_page() {
        let tmp = tempdir().unwrap();
        let page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert_eq!(page.relative_path(), Path::new("index.html"));
        assert_eq!(fs::read_to_string(page.path()).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn append_is_idempotent() {
        let tmp = tempdir().unwrap();
        let mut page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(page.append(&dir_entry("cu121")).unwrap());
        assert!(!page.append(&dir_entry("cu121")).unwrap());

        // Reopening sees the entry written by the first handle.
        let mut reopened = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(reopened.contains("cu121"));
        assert!(!reopened.append(&dir_entry("cu121")).unwrap());

        assert_eq!(
            fs::read_to_string(page.path()).unwrap(),
            "<!DOCTYPE html>\n<a href=\"cu121\">cu121</a><br>"
        );
    }

    #[test]
    fn prefix_names_do_not_collide() {
        let tmp = tempdir().unwrap();
        let mut page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        page.append(&dir_entry("torch12")).unwrap();

        let mut reopened = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(reopened.contains("torch12"));
        assert!(!reopened.contains("torch1"));
        assert!(!reopened.contains("torch"));
        assert!(reopened.append(&dir_entry("torch1")).unwrap());
        assert!(reopened.contains("torch1"));
    }

    #[test]
    fn existing_page_is_never_rewritten() {
        let tmp = tempdir().unwrap();
        let existing = "<!DOCTYPE html>\n<a href=\"https://x/a.whl#sha256=00\">a.whl</a><br>";
        fs::write(tmp.path().join("index.html"), existing).unwrap();

        let mut page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(page.contains("a.whl"));
        page.append(&dir_entry("b")).unwrap();

        let content = fs::read_to_string(page.path()).unwrap();
        assert!(content.starts_with(existing));
        assert!(content.ends_with("\n<a href=\"b\">b</a><br>"));
    }

    #[test]
    fn keys_containing_angle_brackets_are_found() {
        let tmp = tempdir().unwrap();
        let mut page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(page.append(&dir_entry("a>b")).unwrap());
        assert!(page.contains("a>b"));
        assert!(!page.contains("a"));

        let mut reopened = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(reopened.contains("a>b"));
        assert!(!reopened.append(&dir_entry("a>b")).unwrap());
        assert_eq!(
            fs::read_to_string(reopened.path()).unwrap(),
            "<!DOCTYPE html>\n<a href=\"a>b\">a>b</a><br>"
        );
    }

    #[test]
    fn header_is_not_a_link() {
        let tmp = tempdir().unwrap();
        let page = IndexPage::open_or_create(tmp.path(), Path::new("")).unwrap();
        assert!(!page.contains("!DOCTYPE html"));
    }
}
