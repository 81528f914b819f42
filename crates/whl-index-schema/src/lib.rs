//! Shared types for `whl-index`.
//!
//! The schema crate owns everything that describes the index without touching
//! the filesystem layout of a run: the wheel filename grammar, content digests
//! and the exact bytes of a link line.

pub mod descriptor;
pub mod hash;
pub mod link;

// Re-exports
pub use descriptor::{FilenameError, WheelDescriptor};
pub use hash::Sha256Digest;
pub use link::{INDEX_FILE, INDEX_HEADER, LinkEntry, release_url};
