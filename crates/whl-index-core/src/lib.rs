//! Core library for `whl-index`.
//!
//! Publishing is a single sequential pass over a directory of built wheels:
//!
//! ```text
//! scan ──> parse filename ──> ensure index tree ──> publish entry
//! (dist/*.whl)  (cu/torch/pkg)   (index.html per level)   (hash-qualified link)
//! ```
//!
//! Every page is append-only. Re-running against the same artifacts leaves the
//! tree byte-identical.

pub mod config;
pub mod error;
pub mod page;
pub mod publish;
pub mod reporter;
pub mod scan;
pub mod tree;

pub use config::PublishConfig;
pub use error::{PublishError, Result};
pub use page::IndexPage;
pub use publish::{
    EntryOutcome, PublishReport, PublishedArtifact, publish_artifacts, publish_entry,
};
pub use reporter::{NullReporter, Reporter};
pub use scan::scan_artifacts;
pub use tree::ensure_index_tree;
