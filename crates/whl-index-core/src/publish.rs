//! Entry publishing and the per-run pipeline.

use std::path::Path;

use serde::Serialize;
use whl_index_schema::{LinkEntry, Sha256Digest, WheelDescriptor, release_url};

use crate::config::PublishConfig;
use crate::error::{PublishError, Result};
use crate::page::IndexPage;
use crate::reporter::Reporter;
use crate::scan::scan_artifacts;
use crate::tree::ensure_index_tree;

/// What happened to a single artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// A link was appended; carries the digest written into its fragment.
    Published(Sha256Digest),
    /// The page already listed the artifact.
    Skipped,
}

/// An artifact that received a new link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedArtifact {
    /// Artifact file name.
    pub file_name: String,
    /// Digest written into the link fragment.
    pub sha256: Sha256Digest,
}

/// Summary of a publish run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    /// Artifacts that received a new link.
    pub published: Vec<PublishedArtifact>,
    /// Artifacts that were already listed.
    pub skipped: Vec<String>,
}

/// Append a hash-qualified download link for `artifact_path` to `page`,
/// unless the page already lists `file_name`.
///
/// The artifact is only read when a link is actually written.
///
/// # Errors
///
/// Returns [`PublishError::Io`] if the artifact cannot be read or the page
/// cannot be appended to.
pub fn publish_entry(
    page: &mut IndexPage,
    descriptor: &WheelDescriptor,
    file_name: &str,
    artifact_path: &Path,
    org: &str,
    reporter: &dyn Reporter,
) -> Result<EntryOutcome> {
    if page.contains(file_name) {
        reporter.already_exists(file_name, page.relative_path());
        return Ok(EntryOutcome::Skipped);
    }

    reporter.publishing(file_name, page.relative_path());
    let digest = Sha256Digest::compute_file(artifact_path)
        .map_err(|e| PublishError::io("hashing artifact", artifact_path, e))?;

    page.append(&LinkEntry::Artifact {
        file_name: file_name.to_string(),
        url: release_url(org, descriptor, file_name, &digest),
    })?;

    tracing::info!(
        artifact = file_name,
        sha256 = %digest,
        page = %page.relative_path().display(),
        "published"
    );
    Ok(EntryOutcome::Published(digest))
}

/// Publish every artifact in `config.source_dir` into the tree under
/// `config.output_root`, one artifact at a time in file name order.
///
/// # Errors
///
/// Stops at the first failure. A filename that does not parse aborts the run
/// before any page is touched for that artifact; pages written for earlier
/// artifacts are kept.
pub fn publish_artifacts(config: &PublishConfig, reporter: &dyn Reporter) -> Result<PublishReport> {
    let mut report = PublishReport::default();

    for artifact_path in scan_artifacts(&config.source_dir, &config.extension)? {
        let file_name = artifact_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let descriptor = WheelDescriptor::parse(&file_name)?;

        let mut page = ensure_index_tree(&config.output_root, &descriptor.segments())?;
        match publish_entry(
            &mut page,
            &descriptor,
            &file_name,
            &artifact_path,
            &config.org,
            reporter,
        )? {
            EntryOutcome::Published(sha256) => {
                report.published.push(PublishedArtifact { file_name, sha256 });
            }
            EntryOutcome::Skipped => report.skipped.push(file_name),
        }
    }

    Ok(report)
}
