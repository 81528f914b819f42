//! whl-index - static PEP 503 index publisher
//!
//! Scans a directory of built wheels and maintains a tree of append-only
//! `index.html` pages pointing at their GitHub release downloads:
//!
//! ```text
//! <output>/
//! ├── index.html                      # links cu121/
//! └── cu121/
//!     ├── index.html                  # links torch2.1.0/
//!     └── torch2.1.0/
//!         ├── index.html              # links mypkg/
//!         └── mypkg/
//!             └── index.html          # links wheels with #sha256=
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

use whl_index_core::config::{DEFAULT_ORG, DEFAULT_SOURCE_DIR};
use whl_index_core::{PublishConfig, Reporter};

/// Command line of the `whl-index` binary.
#[derive(Debug, Parser)]
#[command(name = "whl-index")]
#[command(
    version = env!("WHL_INDEX_VERSION"),
    about = "Publish built wheels into a static simple index"
)]
pub struct Cli {
    /// Path to .whl files
    #[arg(
        long = "whl_path",
        visible_alias = "whl-path",
        env = "WHL_INDEX_SOURCE",
        default_value = DEFAULT_SOURCE_DIR
    )]
    pub whl_path: PathBuf,

    /// Root of the index tree
    #[arg(short, long, env = "WHL_INDEX_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// GitHub organisation hosting the release assets
    #[arg(long, env = "WHL_INDEX_ORG", default_value = DEFAULT_ORG)]
    pub org: String,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the publish configuration from the parsed arguments.
    pub fn config(&self) -> PublishConfig {
        PublishConfig::new(&self.whl_path, &self.output).with_org(&self.org)
    }
}

/// Prints one line per artifact, or nothing when JSON output is requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    /// Suppress the per-artifact lines.
    pub quiet: bool,
}

impl Reporter for ConsoleReporter {
    fn publishing(&self, file_name: &str, index_path: &Path) {
        if !self.quiet {
            println!("Publishing {file_name} to {}", index_path.display());
        }
    }

    fn already_exists(&self, file_name: &str, index_path: &Path) {
        if !self.quiet {
            println!("{file_name} already exists in {}", index_path.display());
        }
    }
}
