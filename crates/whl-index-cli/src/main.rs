//! `whl-index` - publish built wheels into a static simple index.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use whl_index_cli::{Cli, ConsoleReporter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the publish lines only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(?config, "starting publish run");

    let reporter = ConsoleReporter { quiet: cli.json };
    let report = whl_index_core::publish_artifacts(&config, &reporter).with_context(|| {
        format!(
            "publishing '{}' into '{}'",
            config.source_dir.display(),
            config.output_root.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
