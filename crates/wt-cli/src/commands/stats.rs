//! Stats command for the per-category duration export.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wt_core::io::write_stats;

use super::{ensure_parent, open_project};
use crate::Config;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Write the CSV to a file instead of printing it.
    #[arg(long)]
    pub save: bool,

    /// Destination for --save (defaults to `stats_path` from the config).
    #[arg(long, requires = "save")]
    pub output: Option<PathBuf>,
}

pub fn run<W: Write>(writer: &mut W, args: &StatsArgs, config: &Config) -> Result<()> {
    let project = open_project(config)?;

    if !args.save {
        write_stats(writer, &project)?;
        return Ok(());
    }

    let path = args.output.as_ref().unwrap_or(&config.stats_path);
    ensure_parent(path)?;
    project
        .save_stats(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(writer, "Saved statistics to {}", path.display())?;
    Ok(())
}
