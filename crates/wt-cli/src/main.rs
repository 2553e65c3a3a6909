use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{category, init, recent, stats, status, task};
use wt_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose wins over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: tests may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match command {
        Commands::Init(args) => init::run(&mut writer, args, &config)?,
        Commands::Status => status::run(&mut writer, &config)?,
        Commands::Category(action) => category::run(&mut writer, action, &config)?,
        Commands::Task(action) => task::run(&mut writer, action, &config)?,
        Commands::Recent { json } => recent::run(&mut writer, *json, &config)?,
        Commands::Stats(args) => stats::run(&mut writer, args, &config)?,
    }
    writer.flush()?;

    Ok(())
}
