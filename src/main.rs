// mcversion - main.rs
// Loads configuration, installs logging, and runs one CLI command

use anyhow::Context;
use clap::Parser;

use mcversion::cli::{execute, Cli};
use mcversion::config_loader::load_config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)?;

    Ok(())
}
