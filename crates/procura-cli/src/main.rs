//! Procura CLI
//!
//! Extract structured fields from vendor proposal PDFs and search them.

use anyhow::Result;
use clap::Parser;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let config = procura_core::Config::load()?;

    match cli.command {
        Commands::Process(args) => commands::process::run(args, &config).await,
        Commands::Search(args) => commands::search::run(args, &config, cli.format).await,
        Commands::Sample(args) => commands::sample::run(args, &config, cli.format).await,
        Commands::Status(args) => commands::status::run(args, &config, cli.format).await,
    }
}
