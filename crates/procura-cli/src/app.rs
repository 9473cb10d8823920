//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "procura")]
#[command(
    author,
    version,
    about = "Extract structured fields from vendor proposal PDFs and search them semantically"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process proposal PDFs into extracted JSON files
    Process(ProcessArgs),

    /// Search processed proposals with a weighted semantic query
    Search(SearchArgs),

    /// Run the built-in sample proposals through the demo queries
    Sample(SampleArgs),

    /// Show the state of the output directory
    Status(StatusArgs),
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Directory containing proposal PDFs
    #[arg(long)]
    pub proposals_dir: Option<PathBuf>,

    /// Directory for extracted JSON output files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Glob pattern for PDFs to pick up, relative to the proposals directory
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Scope query text (project type, deliverables, services)
    pub query: Vec<String>,

    /// Risks query text (concerns to search for)
    #[arg(long)]
    pub risks: Option<String>,

    /// Weight for the scope similarity space
    #[arg(long, default_value = "1.0")]
    pub scope_weight: f64,

    /// Weight for the price preference space (higher price scores higher)
    #[arg(long, default_value = "0.0")]
    pub price_weight: f64,

    /// Weight for the risks similarity space
    #[arg(long, default_value = "0.0")]
    pub risks_weight: f64,

    /// Number of results
    #[arg(short = 'n', long, default_value = "3")]
    pub limit: usize,

    /// Minimum combined score threshold
    #[arg(long, default_value = "0")]
    pub min_score: f64,

    /// Directory holding extracted JSON files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Number of results per demo query
    #[arg(short = 'n', long, default_value = "3")]
    pub limit: usize,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Directory holding extracted JSON files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
