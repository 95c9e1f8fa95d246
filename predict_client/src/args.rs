//! Command-line arguments for the predictor client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Symbol to predict (e.g. BTC). When omitted it is read from stdin.
    #[clap(long)]
    pub symbol: Option<String>,

    /// Seed for the random perturbation, for repeatable output.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Do not draw the progress indicator.
    #[clap(long)]
    pub no_progress: bool,

    /// Override the quotes endpoint URL.
    #[clap(long)]
    pub api_url: Option<String>,
}
