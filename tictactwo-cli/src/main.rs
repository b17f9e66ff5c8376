//! Tic-Tac-Two CLI - Command-line interface
//!
//! Commands:
//! - simulate: Play AI-vs-AI games and tally results
//! - stats: Show or reset the persisted win/draw tallies

mod simulate;
mod stats_cmd;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactwo")]
#[command(about = "Tic-Tac-Two rules engine")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Where win/draw tallies are kept
    #[arg(long, global = true, default_value = "tic-tac-two-stats.json")]
    stats_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play AI-vs-AI games
    Simulate(simulate::SimulateArgs),
    /// Show or reset recorded results
    Stats(stats_cmd::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate::run(args, cli.seed, &cli.stats_file),
        Commands::Stats(args) => stats_cmd::run(args, &cli.stats_file),
    }
}
