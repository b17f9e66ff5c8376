//! Stats command - show or reset the persisted tallies

use std::path::Path;

use anyhow::Result;
use clap::Args;

use tictactwo_core::GameStats;

use crate::store::StatsStore;

#[derive(Args)]
pub struct StatsArgs {
    /// Zero all tallies
    #[arg(long)]
    pub reset: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run stats command
pub fn run(args: StatsArgs, stats_file: &Path) -> Result<()> {
    let mut store = StatsStore::open(stats_file);

    if args.reset {
        store.reset();
        if !store.flush() {
            anyhow::bail!("Failed to write stats file: {}", stats_file.display());
        }
        tracing::info!("Reset stats in {}", stats_file.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.stats())?);
    } else {
        print_stats(store.stats());
    }
    Ok(())
}

fn print_stats(stats: &GameStats) {
    println!("\n=== Tic-Tac-Two Stats ===");
    println!("Games played: {}", stats.total_games);
    println!("X wins:       {}", stats.x_wins);
    println!("O wins:       {}", stats.o_wins);
    println!("Draws:        {}", stats.draws);
}
