//! Simulate command - play AI-vs-AI games and tally the results
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_results()
//! - Level 3: compute_summary()
//! - Level 4: formatting utilities

use std::path::Path;

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tictactwo_core::{run_games, AiConfig, GameOutcome, GameResult, NoStats, RunnerConfig};

use crate::store::StatsStore;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Safety cap on actions per game
    #[arg(long, default_value = "64")]
    pub max_actions: usize,

    /// Don't add results to the stats file
    #[arg(long)]
    pub no_record: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregated results of a batch
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
struct Summary {
    total_games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    unfinished: usize,
    avg_actions: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Play the games, feeding results into the stats store
/// 2. Report the batch summary
pub fn run(args: SimulateArgs, seed: Option<u64>, stats_file: &Path) -> Result<()> {
    let base_seed = create_rng(seed).gen::<u64>();

    tracing::info!(
        "Simulating {} games (seed={}, max_actions={})",
        args.games,
        base_seed,
        args.max_actions
    );

    let config = RunnerConfig::new(args.games)
        .with_ai(AiConfig::default().with_seed(base_seed))
        .with_max_actions(args.max_actions);

    let outcomes = if args.no_record {
        run_games(&config, &mut NoStats)
    } else {
        let mut store = StatsStore::open(stats_file);
        let outcomes = run_games(&config, &mut store);
        store.flush();
        tracing::info!(
            "Stats file {}: {} games recorded in total",
            store.path().display(),
            store.stats().total_games
        );
        outcomes
    };

    let summary = compute_summary(&outcomes);
    report_results(&summary, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_results(summary: &Summary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_text_results(summary);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn compute_summary(outcomes: &[GameOutcome]) -> Summary {
    let count = |result: GameResult| outcomes.iter().filter(|o| o.result == result).count();

    let total_actions: usize = outcomes.iter().map(|o| o.actions.len()).sum();
    let avg_actions = if outcomes.is_empty() {
        0.0
    } else {
        total_actions as f32 / outcomes.len() as f32
    };

    Summary {
        total_games: outcomes.len(),
        x_wins: count(GameResult::XWins),
        o_wins: count(GameResult::OWins),
        draws: count(GameResult::Draw),
        unfinished: count(GameResult::Ongoing),
        avg_actions,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(summary: &Summary) {
    let total = summary.total_games;

    println!("\n=== Simulation Results ===");
    println!("Total games: {}", total);
    println!("X wins:      {} ({:.1}%)", summary.x_wins, percent(summary.x_wins, total));
    println!("O wins:      {} ({:.1}%)", summary.o_wins, percent(summary.o_wins, total));
    println!("Draws:       {} ({:.1}%)", summary.draws, percent(summary.draws, total));
    if summary.unfinished > 0 {
        println!("Unfinished:  {}", summary.unfinished);
    }
    println!("Avg actions: {:.1}", summary.avg_actions);
}

// ============================================================================
// TESTS
// ============================================================================
