//! Tic-Tac-Two Core - rules engine
//!
//! This crate provides the game logic for Tic-Tac-Two, tic-tac-toe on a 5x5
//! board where only a movable 3x3 grid is in play:
//! - Board geometry, grid anchoring and grid movement
//! - Game state: turn owner and the shared piece counter
//! - Win/draw evaluation in the grid's local coordinates
//! - Turn orchestration with result notifications
//! - A greedy-then-random AI and an AI-vs-AI runner

pub mod board;
pub mod game;
pub mod eval;
pub mod session;
pub mod ai;
pub mod stats;
pub mod config;
pub mod runner;

// Re-exports for convenient access
pub use board::{Board, Direction, Position, DIRECTIONS, BOARD_SIZE, GRID_SIZE, TOTAL_PIECES};
pub use game::{GameState, GameResult, GameSnapshot, Phase, Player};
pub use eval::{check_win, check_win_on, evaluate, is_draw, WINNING_COMBINATIONS};
pub use session::{Action, GameSession, Rejection, TurnOutcome};
pub use ai::GreedyAi;
pub use stats::{GameStats, NoStats, StatsRecorder};
pub use config::{AiConfig, RunnerConfig};
pub use runner::{run_games, GameOutcome, GameRunner};
