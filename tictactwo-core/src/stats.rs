//! Win/draw tallies across games

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::Player;

/// Receives terminal notifications from a `GameSession`
pub trait StatsRecorder {
    fn record_win(&mut self, player: Player);
    fn record_draw(&mut self);
}

/// Discards notifications
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStats;

impl StatsRecorder for NoStats {
    fn record_win(&mut self, _player: Player) {}
    fn record_draw(&mut self) {}
}

/// Aggregate results
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub total_games: u32,
}

impl GameStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let stats = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(stats)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

impl StatsRecorder for GameStats {
    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
        self.total_games += 1;
    }

    fn record_draw(&mut self) {
        self.draws += 1;
        self.total_games += 1;
    }
}
