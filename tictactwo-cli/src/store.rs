//! Persistent statistics with write-behind flushing
//!
//! Every recorded result restarts the flush timer. Pending changes are
//! written once the store has been quiet for the flush delay (checked by
//! `flush_if_due` and before each new record), or when the store is dropped.
//! Storage failures are logged and never reach the game.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tictactwo_core::{GameStats, Player, StatsRecorder};

/// Quiet period before pending changes are written
pub const FLUSH_DELAY: Duration = Duration::from_millis(500);

pub struct StatsStore {
    path: PathBuf,
    stats: GameStats,
    dirty_since: Option<Instant>,
    flush_delay: Duration,
}

impl StatsStore {
    /// Open the store, starting from zero if the file is missing or unreadable
    pub fn open(path: &Path) -> Self {
        let stats = if path.exists() {
            match GameStats::load(path) {
                Ok(stats) => {
                    tracing::debug!("Loaded stats from {}", path.display());
                    stats
                }
                Err(e) => {
                    tracing::warn!("Failed to load stats from {}: {}", path.display(), e);
                    GameStats::default()
                }
            }
        } else {
            GameStats::default()
        };

        Self {
            path: path.to_path_buf(),
            stats,
            dirty_since: None,
            flush_delay: FLUSH_DELAY,
        }
    }

    pub fn with_flush_delay(mut self, flush_delay: Duration) -> Self {
        self.flush_delay = flush_delay;
        self
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    pub fn reset(&mut self) {
        self.stats.reset();
        self.mark_dirty();
    }

    /// Write if changes have been pending for at least the flush delay
    pub fn flush_if_due(&mut self) -> bool {
        match self.dirty_since {
            Some(since) if since.elapsed() >= self.flush_delay => self.flush(),
            _ => false,
        }
    }

    /// Write pending changes now. Returns whether a write succeeded.
    pub fn flush(&mut self) -> bool {
        if self.dirty_since.is_none() {
            return false;
        }
        // Cleared either way; a failed write is retried on the next change
        self.dirty_since = None;
        match self.stats.save(&self.path) {
            Ok(()) => {
                tracing::debug!("Saved stats to {}", self.path.display());
                true
            }
            Err(e) => {
                tracing::warn!("Failed to save stats to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty_since = Some(Instant::now());
    }
}

impl StatsRecorder for StatsStore {
    fn record_win(&mut self, player: Player) {
        self.flush_if_due();
        self.stats.record_win(player);
        self.mark_dirty();
    }

    fn record_draw(&mut self) {
        self.flush_if_due();
        self.stats.record_draw();
        self.mark_dirty();
    }
}

impl Drop for StatsStore {
    fn drop(&mut self) {
        self.flush();
    }
}
