//! Game runner - plays AI-vs-AI games

use crate::ai::GreedyAi;
use crate::config::RunnerConfig;
use crate::game::{GameResult, GameState, Player};
use crate::session::{Action, GameSession};
use crate::stats::{GameStats, StatsRecorder};

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final result; Ongoing means the action cap was hit
    pub result: GameResult,
    /// Accepted actions in order
    pub actions: Vec<Action>,
    pub final_state: GameState,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Draw
    }
}

/// Plays games with the greedy AI on both sides
pub struct GameRunner {
    config: RunnerConfig,
    /// Random seed counter
    seed_counter: u64,
}

impl GameRunner {
    pub fn new(config: RunnerConfig) -> Self {
        let seed_counter = config.ai.seed.unwrap_or(42);
        Self {
            config,
            seed_counter,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Play one game to completion (or the action cap)
    pub fn play_game(&mut self, stats: &mut dyn StatsRecorder) -> GameOutcome {
        let mut ai = GreedyAi::with_seed(self.next_seed());
        let mut session = GameSession::new();
        let mut actions = Vec::new();

        while !session.is_over() && actions.len() < self.config.max_actions {
            let Some(action) = ai.choose_action(session.state()) else {
                break;
            };
            match session.apply(action, stats) {
                Ok(_) => actions.push(action),
                Err(rejection) => {
                    tracing::warn!("AI action {:?} rejected: {}", action, rejection);
                    break;
                }
            }
        }

        GameOutcome {
            result: session.result(),
            actions,
            final_state: session.state().clone(),
        }
    }

    /// Play the configured number of games, tallying results
    pub fn run(&mut self) -> GameStats {
        let mut stats = GameStats::default();
        self.play_games(&mut stats);
        stats
    }

    fn play_games(&mut self, stats: &mut dyn StatsRecorder) -> Vec<GameOutcome> {
        let mut outcomes = Vec::with_capacity(self.config.games);
        for game in 0..self.config.games {
            let outcome = self.play_game(stats);
            tracing::debug!(
                "Game {}: {:?} ({} actions)",
                game + 1,
                outcome.result,
                outcome.actions.len()
            );
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }
}

/// Play a batch described by `config`, reporting every result to `stats`
pub fn run_games(config: &RunnerConfig, stats: &mut dyn StatsRecorder) -> Vec<GameOutcome> {
    GameRunner::new(config.clone()).play_games(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_PIECES;
    use crate::config::AiConfig;
    use crate::eval;
    use crate::stats::NoStats;

    #[test]
    fn test_game_always_terminates() {
        let mut runner = GameRunner::new(RunnerConfig::new(1).with_ai(AiConfig::default().with_seed(3)));
        for _ in 0..50 {
            let outcome = runner.play_game(&mut NoStats);
            assert!(outcome.result.is_terminal());
            // Grid placement plus at most eight placements
            assert!(outcome.actions.len() <= 1 + TOTAL_PIECES as usize);
            assert_eq!(eval::evaluate(&outcome.final_state), outcome.result);
        }
    }

    #[test]
    fn test_run_tallies_every_game() {
        let mut runner = GameRunner::new(RunnerConfig::new(20));
        let stats = runner.run();
        assert_eq!(stats.total_games, 20);
        assert_eq!(stats.x_wins + stats.o_wins + stats.draws, 20);
    }

    #[test]
    fn test_run_games_reports_each_result() {
        let config = RunnerConfig::new(12).with_ai(AiConfig::default().with_seed(1));
        let mut stats = GameStats::default();
        let outcomes = run_games(&config, &mut stats);
        assert_eq!(outcomes.len(), 12);
        assert_eq!(stats.total_games, 12);
        let x_wins = outcomes.iter().filter(|o| o.winner() == Some(Player::X)).count();
        assert_eq!(stats.x_wins as usize, x_wins);
    }

    #[test]
    fn test_same_seed_same_games() {
        let config = RunnerConfig::new(1).with_ai(AiConfig::default().with_seed(11));
        let a = GameRunner::new(config.clone()).play_game(&mut NoStats);
        let b = GameRunner::new(config).play_game(&mut NoStats);
        assert_eq!(a.actions, b.actions);
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_action_cap() {
        let mut runner = GameRunner::new(RunnerConfig::new(1).with_max_actions(2));
        let outcome = runner.play_game(&mut NoStats);
        assert_eq!(outcome.actions.len(), 2);
        assert_eq!(outcome.result, GameResult::Ongoing);
        assert_eq!(outcome.winner(), None);
        assert!(!outcome.is_draw());
    }
}
