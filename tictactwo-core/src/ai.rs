//! Greedy-then-random AI

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::{Position, BOARD_SIZE, GRID_SIZE};
use crate::eval::check_win_on;
use crate::game::GameState;
use crate::session::Action;

/// Takes an immediate win when one exists, otherwise a random grid cell
pub struct GreedyAi {
    rng: ChaCha8Rng,
}

impl Default for GreedyAi {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyAi {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Empty cells inside the grid, in grid-index order
    pub fn candidate_cells(state: &GameState) -> Vec<usize> {
        state
            .grid_cell_indexes()
            .into_iter()
            .filter(|&index| state.board().is_empty(index))
            .collect()
    }

    /// First empty grid cell that completes a line for the mover.
    ///
    /// Scans in grid-index order, so this is the first win found rather than
    /// any kind of best one.
    pub fn winning_cell(state: &GameState) -> Option<usize> {
        let player = state.current_player();
        let grid = state.grid_cell_indexes();
        let mut board = state.board().clone();

        for index in Self::candidate_cells(state) {
            board.occupy(index, player);
            let wins = check_win_on(&board, &grid, player);
            board.vacate(index);
            if wins {
                return Some(index);
            }
        }
        None
    }

    /// Cell to place on; None when the grid is unplaced, no pieces remain or
    /// the grid is full
    pub fn choose_cell(&mut self, state: &GameState) -> Option<usize> {
        if !state.grid_placed() || state.pieces_left() == 0 {
            return None;
        }
        if let Some(index) = Self::winning_cell(state) {
            return Some(index);
        }
        Self::candidate_cells(state).choose(&mut self.rng).copied()
    }

    /// Uniformly random valid grid anchor
    pub fn choose_anchor(&mut self) -> Position {
        let max = BOARD_SIZE - GRID_SIZE;
        Position::new(self.rng.gen_range(0..=max), self.rng.gen_range(0..=max))
    }

    /// Next action for whoever is to move
    pub fn choose_action(&mut self, state: &GameState) -> Option<Action> {
        if !state.grid_placed() {
            return self.choose_anchor().index().map(Action::Click);
        }
        self.choose_cell(state).map(Action::Click)
    }
}

// ============================================================================
// TESTS
// ============================================================================
