//! Turn orchestration: routes clicks and grid moves into the game state,
//! evaluates terminal conditions and hands the turn over.

use serde::{Deserialize, Serialize};

use crate::ai::GreedyAi;
use crate::board::{Direction, Position};
use crate::eval;
use crate::game::{GameResult, GameSnapshot, GameState, Player};
use crate::stats::StatsRecorder;

// ============================================================================
// TYPES
// ============================================================================

/// A player intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Click a board cell (linear index)
    Click(usize),
    /// Shift the grid one step
    MoveGrid(Direction),
}

/// What an accepted action did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    GridPlaced(Position),
    Placed { index: usize, player: Player },
    PickedUp { index: usize, player: Player },
    /// Clicked an opponent piece in the movement phase; the turn is still spent
    PickupRefused { index: usize },
    /// Clicked an occupied cell in the placement phase; the turn is still spent
    Occupied { index: usize },
    GridMoved(Position),
    Finished(GameResult),
}

/// Actions refused without touching the state or the turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("game is over: {0:?}")]
    GameOver(GameResult),
    #[error("cell {0} is off the board")]
    OffBoard(usize),
    #[error("grid cannot be anchored at ({row}, {col})")]
    InvalidGridPlacement { row: i8, col: i8 },
    #[error("cell {0} is outside the grid")]
    OutsideGrid(usize),
    #[error("no pieces left to place")]
    NoPiecesLeft,
    #[error("grid has not been placed")]
    GridNotPlaced,
    #[error("grid can only move in the movement phase")]
    NotMovementPhase,
    #[error("grid cannot move {0:?} from its current anchor")]
    GridBlocked(Direction),
    #[error("no move available")]
    NoMoveAvailable,
}

// ============================================================================
// SESSION
// ============================================================================

/// One game, driven one action at a time
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    result: GameResult,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            result: GameResult::Ongoing,
        }
    }

    /// Resume from an existing state. No stats are recorded for a state that
    /// is already terminal.
    pub fn from_state(state: GameState) -> Self {
        let result = if state.grid_placed() {
            eval::evaluate(&state)
        } else {
            GameResult::Ongoing
        };
        Self { state, result }
    }

    pub fn start_game(&mut self) {
        self.state.reset_state();
        self.result = GameResult::Ongoing;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn apply(
        &mut self,
        action: Action,
        stats: &mut dyn StatsRecorder,
    ) -> Result<TurnOutcome, Rejection> {
        match action {
            Action::Click(index) => self.handle_cell_click(index, stats),
            Action::MoveGrid(direction) => self.handle_grid_move(direction, stats),
        }
    }

    /// Grid placement before anything else, then piece placement or pickup
    pub fn handle_cell_click(
        &mut self,
        index: usize,
        stats: &mut dyn StatsRecorder,
    ) -> Result<TurnOutcome, Rejection> {
        self.ensure_ongoing()?;
        let pos = Position::from_index(index).ok_or(Rejection::OffBoard(index))?;

        if !self.state.grid_placed() {
            return self.place_grid(pos);
        }

        let player = self.state.current_player();

        if let Some(owner) = self.state.board().get(index) {
            let outcome = if !self.state.is_in_movement_phase() {
                TurnOutcome::Occupied { index }
            } else if owner == player {
                self.state.vacate(index);
                self.state.increase_pieces_left();
                TurnOutcome::PickedUp { index, player }
            } else {
                TurnOutcome::PickupRefused { index }
            };
            tracing::debug!("{:?} at cell {}: {:?}", player, index, outcome);
            // Spent even when nothing was picked up
            self.state.swap_turns();
            return Ok(outcome);
        }

        if self.state.pieces_left() == 0 {
            return reject(Rejection::NoPiecesLeft);
        }
        if !self.state.is_in_grid(index) {
            return reject(Rejection::OutsideGrid(index));
        }

        self.state.occupy(index, player);
        self.state.decrease_pieces_left();
        tracing::debug!("{:?} placed at cell {} ({} left)", player, index, self.state.pieces_left());

        Ok(self.finish_or_swap(TurnOutcome::Placed { index, player }, stats))
    }

    /// Shift the grid; allowed once the movement phase has begun
    pub fn handle_grid_move(
        &mut self,
        direction: Direction,
        stats: &mut dyn StatsRecorder,
    ) -> Result<TurnOutcome, Rejection> {
        self.ensure_ongoing()?;
        if !self.state.grid_placed() {
            return reject(Rejection::GridNotPlaced);
        }
        if !self.state.is_in_movement_phase() {
            return reject(Rejection::NotMovementPhase);
        }
        if !self.state.move_grid(direction) {
            return reject(Rejection::GridBlocked(direction));
        }

        let Some(anchor) = self.state.grid_position() else {
            return reject(Rejection::GridNotPlaced);
        };
        tracing::debug!("grid moved {:?} to ({}, {})", direction, anchor.row, anchor.col);

        Ok(self.finish_or_swap(TurnOutcome::GridMoved(anchor), stats))
    }

    /// Let the AI act for the current player
    pub fn make_ai_move(
        &mut self,
        ai: &mut GreedyAi,
        stats: &mut dyn StatsRecorder,
    ) -> Result<TurnOutcome, Rejection> {
        self.ensure_ongoing()?;
        let action = ai.choose_action(&self.state).ok_or(Rejection::NoMoveAvailable)?;
        self.apply(action, stats)
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn ensure_ongoing(&self) -> Result<(), Rejection> {
        if self.result.is_terminal() {
            return reject(Rejection::GameOver(self.result));
        }
        Ok(())
    }

    fn place_grid(&mut self, pos: Position) -> Result<TurnOutcome, Rejection> {
        if !self.state.set_grid_position(pos.row, pos.col) {
            return reject(Rejection::InvalidGridPlacement { row: pos.row, col: pos.col });
        }
        tracing::debug!("grid placed at ({}, {})", pos.row, pos.col);
        Ok(TurnOutcome::GridPlaced(pos))
    }

    /// Swap turns unless the position is terminal, in which case notify once
    fn finish_or_swap(&mut self, outcome: TurnOutcome, stats: &mut dyn StatsRecorder) -> TurnOutcome {
        let result = eval::evaluate(&self.state);
        match result {
            GameResult::Ongoing => {
                self.state.swap_turns();
                outcome
            }
            GameResult::XWins | GameResult::OWins => {
                self.result = result;
                if let Some(winner) = result.winner() {
                    stats.record_win(winner);
                    tracing::info!("{} wins", winner.symbol());
                }
                TurnOutcome::Finished(result)
            }
            GameResult::Draw => {
                self.result = result;
                stats.record_draw();
                tracing::info!("draw: no pieces left");
                TurnOutcome::Finished(result)
            }
        }
    }
}

fn reject<T>(rejection: Rejection) -> Result<T, Rejection> {
    tracing::debug!("rejected: {}", rejection);
    Err(rejection)
}

// ============================================================================
// TESTS
// ============================================================================
