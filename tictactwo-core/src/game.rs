//! Game state: board occupancy, grid anchor, turn owner and piece counter

use serde::{Deserialize, Serialize};

use crate::board::{
    Board, Direction, Position, BOARD_SIZE, GRID_SIZE, MOVEMENT_THRESHOLD, TOTAL_PIECES,
};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl GameResult {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameResult::XWins,
            Player::O => GameResult::OWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// Phase derived from `grid_position` and `pieces_left`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    GridPlacement,
    Placement,
    Movement,
}

/// Value copy of the state for presentation layers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player: Player,
    pub grid_placed: bool,
    pub grid_position: Option<Position>,
    pub pieces_left: u8,
    pub phase: Phase,
    pub cells: Vec<Option<Player>>,
    pub grid_cells: Vec<usize>,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Authoritative mutable game record (clone to simulate)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,

    /// Whose turn it is
    turn_owner: Player,

    /// Top-left anchor of the grid; None until placed
    grid_position: Option<Position>,

    /// Shared placement counter in `0..=TOTAL_PIECES`
    pieces_left: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_owner: Player::X,
            grid_position: None,
            pieces_left: TOTAL_PIECES,
        }
    }

    /// Back to the opening position with an empty board
    pub fn reset_state(&mut self) {
        self.board.clear();
        self.turn_owner = Player::X;
        self.grid_position = None;
        self.pieces_left = TOTAL_PIECES;
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.turn_owner
    }

    pub fn grid_placed(&self) -> bool {
        self.grid_position.is_some()
    }

    pub fn grid_position(&self) -> Option<Position> {
        self.grid_position
    }

    pub fn pieces_left(&self) -> u8 {
        self.pieces_left
    }

    pub fn is_in_movement_phase(&self) -> bool {
        self.pieces_left <= MOVEMENT_THRESHOLD
    }

    pub fn phase(&self) -> Phase {
        if !self.grid_placed() {
            Phase::GridPlacement
        } else if self.is_in_movement_phase() {
            Phase::Movement
        } else {
            Phase::Placement
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.turn_owner,
            grid_placed: self.grid_placed(),
            grid_position: self.grid_position,
            pieces_left: self.pieces_left,
            phase: self.phase(),
            cells: self.board.cells(),
            grid_cells: self.grid_cell_indexes(),
        }
    }

    // ========================================================================
    // GRID
    // ========================================================================

    /// Anchor keeps the whole grid on the board
    pub fn is_valid_grid_placement(row: i8, col: i8) -> bool {
        let max = BOARD_SIZE - GRID_SIZE;
        (0..=max).contains(&row) && (0..=max).contains(&col)
    }

    /// Place (or relocate) the grid; false leaves state untouched
    pub fn set_grid_position(&mut self, row: i8, col: i8) -> bool {
        if !Self::is_valid_grid_placement(row, col) {
            return false;
        }
        self.grid_position = Some(Position::new(row, col));
        true
    }

    /// Shift a placed grid by one step; `Stay` always succeeds once placed
    pub fn move_grid(&mut self, direction: Direction) -> bool {
        let Some(anchor) = self.grid_position else {
            return false;
        };
        let target = anchor.offset(direction);
        if !Self::is_valid_grid_placement(target.row, target.col) {
            return false;
        }
        self.grid_position = Some(target);
        true
    }

    /// Global indices of the grid cells, row-major; empty when unplaced.
    ///
    /// The i-th entry is local cell i for win evaluation.
    pub fn grid_cell_indexes(&self) -> Vec<usize> {
        let Some(anchor) = self.grid_position else {
            return Vec::new();
        };
        let n = BOARD_SIZE as usize;
        let g = GRID_SIZE as usize;
        let (row, col) = (anchor.row as usize, anchor.col as usize);

        let mut indexes = Vec::with_capacity(g * g);
        for r in row..row + g {
            for c in col..col + g {
                indexes.push(r * n + c);
            }
        }
        indexes
    }

    pub fn is_in_grid(&self, index: usize) -> bool {
        let (Some(anchor), Some(pos)) = (self.grid_position, Position::from_index(index)) else {
            return false;
        };
        (anchor.row..anchor.row + GRID_SIZE).contains(&pos.row)
            && (anchor.col..anchor.col + GRID_SIZE).contains(&pos.col)
    }

    // ========================================================================
    // TURNS AND COUNTERS
    // ========================================================================

    pub fn swap_turns(&mut self) {
        self.turn_owner = self.turn_owner.opponent();
    }

    pub fn decrease_pieces_left(&mut self) {
        self.pieces_left = self.pieces_left.saturating_sub(1);
    }

    pub fn increase_pieces_left(&mut self) {
        if self.pieces_left < TOTAL_PIECES {
            self.pieces_left += 1;
        }
    }

    // ========================================================================
    // OCCUPANCY
    // ========================================================================

    /// Mark an empty cell for `player`. Counters are the caller's business.
    pub fn occupy(&mut self, index: usize, player: Player) -> bool {
        self.board.occupy(index, player)
    }

    /// Clear a cell, returning the previous owner
    pub fn vacate(&mut self, index: usize) -> Option<Player> {
        self.board.vacate(index)
    }
}

// ============================================================================
// TESTS
// ============================================================================
