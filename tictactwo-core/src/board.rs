//! Board geometry and occupancy for the 5x5 board

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Side length of the board
pub const BOARD_SIZE: i8 = 5;

/// Side length of the movable grid
pub const GRID_SIZE: i8 = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Pieces available at game start (shared counter, 4 per side in practice)
pub const TOTAL_PIECES: u8 = 8;

/// `pieces_left` at or below this means the movement phase has begun
pub const MOVEMENT_THRESHOLD: u8 = 4;

/// Board coordinates (row, col)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this position is on the board
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Linear index `row * N + col`; None when off the board
    pub fn index(&self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let n = BOARD_SIZE as usize;
        Some(Self::new((index / n) as i8, (index % n) as i8))
    }

    /// Offset by a direction (may leave the board)
    pub fn offset(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

/// Grid movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Stay,
    Right,
    DownLeft,
    Down,
    DownRight,
}

/// All directions, row-major (matches a 3x3 button pad)
pub const DIRECTIONS: [Direction; 9] = [
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
    Direction::Left,
    Direction::Stay,
    Direction::Right,
    Direction::DownLeft,
    Direction::Down,
    Direction::DownRight,
];

impl Direction {
    /// Unit vector (d_row, d_col)
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Stay => (0, 0),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Board occupancy (sparse: index -> owner)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: FxHashMap<usize, Player>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the piece at `index`, if any
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(&index).copied()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        !self.cells.contains_key(&index)
    }

    /// Put a piece on an empty on-board cell
    pub fn occupy(&mut self, index: usize, player: Player) -> bool {
        if index >= CELL_COUNT || self.cells.contains_key(&index) {
            return false;
        }
        self.cells.insert(index, player);
        true
    }

    /// Remove and return the piece at `index`
    pub fn vacate(&mut self, index: usize) -> Option<Player> {
        self.cells.remove(&index)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Dense row-major view of every cell
    pub fn cells(&self) -> Vec<Option<Player>> {
        (0..CELL_COUNT).map(|i| self.get(i)).collect()
    }

    /// Indices holding `player`'s pieces, ascending
    pub fn pieces_of(&self, player: Player) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .cells
            .iter()
            .filter(|&(_, &owner)| owner == player)
            .map(|(&index, _)| index)
            .collect();
        indices.sort_unstable();
        indices
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.len()
    }
}
