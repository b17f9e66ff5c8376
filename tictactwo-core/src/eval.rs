//! Win and draw evaluation inside the grid's local 3x3 space

use crate::board::Board;
use crate::game::{GameResult, GameState, Player};

/// Rows, columns and diagonals of the grid, as local cell indices (0..9)
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Local indices of `grid` (global, row-major) holding `player`'s pieces
fn local_cells(board: &Board, grid: &[usize], player: Player) -> [bool; 9] {
    let mut owned = [false; 9];
    for (local, &global) in grid.iter().enumerate().take(9) {
        owned[local] = board.get(global) == Some(player);
    }
    owned
}

/// Win check against an arbitrary board and grid mapping.
///
/// `grid` must come from `GameState::grid_cell_indexes`; an empty grid never wins.
pub fn check_win_on(board: &Board, grid: &[usize], player: Player) -> bool {
    first_line(board, grid, player).is_some()
}

fn first_line(board: &Board, grid: &[usize], player: Player) -> Option<[usize; 3]> {
    if grid.len() != 9 {
        return None;
    }
    let owned = local_cells(board, grid, player);
    WINNING_COMBINATIONS
        .iter()
        .find(|line| line.iter().all(|&local| owned[local]))
        .map(|line| line.map(|local| grid[local]))
}

/// Has `player` completed a line inside the current grid
pub fn check_win(state: &GameState, player: Player) -> bool {
    check_win_on(state.board(), &state.grid_cell_indexes(), player)
}

/// Global indices of the first completed line for `player`
pub fn winning_line(state: &GameState, player: Player) -> Option<[usize; 3]> {
    first_line(state.board(), &state.grid_cell_indexes(), player)
}

/// Only the shared counter matters here
pub fn is_draw(state: &GameState) -> bool {
    state.pieces_left() == 0
}

/// Terminal check. X is tested before O, and either win beats a draw.
pub fn evaluate(state: &GameState) -> GameResult {
    if check_win(state, Player::X) {
        GameResult::XWins
    } else if check_win(state, Player::O) {
        GameResult::OWins
    } else if is_draw(state) {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}
