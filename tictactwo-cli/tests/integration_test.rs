//! Integration tests for the Tic-Tac-Two engine
//!
//! Tests the full stack: game state, evaluation, orchestration, AI and runner

use tictactwo_core::{
    board::{Direction, Position, DIRECTIONS},
    eval::{check_win, check_win_on, evaluate, is_draw},
    game::{GameResult, GameState, Phase, Player},
    session::{Action, GameSession, Rejection, TurnOutcome},
    stats::{GameStats, NoStats},
    AiConfig, GameRunner, GreedyAi, RunnerConfig,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn play(session: &mut GameSession, stats: &mut GameStats, actions: &[Action]) -> Vec<TurnOutcome> {
    let mut outcomes = Vec::with_capacity(actions.len());
    for &action in actions {
        outcomes.push(session.apply(action, stats).expect("action should be accepted"));
    }
    outcomes
}

fn clicks(indices: &[usize]) -> Vec<Action> {
    indices.iter().map(|&i| Action::Click(i)).collect()
}

// ============================================================================
// GAME STATE TESTS
// ============================================================================

#[test]
fn test_starting_state() {
    let state = GameState::new();
    assert_eq!(state.pieces_left(), 8);
    assert!(!state.grid_placed());
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.phase(), Phase::GridPlacement);
}

#[test]
fn test_grid_anchor_bounds_exhaustive() {
    for row in -3i8..8 {
        for col in -3i8..8 {
            let mut state = GameState::new();
            let valid = (0..=2).contains(&row) && (0..=2).contains(&col);
            assert_eq!(state.set_grid_position(row, col), valid, "anchor ({}, {})", row, col);
            assert_eq!(state.grid_placed(), valid);
            assert_eq!(state.grid_cell_indexes().len(), if valid { 9 } else { 0 });
        }
    }
}

#[test]
fn test_every_direction_from_center() {
    for direction in DIRECTIONS {
        let mut state = GameState::new();
        state.set_grid_position(1, 1);
        assert!(state.move_grid(direction));
        let (dr, dc) = direction.delta();
        assert_eq!(state.grid_position(), Some(Position::new(1 + dr, 1 + dc)));
    }
}

// ============================================================================
// FULL GAME TESTS
// ============================================================================

#[test]
fn test_local_top_row_wins_immediately() {
    let mut session = GameSession::new();
    let mut stats = GameStats::default();

    // Grid at (1, 1); X at (1,1),(1,2),(1,3); O elsewhere in the grid
    let outcomes = play(&mut session, &mut stats, &clicks(&[6, 6, 16, 7, 17, 8]));
    assert_eq!(outcomes.first(), Some(&TurnOutcome::GridPlaced(Position::new(1, 1))));
    assert_eq!(outcomes.last(), Some(&TurnOutcome::Finished(GameResult::XWins)));
    assert!(check_win(session.state(), Player::X));
    assert_eq!(session.state().current_player(), Player::X);
    assert_eq!(stats, GameStats { x_wins: 1, o_wins: 0, draws: 0, total_games: 1 });
}

#[test]
fn test_full_draw() {
    let mut session = GameSession::new();
    let mut stats = GameStats::default();

    // Grid at (0, 0). X: 0, 2, 5, 11  O: 1, 6, 7, 10
    //   X O X
    //   X O O
    //   O X .
    play(&mut session, &mut stats, &clicks(&[0, 0, 1, 2, 6, 5, 7, 11, 10]));

    assert_eq!(session.result(), GameResult::Draw);
    assert_eq!(session.state().pieces_left(), 0);
    assert!(is_draw(session.state()));
    assert_eq!(stats.draws, 1);
}

#[test]
fn test_movement_phase_pickup_and_grid_shift() {
    let mut session = GameSession::new();
    let mut stats = GameStats::default();

    // Grid at (1, 1), then X 6, O 7, X 8, O 11
    play(&mut session, &mut stats, &clicks(&[6, 6, 7, 8, 11]));
    assert_eq!(session.state().phase(), Phase::Movement);

    // X tries to lift O's piece: refused, turn passes anyway
    assert_eq!(
        session.apply(Action::Click(7), &mut stats),
        Ok(TurnOutcome::PickupRefused { index: 7 })
    );
    assert_eq!(session.state().current_player(), Player::O);

    // O lifts its own piece
    assert_eq!(
        session.apply(Action::Click(11), &mut stats),
        Ok(TurnOutcome::PickedUp { index: 11, player: Player::O })
    );
    assert_eq!(session.state().pieces_left(), 5);
    assert_eq!(session.state().phase(), Phase::Placement);

    // Back in placement: X places, grid moves are refused
    assert_eq!(
        session.apply(Action::MoveGrid(Direction::Down), &mut stats),
        Err(Rejection::NotMovementPhase)
    );
    assert_eq!(session.state().current_player(), Player::X);
    play(&mut session, &mut stats, &clicks(&[12]));
    assert_eq!(session.state().pieces_left(), 4);

    // O shifts the grid
    assert_eq!(
        session.apply(Action::MoveGrid(Direction::DownLeft), &mut stats),
        Ok(TurnOutcome::GridMoved(Position::new(2, 0)))
    );
    assert_eq!(session.state().current_player(), Player::X);
    assert_eq!(stats.total_games, 0);
}

#[test]
fn test_line_tracks_grid_anchor() {
    // X on global column 3, rows 1..4
    let mut state = GameState::new();
    state.set_grid_position(1, 2);
    for index in [8, 13, 18] {
        state.occupy(index, Player::X);
    }
    // Local column 1
    assert!(check_win(&state, Player::X));

    // Local column 2
    state.move_grid(Direction::Left);
    assert!(check_win(&state, Player::X));

    // Column 3 is outside the grid
    state.move_grid(Direction::Left);
    assert_eq!(state.grid_position(), Some(Position::new(1, 0)));
    assert!(!check_win(&state, Player::X));
}

#[test]
fn test_evaluator_reads_hypothetical_boards() {
    let mut state = GameState::new();
    state.set_grid_position(2, 2);
    let grid = state.grid_cell_indexes();

    let mut board = state.board().clone();
    for &index in &grid[6..9] {
        board.occupy(index, Player::O);
    }
    assert!(check_win_on(&board, &grid, Player::O));
    assert_eq!(evaluate(&state), GameResult::Ongoing);
}

// ============================================================================
// AI AND RUNNER TESTS
// ============================================================================

#[test]
fn test_ai_plays_a_whole_game() {
    let mut session = GameSession::new();
    let mut ai = GreedyAi::with_seed(2024);
    let mut stats = GameStats::default();

    let mut turns = 0;
    while !session.is_over() {
        session.make_ai_move(&mut ai, &mut stats).expect("AI move accepted");
        turns += 1;
        assert!(turns <= 9);
    }
    assert_eq!(stats.total_games, 1);
    assert_eq!(
        session.make_ai_move(&mut ai, &mut stats),
        Err(Rejection::GameOver(session.result()))
    );
}

#[test]
fn test_ai_finishes_open_line() {
    let mut session = GameSession::new();
    // Grid at (0, 0): X 0, O 10, X 1, O 11
    play(&mut session, &mut GameStats::default(), &clicks(&[0, 0, 10, 1, 11]));

    let mut ai = GreedyAi::with_seed(5);
    assert_eq!(
        session.make_ai_move(&mut ai, &mut NoStats),
        Ok(TurnOutcome::Finished(GameResult::XWins))
    );
    assert_eq!(session.state().board().get(2), Some(Player::X));
}

#[test]
fn test_runner_batch() {
    let config = RunnerConfig::new(25).with_ai(AiConfig::default().with_seed(8));
    let stats = GameRunner::new(config).run();
    assert_eq!(stats.total_games, 25);
    assert_eq!(stats.x_wins + stats.o_wins + stats.draws, 25);
}
