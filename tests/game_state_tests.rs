//! Game state tests - gravity, locking, game over and state invariants

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wastedris::core::{Board, GameState, GravityOutcome, PieceQueue};
use wastedris::types::{
    CellColor, Command, SessionStatus, StopCause, BOARD_COLS, BOARD_ROWS, GRAVITY_PERIOD_TICKS,
};

const SYMBOLS: [char; 8] = ['C', 'D', 'B', ' ', 'x', 'z', 'q', 'A'];

/// Active piece inside the walls, above the floor, and never on a locked cell.
fn assert_invariants(state: &GameState) {
    for (x, y, _) in state.active().cells() {
        assert!((0..BOARD_COLS as i8).contains(&x), "x={} out of bounds", x);
        assert!(y < BOARD_ROWS as i8, "y={} below floor", y);
        if y >= 0 {
            assert_eq!(
                state.board().get(x, y),
                Some(CellColor::EMPTY),
                "active overlaps locked cell at ({}, {})",
                x,
                y
            );
        }
    }
}

fn filled_board(rows: std::ops::Range<i8>, except_col: Option<i8>) -> Board {
    let mut board = Board::new();
    let color = CellColor::new(7).unwrap();
    for y in rows {
        for x in 0..BOARD_COLS as i8 {
            if Some(x) != except_col {
                board.set(x, y, color);
            }
        }
    }
    board
}

#[test]
fn test_random_play_keeps_invariants() {
    for seed in 0..20u64 {
        let mut driver = StdRng::seed_from_u64(seed ^ 0xabcd);
        let mut state = GameState::new(seed).with_gravity_period(3);
        assert_invariants(&state);

        for _ in 0..3_000 {
            if driver.gen_bool(0.5) {
                state.apply_symbol(SYMBOLS[driver.gen_range(0..SYMBOLS.len())]);
            } else {
                state.base_tick();
            }
            assert_invariants(&state);
            if !state.is_running() {
                assert_eq!(state.stop_cause(), Some(StopCause::SpawnBlocked));
                break;
            }
        }
    }
}

#[test]
fn test_default_gravity_period() {
    let mut state = GameState::new(1);
    assert_eq!(state.gravity_period(), GRAVITY_PERIOD_TICKS);
    assert_eq!(state.base_tick(), Some(GravityOutcome::Moved));
    for _ in 1..GRAVITY_PERIOD_TICKS {
        assert_eq!(state.base_tick(), None);
    }
    assert_eq!(state.base_tick(), Some(GravityOutcome::Moved));
}

#[test]
fn test_lock_clears_prefilled_row_and_counts_once() {
    let board = filled_board(12..13, None);
    let mut state = GameState::with_board(board, PieceQueue::new(11));
    let next = *state.next_piece();

    let outcome = loop {
        match state.gravity_step() {
            Some(GravityOutcome::Moved) => continue,
            other => break other,
        }
    };
    assert_eq!(outcome, Some(GravityOutcome::Locked { rows_cleared: 1 }));
    assert_eq!(state.clear_count(), 1);
    // The queued piece became active at the spawn anchor.
    assert_eq!(*state.active(), next);
    assert_eq!(state.snapshot().locked_count(), 4);
}

#[test]
fn test_lock_without_clear_keeps_count() {
    let mut state = GameState::new(5);
    while let Some(GravityOutcome::Moved) = state.gravity_step() {}
    assert_eq!(state.clear_count(), 0);
    assert_eq!(state.snapshot().locked_count(), 4);
}

#[test]
fn test_spawn_blocked_is_game_over() {
    let board = filled_board(0..BOARD_ROWS as i8, Some(0));
    let mut state = GameState::with_board(board.clone(), PieceQueue::new(2));

    let mut steps = 0;
    let outcome = loop {
        match state.gravity_step() {
            Some(GravityOutcome::Moved) => steps += 1,
            other => break other,
        }
        assert!(steps <= 4);
    };
    assert_eq!(outcome, Some(GravityOutcome::GameOver));
    assert_eq!(state.status(), SessionStatus::Stopped);
    assert_eq!(state.stop_cause(), Some(StopCause::SpawnBlocked));
    assert!(state.active().y < 0);
    // Nothing was locked on game over.
    assert_eq!(state.board(), &board);

    assert_eq!(state.gravity_step(), None);
    assert_eq!(state.apply_command(Command::MoveLeft), SessionStatus::Stopped);
}

#[test]
fn test_refused_move_changes_nothing() {
    let mut state = GameState::new(8);
    while state.try_move(-1, 0) {}
    let before = state.snapshot();
    assert_eq!(state.apply_command(Command::MoveLeft), SessionStatus::Running);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_abort_stops_once() {
    let mut state = GameState::new(8);
    assert_eq!(state.apply_symbol('\x04'), SessionStatus::Stopped);
    assert_eq!(state.stop_cause(), Some(StopCause::Aborted));
    state.abort();
    assert_eq!(state.stop_cause(), Some(StopCause::Aborted));
}

#[test]
fn test_frames_follow_the_composite() {
    let mut state = GameState::new(13).with_gravity_period(1);
    let full = state.full_frame();
    assert_eq!(full.changes.len(), (BOARD_COLS as usize) * (BOARD_ROWS as usize));
    assert_eq!(full.preview, state.next_piece().shape);
    assert!(full.message.is_empty());

    // Nothing changed since the full frame.
    assert!(state.frame().changes.is_empty());

    // Fall until the piece shows up in row 0.
    let mut drawn = 0;
    for _ in 0..4 {
        state.base_tick();
        drawn += state.frame().changes.iter().filter(|c| !c.color.is_empty()).count();
    }
    let visible = state.active().cells().filter(|&(_, y, _)| y >= 0).count();
    assert!(visible > 0);
    assert!(drawn >= visible);
}
