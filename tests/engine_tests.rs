//! Engine tests - concurrent sessions, serial replay, shutdown and restart

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wastedris::core::{Board, GameSnapshot};
use wastedris::engine::journal::TransitionEvent;
use wastedris::engine::{
    drive, Engine, EngineError, ManualTicker, NullRenderer, RecordingRenderer, ScriptedInput,
    Session, SessionOptions, SleepTicker,
};
use wastedris::term::DisplayState;
use wastedris::types::{CellColor, SessionStatus, StopCause, BOARD_COLS, BOARD_ROWS};

const SYMBOLS: [char; 7] = ['C', 'D', 'B', ' ', 'x', 'z', '?'];

fn assert_snapshot_invariants(snap: &GameSnapshot) {
    for (x, y) in snap.active_cells() {
        assert!((0..BOARD_COLS as i8).contains(&x));
        assert!(y < BOARD_ROWS as i8);
        if y >= 0 {
            assert_eq!(snap.board[y as usize][x as usize], 0, "overlap at ({}, {})", x, y);
        }
    }
}

/// What the screen should show for a snapshot: locked cells plus the visible part of the piece.
fn composite(snap: &GameSnapshot) -> Vec<u8> {
    let mut grid = snap.board;
    for (i, row) in snap.active.shape.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            let (x, y) = (snap.active.x + j as i8, snap.active.y + i as i8);
            if v != 0 && (0..BOARD_COLS as i8).contains(&x) && (0..BOARD_ROWS as i8).contains(&y) {
                grid[y as usize][x as usize] = v;
            }
        }
    }
    grid.iter().flatten().copied().collect()
}

fn shown(display: &DisplayState) -> Vec<u8> {
    (0..BOARD_ROWS)
        .flat_map(|y| (0..BOARD_COLS).map(move |x| (x, y)))
        .map(|(x, y)| display.cell(x, y).index())
        .collect()
}

#[test]
fn test_concurrent_commands_and_gravity_are_serializable() {
    let frames = RecordingRenderer::new();
    let options = SessionOptions::new()
        .with_seed(2024)
        .with_base_interval(Duration::from_micros(50))
        .with_gravity_period(4)
        .with_journal(true);
    let session = Session::start(options.clone(), Box::new(frames.clone())).unwrap();

    thread::scope(|s| {
        for t in 0..2u64 {
            let session = &session;
            s.spawn(move || {
                let mut rng = StdRng::seed_from_u64(t);
                for _ in 0..1_500 {
                    session.submit(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
                }
            });
        }
    });
    // Freeze the state; later base ticks are recorded but change nothing.
    assert_eq!(session.submit('\x04'), SessionStatus::Stopped);

    let journal = session.journal();
    let final_snapshot = session.snapshot();
    assert_eq!(session.replay_divergence(options.initial_state()), None);

    let symbols = journal
        .iter()
        .filter(|t| matches!(t.event, TransitionEvent::Symbol(_)))
        .count();
    assert_eq!(symbols, 3_001);
    for t in &journal {
        assert_snapshot_invariants(&t.after);
    }
    assert_eq!(journal.last().map(|t| t.after), Some(final_snapshot));

    session.stop().unwrap();

    // Frames arrive in transition order: folding them reproduces the final screen.
    let mut display = DisplayState::new();
    for frame in frames.frames() {
        display.apply(&frame);
    }
    let last = frames.frames().last().map(|f| f.status);
    assert_eq!(last, Some(SessionStatus::Stopped));
    let after_teardown = journal.last().map(|t| t.after).unwrap();
    assert_eq!(shown(&display), composite(&after_teardown));
}

#[test]
fn test_manual_ticks_reach_game_over() {
    let mut board = Board::new();
    let color = CellColor::new(6).unwrap();
    for y in 0..BOARD_ROWS as i8 {
        for x in 1..BOARD_COLS as i8 {
            board.set(x, y, color);
        }
    }

    let (ticker, clock) = ManualTicker::new();
    let frames = RecordingRenderer::new();
    let options = SessionOptions::new()
        .with_seed(1)
        .with_gravity_period(1)
        .with_board(board);
    let session = Session::start_with_ticker(options, Box::new(ticker), Box::new(frames.clone())).unwrap();

    let mut ticks = 0;
    while session.is_running() {
        assert!(clock.advance());
        ticks += 1;
        assert!(ticks <= 5);
    }

    assert_eq!(session.stop_cause(), Some(StopCause::SpawnBlocked));
    assert!(frames.frames().last().unwrap().is_game_over());
    // Commands after game over are ignored.
    let before = session.snapshot();
    assert_eq!(session.submit('D'), SessionStatus::Stopped);
    assert_eq!(session.snapshot(), before);

    session.stop().unwrap();
}

#[test]
fn test_drive_until_scripted_abort() {
    let (ticker, _clock) = ManualTicker::new();
    let session = Session::start_with_ticker(
        SessionOptions::new().with_seed(3),
        Box::new(ticker),
        Box::new(NullRenderer),
    )
    .unwrap();

    let mut input = ScriptedInput::new("CCz".chars());
    assert_eq!(drive(&session, &mut input).unwrap(), SessionStatus::Stopped);
    assert_eq!(session.stop_cause(), Some(StopCause::Aborted));
    session.stop().unwrap();
}

#[test]
fn test_drop_tears_down_running_session() {
    let frames = RecordingRenderer::new();
    {
        let _session = Session::start_with_ticker(
            SessionOptions::new().with_seed(4),
            Box::new(SleepTicker::new(Duration::from_millis(1))),
            Box::new(frames.clone()),
        )
        .unwrap();
        thread::sleep(Duration::from_millis(10));
    }
    let count = frames.len();
    assert_eq!(frames.frames().last().unwrap().status, SessionStatus::Stopped);

    // The gravity thread is gone: nothing renders any more.
    thread::sleep(Duration::from_millis(20));
    assert_eq!(frames.len(), count);
}

#[test]
fn test_engine_restart_replaces_gravity_thread() {
    let first = RecordingRenderer::new();
    let second = RecordingRenderer::new();
    let fast = || {
        SessionOptions::new()
            .with_base_interval(Duration::from_millis(1))
            .with_gravity_period(1)
    };

    let mut engine = Engine::new();
    engine.start(fast().with_seed(1), Box::new(first.clone())).unwrap();
    thread::sleep(Duration::from_millis(10));
    engine.start(fast().with_seed(2), Box::new(second.clone())).unwrap();

    let frozen = first.len();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(first.len(), frozen);
    assert!(!second.is_empty());
    assert_eq!(engine.snapshot().map(|s| s.seed), Some(2));

    engine.stop().unwrap();
    assert!(matches!(engine.submit('C'), Err(EngineError::NoSession)));
}
