//! Game state module - the complete single-threaded session state
//!
//! Ties together board, active piece, piece queue, gravity timing, and the
//! render canvas. Every transition is a plain method call; the engine crate is
//! responsible for serializing calls from its two threads.

use log::{debug, info};

use crate::board::Board;
use crate::frame::{build_frame, Canvas, FrameInfo, FrameUpdate};
use crate::pieces::{shape_to_u8, Piece};
use crate::rng::PieceQueue;
use crate::rules::{can_move, can_rotate};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{
    Command, SessionStatus, StopCause, BOARD_COLS, BOARD_ROWS, GRAVITY_PERIOD_TICKS,
};

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// The active piece fell one row
    Moved,
    /// The active piece locked; the queued piece took its place
    Locked { rows_cleared: usize },
    /// The piece could not leave the ceiling; the session stopped
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    queue: PieceQueue,
    status: SessionStatus,
    stop_cause: Option<StopCause>,
    /// Lock events that cleared at least one row
    clear_count: u32,
    /// Base ticks seen so far (monotonic)
    ticks: u64,
    /// Base ticks per gravity step
    gravity_period: u32,
    canvas: Canvas,
}

impl GameState {
    /// Create a new running session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_queue(PieceQueue::new(seed))
    }

    pub fn with_queue(queue: PieceQueue) -> Self {
        Self::with_board(Board::new(), queue)
    }

    /// Start from a prepared grid.
    ///
    /// The board is expected to have the engine dimensions; cells outside them
    /// are never drawn.
    pub fn with_board(board: Board, mut queue: PieceQueue) -> Self {
        let active = queue.draw();
        Self {
            board,
            active,
            queue,
            status: SessionStatus::Running,
            stop_cause: None,
            clear_count: 0,
            ticks: 0,
            gravity_period: GRAVITY_PERIOD_TICKS,
            canvas: Canvas::new(),
        }
    }

    /// Override the number of base ticks per gravity step (minimum 1)
    pub fn with_gravity_period(mut self, period: u32) -> Self {
        self.gravity_period = period.max(1);
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn stop_cause(&self) -> Option<StopCause> {
        self.stop_cause
    }

    pub fn clear_count(&self) -> u32 {
        self.clear_count
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn gravity_period(&self) -> u32 {
        self.gravity_period
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        self.queue.peek()
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Apply one command and return the resulting status.
    ///
    /// Refused moves and rotations leave everything unchanged. A stopped
    /// session ignores every command.
    pub fn apply_command(&mut self, command: Command) -> SessionStatus {
        if !self.is_running() {
            return self.status;
        }

        match command {
            Command::MoveLeft => {
                self.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.try_move(1, 0);
            }
            Command::SoftDrop => {
                self.try_move(0, 1);
            }
            Command::RotateCw => {
                self.try_rotate(true);
            }
            Command::RotateCcw => {
                self.try_rotate(false);
            }
            Command::Abort => self.abort(),
        }

        self.status
    }

    /// Apply an input symbol; unrecognized symbols are no-ops
    pub fn apply_symbol(&mut self, symbol: char) -> SessionStatus {
        match Command::from_symbol(symbol) {
            Some(command) => self.apply_command(command),
            None => self.status,
        }
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() || !can_move(&self.board, &self.active, dx, dy) {
            return false;
        }
        self.active = self.active.shifted(dx, dy);
        true
    }

    /// Try to rotate the active piece in place (no kicks)
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.is_running() || !can_rotate(&self.board, &self.active, clockwise) {
            return false;
        }
        self.active = self.active.rotated(clockwise);
        true
    }

    /// Stop the session. No-op once stopped.
    pub fn abort(&mut self) {
        self.stop(StopCause::Aborted);
    }

    fn stop(&mut self, cause: StopCause) {
        if self.is_running() {
            self.status = SessionStatus::Stopped;
            self.stop_cause = Some(cause);
        }
    }

    /// Advance the base timer by one tick.
    ///
    /// A gravity step runs on every tick where the counter is a multiple of the
    /// gravity period, starting with the very first tick.
    pub fn base_tick(&mut self) -> Option<GravityOutcome> {
        if !self.is_running() {
            return None;
        }
        let fire = self.ticks % self.gravity_period as u64 == 0;
        self.ticks += 1;
        if fire {
            self.gravity_step()
        } else {
            None
        }
    }

    /// Try to drop the active piece one row; lock it or end the game if it can't.
    pub fn gravity_step(&mut self) -> Option<GravityOutcome> {
        if !self.is_running() {
            return None;
        }

        if can_move(&self.board, &self.active, 0, 1) {
            self.active = self.active.shifted(0, 1);
            return Some(GravityOutcome::Moved);
        }

        if self.active.y < 0 {
            info!(
                "spawn blocked at ({}, {}), game over after {} clears",
                self.active.x, self.active.y, self.clear_count
            );
            self.stop(StopCause::SpawnBlocked);
            return Some(GravityOutcome::GameOver);
        }

        self.board.lock_piece(&self.active);
        self.active = self.queue.draw();
        let rows_cleared = self.board.clear_full_rows();
        if rows_cleared > 0 {
            self.clear_count += 1;
        }
        debug!(
            "piece locked, {} rows cleared, clear count {}",
            rows_cleared, self.clear_count
        );

        Some(GravityOutcome::Locked { rows_cleared })
    }

    fn frame_info(&self) -> FrameInfo<'_> {
        FrameInfo {
            preview: &self.queue.peek().shape,
            clear_count: self.clear_count,
            status: self.status,
            stop_cause: self.stop_cause,
        }
    }

    /// Cells changed since the previous frame, plus preview and counters
    pub fn frame(&mut self) -> FrameUpdate {
        let composite = Canvas::compose(&self.board, &self.active);
        let changes = self.canvas.diff(&composite);
        build_frame(changes, self.frame_info())
    }

    /// A frame listing every cell, for a renderer starting from scratch
    pub fn full_frame(&mut self) -> FrameUpdate {
        let composite = Canvas::compose(&self.board, &self.active);
        let changes = self.canvas.full(&composite);
        build_frame(changes, self.frame_info())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize];
        self.board.write_u8_grid(&mut board);
        GameSnapshot {
            board,
            active: PieceSnapshot::from(&self.active),
            next: shape_to_u8(&self.queue.peek().shape),
            status: self.status,
            stop_cause: self.stop_cause,
            clear_count: self.clear_count,
            ticks: self.ticks,
            seed: self.queue.seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellColor;

    #[test]
    fn test_new_session_is_running_with_spawned_piece() {
        let state = GameState::new(12345);
        assert!(state.is_running());
        assert_eq!((state.active().x, state.active().y), (3, -4));
        assert_eq!(state.clear_count(), 0);
        assert!(state.board().cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_first_tick_steps_then_waits_a_period() {
        let mut state = GameState::new(1).with_gravity_period(3);
        assert_eq!(state.base_tick(), Some(GravityOutcome::Moved));
        assert_eq!(state.base_tick(), None);
        assert_eq!(state.base_tick(), None);
        assert_eq!(state.base_tick(), Some(GravityOutcome::Moved));
        assert_eq!(state.ticks(), 4);
        assert_eq!(state.active().y, -2);
    }

    #[test]
    fn test_commands_ignored_after_abort() {
        let mut state = GameState::new(5);
        assert_eq!(state.apply_command(Command::Abort), SessionStatus::Stopped);
        assert_eq!(state.stop_cause(), Some(StopCause::Aborted));

        let before = *state.active();
        assert_eq!(state.apply_command(Command::SoftDrop), SessionStatus::Stopped);
        assert_eq!(*state.active(), before);
        assert_eq!(state.base_tick(), None);
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    fn test_unknown_symbol_is_noop() {
        let mut state = GameState::new(5);
        let before = *state.active();
        assert_eq!(state.apply_symbol('q'), SessionStatus::Running);
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_piece_falls_and_locks_on_floor() {
        let mut state = GameState::new(77);
        let color = state.active().color().unwrap();
        let mut steps = 0;
        loop {
            match state.gravity_step() {
                Some(GravityOutcome::Moved) => steps += 1,
                Some(GravityOutcome::Locked { rows_cleared }) => {
                    assert_eq!(rows_cleared, 0);
                    break;
                }
                other => panic!("unexpected outcome {:?}", other),
            }
            assert!(steps < 40);
        }
        let locked = state.board().cells().iter().filter(|&&c| c == color).count();
        assert_eq!(locked, 4);
        assert_eq!((state.active().x, state.active().y), (3, -4));
        assert!(state.board().cells().iter().all(|c| *c == CellColor::EMPTY || *c == color));
    }
}
