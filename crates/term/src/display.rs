//! What the terminal currently shows, rebuilt from frame updates.

use crate::core::{FrameUpdate, MessageLines, Shape};
use crate::core::pieces::EMPTY_SHAPE;
use crate::types::{CellColor, SessionStatus, StopCause, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// Accumulated display model.
///
/// Cell diffs are applied on top of the previous contents; the preview,
/// message and status are replaced wholesale by every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    cells: [CellColor; BOARD_CELLS],
    pub preview: Shape,
    pub message: MessageLines,
    pub status: SessionStatus,
    pub stop_cause: Option<StopCause>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cells: [CellColor::EMPTY; BOARD_CELLS],
            preview: EMPTY_SHAPE,
            message: MessageLines::new(),
            status: SessionStatus::Running,
            stop_cause: None,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, frame: &FrameUpdate) {
        for change in &frame.changes {
            if change.x < BOARD_COLS && change.y < BOARD_ROWS {
                self.cells[change.y as usize * BOARD_COLS as usize + change.x as usize] =
                    change.color;
            }
        }
        self.preview = frame.preview;
        self.message = frame.message.clone();
        self.status = frame.status;
        self.stop_cause = frame.stop_cause;
    }

    pub fn cell(&self, x: u8, y: u8) -> CellColor {
        if x >= BOARD_COLS || y >= BOARD_ROWS {
            return CellColor::EMPTY;
        }
        self.cells[y as usize * BOARD_COLS as usize + x as usize]
    }

    pub fn is_game_over(&self) -> bool {
        self.stop_cause == Some(StopCause::SpawnBlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn diffs_accumulate_to_the_composite() {
        let mut game = GameState::new(21).with_gravity_period(1);
        let mut display = DisplayState::new();
        display.apply(&game.full_frame());
        for _ in 0..8 {
            game.gravity_step();
            display.apply(&game.frame());
        }

        let snap = game.snapshot();
        for (x, y) in snap.active_cells() {
            if y >= 0 {
                assert!(!display.cell(x as u8, y as u8).is_empty());
            }
        }
        assert_eq!(display.preview, game.next_piece().shape);
    }
}
