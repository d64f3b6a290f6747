use serde::{Deserialize, Serialize};

use crate::pieces::{shape_to_u8, Piece};
use crate::types::{SessionStatus, StopCause, BOARD_COLS, BOARD_ROWS, PIECE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub shape: [[u8; PIECE_SIZE]; PIECE_SIZE],
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            shape: shape_to_u8(&value.shape),
            x: value.x,
            y: value.y,
        }
    }
}

/// Plain-data copy of a session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: PieceSnapshot,
    pub next: [[u8; PIECE_SIZE]; PIECE_SIZE],
    pub status: SessionStatus,
    pub stop_cause: Option<StopCause>,
    pub clear_count: u32,
    pub ticks: u64,
    pub seed: u64,
}

impl GameSnapshot {
    /// Grid cells covered by the active piece, in grid coordinates
    pub fn active_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.active.shape.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(move |(j, _)| (self.active.x + j as i8, self.active.y + i as i8))
        })
    }

    /// Number of non-empty locked cells
    pub fn locked_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v != 0).count()
    }
}
