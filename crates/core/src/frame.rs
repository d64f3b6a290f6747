//! Frame module - what a renderer gets after every state change
//!
//! The canvas remembers the last composite (board with the active piece drawn
//! over it) it handed out. Each new frame carries only the cells whose color
//! changed since then, plus the full preview matrix and the clear count.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::message::{message_lines, MessageLines};
use crate::pieces::{Piece, Shape};
use crate::types::{CellColor, SessionStatus, StopCause, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// One changed cell. `color == CellColor::EMPTY` means erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: u8,
    pub y: u8,
    pub color: CellColor,
}

/// Everything a renderer needs to bring its display up to date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Changed board cells, row-major order
    pub changes: ArrayVec<CellChange, BOARD_CELLS>,
    /// The queued piece's full 4x4 matrix
    pub preview: Shape,
    pub clear_count: u32,
    pub message: MessageLines,
    pub status: SessionStatus,
    pub stop_cause: Option<StopCause>,
}

impl FrameUpdate {
    pub fn is_game_over(&self) -> bool {
        self.stop_cause == Some(StopCause::SpawnBlocked)
    }
}

/// Session-level facts carried alongside the cell diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo<'a> {
    pub preview: &'a Shape,
    pub clear_count: u32,
    pub status: SessionStatus,
    pub stop_cause: Option<StopCause>,
}

/// Last exposed composite of the board (engine dimensions)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    shadow: [CellColor; BOARD_CELLS],
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            shadow: [CellColor::EMPTY; BOARD_CELLS],
        }
    }

    /// Board cells with the active piece drawn over them.
    ///
    /// Piece cells outside the visible grid (the ceiling) are not drawn.
    pub fn compose(board: &Board, active: &Piece) -> [CellColor; BOARD_CELLS] {
        let cols = BOARD_COLS as usize;
        let mut out = [CellColor::EMPTY; BOARD_CELLS];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = board
                .get((i % cols) as i8, (i / cols) as i8)
                .unwrap_or(CellColor::EMPTY);
        }
        for (x, y, color) in active.cells() {
            if (0..BOARD_COLS as i8).contains(&x) && (0..BOARD_ROWS as i8).contains(&y) {
                out[y as usize * cols + x as usize] = color;
            }
        }
        out
    }

    /// Diff a new composite against the shadow and adopt it.
    pub fn diff(&mut self, composite: &[CellColor; BOARD_CELLS]) -> ArrayVec<CellChange, BOARD_CELLS> {
        let cols = BOARD_COLS as usize;
        let mut changes = ArrayVec::new();
        for (i, (old, new)) in self.shadow.iter_mut().zip(composite.iter()).enumerate() {
            if old != new {
                changes.push(CellChange {
                    x: (i % cols) as u8,
                    y: (i / cols) as u8,
                    color: *new,
                });
                *old = *new;
            }
        }
        changes
    }

    /// Every cell of the composite, regardless of the shadow.
    pub fn full(&mut self, composite: &[CellColor; BOARD_CELLS]) -> ArrayVec<CellChange, BOARD_CELLS> {
        self.shadow = *composite;
        let cols = BOARD_COLS as usize;
        composite
            .iter()
            .enumerate()
            .map(|(i, &color)| CellChange {
                x: (i % cols) as u8,
                y: (i / cols) as u8,
                color,
            })
            .collect()
    }

    /// Shadow cell at `(x, y)`, i.e. what the renderer was last told
    pub fn shown(&self, x: u8, y: u8) -> Option<CellColor> {
        if x >= BOARD_COLS || y >= BOARD_ROWS {
            return None;
        }
        Some(self.shadow[y as usize * BOARD_COLS as usize + x as usize])
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a frame from a change list and session facts
pub fn build_frame(changes: ArrayVec<CellChange, BOARD_CELLS>, info: FrameInfo<'_>) -> FrameUpdate {
    FrameUpdate {
        changes,
        preview: *info.preview,
        clear_count: info.clear_count,
        message: message_lines(info.clear_count),
        status: info.status,
        stop_cause: info.stop_cause,
    }
}
