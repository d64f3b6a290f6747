//! Movement and rotation legality.
//!
//! Both checks are read-only against the board. Rotation is tested in place at
//! the piece's current anchor; there is no kick search.

use crate::board::Board;
use crate::pieces::{rotate, Piece, Shape};

/// Whether `shape` anchored at `(x, y)` overlaps nothing: no wall, floor, or locked cell.
pub fn fits(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.iter().enumerate().all(|(i, row)| {
        row.iter()
            .enumerate()
            .all(|(j, cell)| cell.is_empty() || !board.is_occupied(x + j as i8, y + i as i8))
    })
}

/// Whether the piece can be translated by `(dx, dy)`
pub fn can_move(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    fits(board, &piece.shape, piece.x + dx, piece.y + dy)
}

/// Whether the rotated shape fits at the piece's current anchor
pub fn can_rotate(board: &Board, piece: &Piece, clockwise: bool) -> bool {
    let rotated = rotate(&piece.shape, clockwise);
    fits(board, &rotated, piece.x, piece.y)
}
