//! Pieces module - 4x4 shape matrices and the rotation primitive
//!
//! A piece is a 4x4 matrix of color indices plus the grid position of the
//! matrix's top-left corner (its anchor). Shapes are indexed `[row][col]`.

use crate::types::{CellColor, PIECE_SIZE, SPAWN_X, SPAWN_Y};

/// 4x4 shape matrix, indexed `[row][col]`
pub type Shape = [[CellColor; PIECE_SIZE]; PIECE_SIZE];

/// The all-empty shape
pub const EMPTY_SHAPE: Shape = [[CellColor::EMPTY; PIECE_SIZE]; PIECE_SIZE];

/// Rotate a shape 90° clockwise: `(i, j) -> (j, N-1-i)`
pub fn rotate_cw(shape: &Shape) -> Shape {
    let mut out = EMPTY_SHAPE;
    for (i, row) in shape.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            out[j][PIECE_SIZE - 1 - i] = cell;
        }
    }
    out
}

/// Rotate a shape 90° counter-clockwise: `(i, j) -> (N-1-j, i)`
pub fn rotate_ccw(shape: &Shape) -> Shape {
    let mut out = EMPTY_SHAPE;
    for (i, row) in shape.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            out[PIECE_SIZE - 1 - j][i] = cell;
        }
    }
    out
}

/// Rotate in the given direction
pub fn rotate(shape: &Shape, clockwise: bool) -> Shape {
    if clockwise {
        rotate_cw(shape)
    } else {
        rotate_ccw(shape)
    }
}

/// Build a shape from raw indices. Returns `None` on an illegal index.
pub fn shape_from_u8(raw: [[u8; PIECE_SIZE]; PIECE_SIZE]) -> Option<Shape> {
    let mut out = EMPTY_SHAPE;
    for (i, row) in raw.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[i][j] = CellColor::new(v)?;
        }
    }
    Some(out)
}

pub fn shape_to_u8(shape: &Shape) -> [[u8; PIECE_SIZE]; PIECE_SIZE] {
    let mut out = [[0u8; PIECE_SIZE]; PIECE_SIZE];
    for (i, row) in shape.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            out[i][j] = cell.index();
        }
    }
    out
}

/// A shape placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor
    pub fn new(shape: Shape) -> Self {
        Self::at(shape, SPAWN_X, SPAWN_Y)
    }

    pub fn at(shape: Shape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    /// Occupied local cells as `(col, row, color)`
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8, CellColor)> + '_ {
        self.shape.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_empty())
                .map(move |(j, &cell)| (j as i8, i as i8, cell))
        })
    }

    /// Occupied cells in grid coordinates as `(x, y, color)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, CellColor)> + '_ {
        self.offsets()
            .map(move |(dx, dy, color)| (self.x + dx, self.y + dy, color))
    }

    /// The first non-empty color in the shape, if any
    pub fn color(&self) -> Option<CellColor> {
        self.offsets().next().map(|(_, _, color)| color)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            shape: rotate(&self.shape, clockwise),
            ..*self
        }
    }
}

/// The seven silhouettes the generator can build before it rotates a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Silhouette {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Silhouette {
    pub const ALL: [Silhouette; 7] = [
        Silhouette::I,
        Silhouette::O,
        Silhouette::T,
        Silhouette::S,
        Silhouette::Z,
        Silhouette::J,
        Silhouette::L,
    ];

    /// Reference cells `(row, col)` in the orientation the generator builds them,
    /// translated to the top-left corner.
    fn reference(&self) -> [(u8, u8); 4] {
        match self {
            Silhouette::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
            Silhouette::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Silhouette::T => [(0, 1), (1, 0), (1, 1), (2, 1)],
            Silhouette::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
            Silhouette::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
            Silhouette::J => [(0, 1), (1, 1), (2, 0), (2, 1)],
            Silhouette::L => [(0, 0), (0, 1), (1, 1), (2, 1)],
        }
    }

    /// Classify a shape up to translation only (no rotation).
    pub fn classify(shape: &Shape) -> Option<Silhouette> {
        let cells = normalized_cells(shape)?;
        Self::ALL
            .into_iter()
            .find(|s| s.reference() == cells)
    }

    /// Classify a shape up to translation and rotation.
    pub fn classify_any_orientation(shape: &Shape) -> Option<Silhouette> {
        let mut current = *shape;
        for _ in 0..4 {
            if let Some(s) = Self::classify(&current) {
                return Some(s);
            }
            current = rotate_cw(&current);
        }
        None
    }
}

/// Occupied cells of a four-cell shape, translated so the minimum row and
/// column are zero, in row-major order.
fn normalized_cells(shape: &Shape) -> Option<[(u8, u8); 4]> {
    let mut cells = [(0u8, 0u8); 4];
    let mut n = 0usize;
    for (i, row) in shape.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                if n == 4 {
                    return None;
                }
                cells[n] = (i as u8, j as u8);
                n += 1;
            }
        }
    }
    if n != 4 {
        return None;
    }

    let min_row = cells.iter().map(|&(r, _)| r).min()?;
    let min_col = cells.iter().map(|&(_, c)| c).min()?;
    for cell in &mut cells {
        cell.0 -= min_row;
        cell.1 -= min_col;
    }
    Some(cells)
}
