//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond parsing and classification,
//! making them usable in any context (game state, engine, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 11 columns (indexed 0-10)
//! - **Height**: 13 rows (indexed 0-12)
//! - **Spawn anchor**: (3, -4), i.e. the 4x4 piece box starts fully above row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 5 | Sleep granularity of the gravity thread |
//! | `GRAVITY_PERIOD_TICKS` | 100 | Base ticks per gravity step (500ms per row) |
//!
//! # Color Indices
//!
//! | Index | Color | Bright index |
//! |-------|-------|--------------|
//! | 1 | red | 11 |
//! | 2 | green | 12 |
//! | 3 | yellow | 13 |
//! | 4 | blue | 14 |
//! | 5 | magenta | 15 |
//! | 6 | cyan | 16 |
//! | 7 | white | 17 |
//!
//! `0` is the empty cell.
//!
//! # Examples
//!
//! ```
//! use wastedris_types::{CellColor, Command, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(Command::from_symbol('C'), Some(Command::MoveRight));
//! assert_eq!(Command::from_symbol('q'), None);
//!
//! let red = CellColor::new(1).unwrap();
//! assert!(!red.is_empty());
//! assert!(CellColor::new(8).is_none());
//!
//! assert_eq!(BOARD_COLS, 11);
//! assert_eq!(BOARD_ROWS, 13);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (11 columns)
pub const BOARD_COLS: u8 = 11;

/// Board height in cells (13 rows)
pub const BOARD_ROWS: u8 = 13;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_COLS as usize * BOARD_ROWS as usize;

/// Side length of the square piece box
pub const PIECE_SIZE: usize = 4;

/// Spawn column of the piece box (centered on the board)
pub const SPAWN_X: i8 = (BOARD_COLS as i8 - PIECE_SIZE as i8) / 2;

/// Spawn row of the piece box (fully above the visible grid)
pub const SPAWN_Y: i8 = -(PIECE_SIZE as i8);

/// Gravity thread sleep granularity in milliseconds
pub const BASE_TICK_MS: u64 = 5;

/// Number of base ticks between two gravity steps
pub const GRAVITY_PERIOD_TICKS: u32 = 100;

/// Symbol for "move right" (final byte of the right-arrow escape sequence)
pub const SYMBOL_RIGHT: char = 'C';

/// Symbol for "move left" (final byte of the left-arrow escape sequence)
pub const SYMBOL_LEFT: char = 'D';

/// Symbol for "soft drop" (final byte of the down-arrow escape sequence)
pub const SYMBOL_DOWN: char = 'B';

/// Primary clockwise rotation symbol
pub const SYMBOL_ROTATE_CW: char = ' ';

/// Alternate clockwise rotation symbol
pub const SYMBOL_ROTATE_CW_ALT: char = 'x';

/// Counter-clockwise rotation symbol
pub const SYMBOL_ROTATE_CCW: char = 'z';

/// End-of-input symbol (Ctrl-D), aborts the session
pub const SYMBOL_ABORT: char = '\x04';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_is_centered_above_the_board() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, -4);
        assert_eq!(BOARD_CELLS, 143);
    }

    #[test]
    fn gravity_period_is_half_a_second() {
        assert_eq!(BASE_TICK_MS * GRAVITY_PERIOD_TICKS as u64, 500);
    }
}

/// Color index of a single grid or piece cell.
///
/// Only the 15 legal states exist: `0` (empty), `1..=7` (base colors)
/// and `11..=17` (bright variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellColor(u8);

impl CellColor {
    /// The empty cell
    pub const EMPTY: CellColor = CellColor(0);

    /// Build a color from its raw index, rejecting values outside the legal set
    ///
    /// # Examples
    ///
    /// ```
    /// use wastedris_types::CellColor;
    ///
    /// assert!(CellColor::new(0).is_some());
    /// assert!(CellColor::new(17).is_some());
    /// assert!(CellColor::new(10).is_none());
    /// assert!(CellColor::new(18).is_none());
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        match index {
            0..=7 | 11..=17 => Some(CellColor(index)),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether this is one of the bright variants (11..=17)
    pub const fn is_bright(self) -> bool {
        self.0 > 10
    }

    /// Base hue 1..=7 shared by a color and its bright variant, 0 for empty
    pub const fn hue(self) -> u8 {
        if self.0 > 10 {
            self.0 - 10
        } else {
            self.0
        }
    }
}

impl TryFrom<u8> for CellColor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CellColor::new(value).ok_or_else(|| format!("illegal color index {value}"))
    }
}

impl From<CellColor> for u8 {
    fn from(value: CellColor) -> Self {
        value.0
    }
}

/// Commands the engine accepts from the command thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Stop the session
    Abort,
}

impl Command {
    /// Map an input symbol to a command. Unrecognized symbols map to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wastedris_types::Command;
    ///
    /// assert_eq!(Command::from_symbol(' '), Some(Command::RotateCw));
    /// assert_eq!(Command::from_symbol('x'), Some(Command::RotateCw));
    /// assert_eq!(Command::from_symbol('z'), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_symbol('\x04'), Some(Command::Abort));
    /// assert_eq!(Command::from_symbol('A'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            SYMBOL_RIGHT => Some(Command::MoveRight),
            SYMBOL_LEFT => Some(Command::MoveLeft),
            SYMBOL_DOWN => Some(Command::SoftDrop),
            SYMBOL_ROTATE_CW | SYMBOL_ROTATE_CW_ALT => Some(Command::RotateCw),
            SYMBOL_ROTATE_CCW => Some(Command::RotateCcw),
            SYMBOL_ABORT => Some(Command::Abort),
            _ => None,
        }
    }

    /// Canonical symbol for this command
    pub fn symbol(&self) -> char {
        match self {
            Command::MoveRight => SYMBOL_RIGHT,
            Command::MoveLeft => SYMBOL_LEFT,
            Command::SoftDrop => SYMBOL_DOWN,
            Command::RotateCw => SYMBOL_ROTATE_CW,
            Command::RotateCcw => SYMBOL_ROTATE_CCW,
            Command::Abort => SYMBOL_ABORT,
        }
    }
}

/// Session status. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    Stopped,
}

impl SessionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }
}

/// Why a session stopped
///
/// - **Aborted**: abort command or teardown while running
/// - **SpawnBlocked**: a fresh piece could not leave the ceiling (game over)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCause {
    Aborted,
    SpawnBlocked,
}
