//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and the session state machine.
//! It has **no dependencies** on threads, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function or method
//! - **Portable**: The engine crate wraps it in a thread-safe session
//!
//! # Module Structure
//!
//! - [`board`]: 11x13 grid of color indices with collision queries and row clearing
//! - [`pieces`]: 4x4 shape matrices, the rotation primitive, silhouettes
//! - [`shapes`]: random piece generation (color, silhouette, orientation)
//! - [`rules`]: move/rotate legality
//! - [`rng`]: the queued next piece
//! - [`frame`]: render diffs against the last exposed composite
//! - [`message`]: message box text
//! - [`game_state`]: gravity, locking, commands, status
//!
//! # Game Rules
//!
//! - Pieces spawn above the grid and fall one row per gravity step
//! - A piece that cannot fall locks; if it is still (partly) above the grid, the game is over
//! - Full rows are removed after every lock
//! - Rotation happens in place, with no wall kicks
//!
//! # Example
//!
//! ```
//! use wastedris_core::GameState;
//! use wastedris_types::{Command, SessionStatus};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::RotateCw);
//! game.gravity_step();
//!
//! assert_eq!(game.apply_command(Command::Abort), SessionStatus::Stopped);
//! ```

pub mod board;
pub mod frame;
pub mod game_state;
pub mod message;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod shapes;
pub mod snapshot;

pub use wastedris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use frame::{Canvas, CellChange, FrameUpdate};
pub use game_state::{GameState, GravityOutcome};
pub use message::{message_lines, MessageLine, MessageLines};
pub use pieces::{rotate_ccw, rotate_cw, Piece, Shape, Silhouette};
pub use rng::PieceQueue;
pub use rules::{can_move, can_rotate};
pub use shapes::generate;
pub use snapshot::{GameSnapshot, PieceSnapshot};
