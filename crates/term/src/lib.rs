//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Frame updates
//! from the engine are folded into a display model, laid out into a simple
//! framebuffer and flushed to the terminal as changed runs only.
//!
//! - [`fb`]: framebuffer and styles
//! - [`display`]: accumulated display model
//! - [`board_view`]: layout (play field, NEXT box, message box, overlays)
//! - [`renderer`]: crossterm encoding and the [`Renderer`](wastedris_engine::Renderer) impl

pub mod board_view;
pub mod display;
pub mod fb;
pub mod renderer;

pub use wastedris_core as core;
pub use wastedris_engine as engine;
pub use wastedris_types as types;

pub use board_view::{palette, BoardView, Viewport, PRESS_ANY_KEY};
pub use display::DisplayState;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
