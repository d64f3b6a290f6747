//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to the single-character symbols a
//! [`Session`](wastedris_engine::Session) understands and exposes the
//! terminal as an [`InputSource`](wastedris_engine::InputSource).

pub mod map;
pub mod terminal;

pub use wastedris_engine as engine;
pub use wastedris_types as types;

pub use map::key_to_symbol;
pub use terminal::TerminalInput;
