//! Blocking keyboard source backed by crossterm.

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::engine::InputSource;
use crate::map::key_to_symbol;

/// Reads key events from the controlling terminal.
///
/// Expects raw mode to be enabled by whoever owns the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn next_symbol(&mut self) -> Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(symbol) = key_to_symbol(key) {
                    return Ok(symbol);
                }
            }
        }
    }
}
