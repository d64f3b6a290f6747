//! Input seam: a blocking source of command symbols.

use std::collections::VecDeque;

use anyhow::Result;

use crate::session::Session;
use crate::types::{SessionStatus, SYMBOL_ABORT};

/// Yields one input symbol per call, blocking until one is available.
pub trait InputSource {
    fn next_symbol(&mut self) -> Result<char>;
}

/// Replays a fixed list of symbols, then reports end of input forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    symbols: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_symbol(&mut self) -> Result<char> {
        Ok(self.symbols.pop_front().unwrap_or(SYMBOL_ABORT))
    }
}

/// Command-thread loop: feed symbols to the session until it stops.
///
/// The running check is lock-free and only decides whether to read another
/// symbol; every submission still goes through the session lock.
pub fn drive(session: &Session, input: &mut dyn InputSource) -> Result<SessionStatus> {
    while session.is_running() {
        let symbol = input.next_symbol()?;
        session.submit(symbol);
    }
    Ok(session.status())
}
