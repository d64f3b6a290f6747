//! Process-wide holder for at most one session.

use log::info;

use crate::core::GameSnapshot;
use crate::error::EngineError;
use crate::render::Renderer;
use crate::session::{Session, SessionOptions};
use crate::ticker::Ticker;
use crate::types::SessionStatus;

/// Owns the current session, if any.
///
/// Starting again tears the previous session down first, so two gravity
/// threads never run at once.
#[derive(Debug, Default)]
pub struct Engine {
    session: Option<Session>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(
        &mut self,
        options: SessionOptions,
        renderer: Box<dyn Renderer>,
    ) -> Result<&Session, EngineError> {
        self.stop()?;
        let session = Session::start(options, renderer)?;
        Ok(&*self.session.insert(session))
    }

    pub fn start_with_ticker(
        &mut self,
        options: SessionOptions,
        ticker: Box<dyn Ticker>,
        renderer: Box<dyn Renderer>,
    ) -> Result<&Session, EngineError> {
        self.stop()?;
        let session = Session::start_with_ticker(options, ticker, renderer)?;
        Ok(&*self.session.insert(session))
    }

    /// Tear down the current session. No-op when there is none.
    pub fn stop(&mut self) -> Result<(), EngineError> {
        match self.session.take() {
            Some(session) => {
                info!("engine stopping previous session");
                session.stop()
            }
            None => Ok(()),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Forward a symbol to the current session
    pub fn submit(&self, symbol: char) -> Result<SessionStatus, EngineError> {
        self.session
            .as_ref()
            .map(|s| s.submit(symbol))
            .ok_or(EngineError::NoSession)
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::ticker::ManualTicker;

    #[test]
    fn submit_without_session_fails() {
        let engine = Engine::new();
        assert!(matches!(engine.submit('C'), Err(EngineError::NoSession)));
        assert!(!engine.is_running());
    }

    #[test]
    fn restart_replaces_session() {
        let mut engine = Engine::new();
        let (ticker, _clock) = ManualTicker::new();
        engine
            .start_with_ticker(
                SessionOptions::new().with_seed(1),
                Box::new(ticker),
                Box::new(NullRenderer),
            )
            .unwrap();
        engine.submit('C').unwrap();
        assert_eq!(engine.snapshot().unwrap().active.x, 4);

        let (ticker, _clock) = ManualTicker::new();
        engine
            .start_with_ticker(
                SessionOptions::new().with_seed(2),
                Box::new(ticker),
                Box::new(NullRenderer),
            )
            .unwrap();
        let snap = engine.snapshot().unwrap();
        assert_eq!((snap.active.x, snap.seed), (3, 2));
        assert!(engine.is_running());

        engine.stop().unwrap();
        engine.stop().unwrap();
        assert!(engine.session().is_none());
    }
}
