//! A running game: one gravity thread plus whoever calls [`Session::submit`].
//!
//! All state lives behind a single mutex. Both threads apply their
//! transition, build the frame and take the renderer lock while still
//! holding the state lock, then release the state lock and render. Frames
//! therefore reach the renderer in transition order and the terminal is
//! never written under the state lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::{Board, GameSnapshot, GameState, PieceQueue};
use crate::error::EngineError;
use crate::journal::{self, Transition, TransitionEvent};
use crate::lock_or_recover;
use crate::render::Renderer;
use crate::ticker::{SleepTicker, Ticker};
use crate::types::{
    Command, SessionStatus, StopCause, BASE_TICK_MS, GRAVITY_PERIOD_TICKS,
};

/// Knobs for a session. Defaults match the interactive game.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub seed: Option<u64>,
    pub base_interval: Duration,
    pub gravity_period: u32,
    pub record_journal: bool,
    pub board: Option<Board>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed: None,
            base_interval: Duration::from_millis(BASE_TICK_MS),
            gravity_period: GRAVITY_PERIOD_TICKS,
            record_journal: false,
            board: None,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_base_interval(mut self, interval: Duration) -> Self {
        self.base_interval = interval;
        self
    }

    pub fn with_gravity_period(mut self, period: u32) -> Self {
        self.gravity_period = period.max(1);
        self
    }

    pub fn with_journal(mut self, record: bool) -> Self {
        self.record_journal = record;
        self
    }

    /// Start from a prepared grid instead of an empty one
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the initial state these options describe
    pub fn initial_state(&self) -> GameState {
        let queue = match self.seed {
            Some(seed) => PieceQueue::new(seed),
            None => PieceQueue::from_entropy(),
        };
        let state = match &self.board {
            Some(board) => GameState::with_board(board.clone(), queue),
            None => GameState::with_queue(queue),
        };
        state.with_gravity_period(self.gravity_period)
    }
}

struct Locked {
    game: GameState,
    journal: Option<Vec<Transition>>,
}

struct Shared {
    state: Mutex<Locked>,
    renderer: Mutex<Box<dyn Renderer>>,
    /// Lock-free mirror of `game.status()`, written under the state lock
    running: AtomicBool,
}

impl Shared {
    /// Apply one transition and hand the resulting frame to the renderer.
    ///
    /// `render` is false for base ticks that did not reach a gravity step;
    /// those change nothing visible.
    ///
    /// The renderer lock is taken before the state lock is released. While
    /// holding the state lock a transition waits for at most one in-flight
    /// render; its own render runs after the state lock is dropped.
    fn transition<F>(&self, event: TransitionEvent, apply: F) -> SessionStatus
    where
        F: FnOnce(&mut GameState) -> bool,
    {
        let mut guard = lock_or_recover(&self.state);
        let locked = &mut *guard;
        let render = apply(&mut locked.game);
        let status = locked.game.status();
        self.running.store(status.is_running(), Ordering::Release);

        if let Some(journal) = locked.journal.as_mut() {
            let after = locked.game.snapshot();
            journal.push(Transition { event, after });
        }

        if !render {
            return status;
        }

        let frame = locked.game.frame();
        let mut renderer = lock_or_recover(&self.renderer);
        drop(guard);

        if let Err(e) = renderer.render(&frame) {
            warn!("render failed: {:#}", e);
        }
        status
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

fn gravity_loop(shared: Arc<Shared>, mut ticker: Box<dyn Ticker>) {
    debug!("gravity thread started");
    while shared.is_running() {
        if !ticker.wait() {
            continue;
        }
        shared.transition(TransitionEvent::BaseTick, |game| game.base_tick().is_some());
    }
    debug!("gravity thread exiting");
}

/// One running game
pub struct Session {
    shared: Arc<Shared>,
    gravity: Option<JoinHandle<()>>,
}

impl Session {
    /// Start a session ticking on the wall clock
    pub fn start(options: SessionOptions, renderer: Box<dyn Renderer>) -> Result<Self, EngineError> {
        let ticker = Box::new(SleepTicker::new(options.base_interval));
        Self::start_with_ticker(options, ticker, renderer)
    }

    /// Start a session driven by `ticker`.
    ///
    /// The initial full frame is rendered before the gravity thread exists.
    pub fn start_with_ticker(
        options: SessionOptions,
        ticker: Box<dyn Ticker>,
        mut renderer: Box<dyn Renderer>,
    ) -> Result<Self, EngineError> {
        let mut game = options.initial_state();
        info!(
            "session starting: seed={} gravity_period={} base_interval={:?}",
            game.seed(),
            game.gravity_period(),
            options.base_interval
        );

        let initial = game.full_frame();
        if let Err(e) = renderer.render(&initial) {
            warn!("initial render failed: {:#}", e);
        }

        let shared = Arc::new(Shared {
            running: AtomicBool::new(game.is_running()),
            state: Mutex::new(Locked {
                game,
                journal: options.record_journal.then(Vec::new),
            }),
            renderer: Mutex::new(renderer),
        });

        let gravity = thread::Builder::new()
            .name("gravity".into())
            .spawn({
                let shared = Arc::clone(&shared);
                move || gravity_loop(shared, ticker)
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            shared,
            gravity: Some(gravity),
        })
    }

    /// Apply one input symbol; unknown symbols change nothing.
    ///
    /// Returns the status after the symbol was applied.
    pub fn submit(&self, symbol: char) -> SessionStatus {
        self.shared
            .transition(TransitionEvent::Symbol(symbol), |game| {
                game.apply_symbol(symbol);
                true
            })
    }

    pub fn submit_command(&self, command: Command) -> SessionStatus {
        self.submit(command.symbol())
    }

    /// Lock-free status check; may lag a transition that is in progress.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    pub fn status(&self) -> SessionStatus {
        lock_or_recover(&self.shared.state).game.status()
    }

    pub fn stop_cause(&self) -> Option<StopCause> {
        lock_or_recover(&self.shared.state).game.stop_cause()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        lock_or_recover(&self.shared.state).game.snapshot()
    }

    /// Recorded transitions so far (empty unless the journal is on)
    pub fn journal(&self) -> Vec<Transition> {
        lock_or_recover(&self.shared.state)
            .journal
            .clone()
            .unwrap_or_default()
    }

    /// Check the journal against a serial replay from `reference`.
    pub fn replay_divergence(&self, reference: GameState) -> Option<usize> {
        journal::first_divergence(reference, &self.journal())
    }

    /// Stop the game if it is still running and wait for the gravity thread.
    pub fn stop(mut self) -> Result<(), EngineError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), EngineError> {
        let Some(handle) = self.gravity.take() else {
            return Ok(());
        };

        let was_running = self.shared.is_running();
        self.shared.transition(TransitionEvent::Teardown, |game| {
            let running = game.is_running();
            game.abort();
            running
        });

        handle
            .join()
            .map_err(|_| EngineError::GravityThreadPanicked)?;
        info!(
            "session stopped ({})",
            if was_running { "torn down" } else { "already stopped" }
        );
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("session teardown: {}", e);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("running", &self.is_running())
            .field("gravity_alive", &self.gravity.is_some())
            .finish()
    }
}
