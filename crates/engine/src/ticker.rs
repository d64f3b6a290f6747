//! Base-interval clocks for the gravity thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::types::BASE_TICK_MS;

/// How long a manual ticker idles before letting the loop re-check `running`
const IDLE_POLL: Duration = Duration::from_millis(2);

/// Source of base ticks.
pub trait Ticker: Send {
    /// Block for at most one base interval.
    ///
    /// Returns `true` when an interval elapsed and a tick should be applied,
    /// `false` when the caller should only re-check whether it is still running.
    fn wait(&mut self) -> bool;
}

/// Wall-clock ticker: one tick per `interval` of sleep
#[derive(Debug, Clone, Copy)]
pub struct SleepTicker {
    interval: Duration,
}

impl SleepTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for SleepTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(BASE_TICK_MS))
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) -> bool {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        } else {
            thread::yield_now();
        }
        true
    }
}

/// Test-driven ticker. Ticks only when its [`ManualClock`] advances.
#[derive(Debug)]
pub struct ManualTicker {
    ticks: Receiver<()>,
    acks: Sender<()>,
    pending_ack: bool,
}

/// Handle that drives a [`ManualTicker`] from another thread
#[derive(Debug)]
pub struct ManualClock {
    ticks: Sender<()>,
    acks: Receiver<()>,
}

impl ManualTicker {
    pub fn new() -> (ManualTicker, ManualClock) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (ack_tx, ack_rx) = mpsc::channel();
        (
            ManualTicker {
                ticks: tick_rx,
                acks: ack_tx,
                pending_ack: false,
            },
            ManualClock {
                ticks: tick_tx,
                acks: ack_rx,
            },
        )
    }

    fn ack(&mut self) {
        if self.pending_ack {
            self.pending_ack = false;
            let _ = self.acks.send(());
        }
    }
}

impl Ticker for ManualTicker {
    fn wait(&mut self) -> bool {
        // Being asked to wait again means the previous tick is fully applied.
        self.ack();
        match self.ticks.recv_timeout(IDLE_POLL) {
            Ok(()) => {
                self.pending_ack = true;
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(IDLE_POLL);
                false
            }
        }
    }
}

impl Drop for ManualTicker {
    fn drop(&mut self) {
        self.ack();
    }
}

impl ManualClock {
    /// Deliver one base tick and block until the gravity thread has applied
    /// it (including rendering).
    ///
    /// Returns `false` if the gravity thread is gone or exited without
    /// consuming the tick.
    pub fn advance(&self) -> bool {
        if self.ticks.send(()).is_err() {
            return false;
        }
        self.acks.recv().is_ok()
    }

    /// Deliver `n` ticks one at a time; stops early if the thread is gone.
    pub fn advance_by(&self, n: u32) -> u32 {
        let mut delivered = 0;
        for _ in 0..n {
            if !self.advance() {
                break;
            }
            delivered += 1;
        }
        delivered
    }
}
