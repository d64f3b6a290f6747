//! RNG module - the queued next piece
//!
//! The queue always holds exactly one generated piece. Drawing hands it out
//! and immediately generates its replacement, so a preview is always available.
//!
//! Seeded queues are deterministic (same seed, same piece sequence), which the
//! tests and the serial replay of an engine journal rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::pieces::Piece;
use crate::shapes::generate;

/// Single-slot piece queue backed by a seeded RNG
#[derive(Debug, Clone)]
pub struct PieceQueue {
    next: Piece,
    rng: StdRng,
    seed: u64,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = generate(&mut rng);
        Self { next, rng, seed }
    }

    /// Create a queue seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Peek at the queued piece without removing it
    pub fn peek(&self) -> &Piece {
        &self.next
    }

    /// Hand out the queued piece and generate the next one
    pub fn draw(&mut self) -> Piece {
        let fresh = generate(&mut self.rng);
        std::mem::replace(&mut self.next, fresh)
    }

    /// Seed this queue was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
