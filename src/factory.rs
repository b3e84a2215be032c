//! Piece factory: random kind plus the next id from a private counter
//!
//! Every kind is equally likely on every draw (no bag). The RNG is a
//! ChaCha stream so a fixed seed replays the exact same supply.

use crate::piece::{Piece, PieceId};
use crate::tetromino::PieceKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Produces new pieces and owns the identifier counter
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: ChaCha8Rng,
    /// Id handed to the next generated piece
    next_id: PieceId,
    seed: u64,
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceFactory {
    /// Create a factory with a fresh random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a factory whose output is fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_id: 0,
            seed,
        }
    }

    /// Generate the next piece. Advances the id counter by exactly one.
    pub fn generate(&mut self) -> Piece {
        let kinds = PieceKind::all();
        let kind = kinds[self.rng.gen_range(0..kinds.len())];
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        trace!(%piece, "generated piece");
        piece
    }

    /// Number of pieces generated so far
    pub fn issued(&self) -> u64 {
        self.next_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
