//! A player that picks uniformly among the legal moves.

use crate::Strategy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ternary_othello::{Board, Position};

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible player.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        let moves: Vec<Position> = board.legal_moves(board.turn()).collect();
        moves.choose(&mut self.rng).copied()
    }
}
