//! CPU move selection.
//!
//! [`MoveEngine`] picks a cell for the CPU under one of three strategies,
//! selected by [`Difficulty`]:
//!
//! - [`Difficulty::Easy`]: [`random`], a uniform pick among the empty cells.
//! - [`Difficulty::Medium`]: [`heuristic`], win if possible, otherwise block,
//!   otherwise random.
//! - [`Difficulty::Hard`]: [`minimax`], exhaustive game-tree search.
//!
//! Where several cells are equally good, the lowest index wins. Only the
//! random pick (directly or as the heuristic's fallback) consumes randomness,
//! so a seeded engine plays reproducibly.

pub mod heuristic;
pub mod minimax;
pub mod random;

use crate::error::EngineError;
use crate::types::{Board, Difficulty, Player};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// Chooses CPU moves.
///
/// The engine never mutates the caller's board; strategies simulate on
/// copies and return the index for the caller to commit.
#[derive(Debug, Clone)]
pub struct MoveEngine {
    rng: StdRng,
}

impl MoveEngine {
    /// Creates an engine seeded from the thread-local generator.
    #[instrument]
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Creates an engine whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selects a move for `cpu` on `board` at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self, board), fields(empty = board.empty_indices().len()))]
    pub fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        cpu: Player,
    ) -> Result<usize, EngineError> {
        let index = match difficulty {
            Difficulty::Easy => random::pick(board, &mut self.rng),
            Difficulty::Medium => heuristic::pick(board, cpu, &mut self.rng),
            Difficulty::Hard => minimax::best_move(board, cpu),
        }
        .ok_or(EngineError::NoMovesAvailable)?;

        debug!(index, %cpu, %difficulty, "Engine chose move");
        Ok(index)
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}
