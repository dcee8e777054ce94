//! Easy strategy: a uniform pick among the empty cells.

use crate::types::Board;
use rand::{Rng, prelude::IndexedRandom};

/// Picks an empty cell uniformly at random, or `None` on a full board.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_indices().choose(rng).copied()
}
