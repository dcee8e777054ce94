//! Medium strategy: take a win, otherwise block, otherwise play randomly.

use super::random;
use crate::types::{Board, Player};
use rand::Rng;

/// Picks a move for `cpu`.
///
/// Both scans run over the empty cells in ascending order and stop at the
/// first hit, so the lowest qualifying index is chosen. A win is always
/// preferred over a block. Randomness is consumed only when neither exists.
pub fn pick<R: Rng + ?Sized>(board: &Board, cpu: Player, rng: &mut R) -> Option<usize> {
    winning_move(board, cpu)
        .or_else(|| winning_move(board, cpu.opponent()))
        .or_else(|| random::pick(board, rng))
}

/// First empty cell that completes a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    board.empty_indices().into_iter().find(|&index| {
        let mut child = *board;
        child.place(index, player).is_ok() && child.winner() == Some(player)
    })
}
