//! Hard strategy: exhaustive minimax.
//!
//! Every reachable position below the current one is scored; there is no
//! pruning and no caching. A 3x3 board has at most 9! lines of play, which
//! is small enough to search in full on every CPU turn.
//!
//! Scores are from the CPU's point of view. A CPU win at depth `d` scores
//! `10 - d` and a loss scores `d - 10`, so the search prefers quick wins and
//! slow losses. A draw scores 0.

use crate::types::{Board, Player};

/// Score awarded for a win found immediately below the root.
pub const WIN_SCORE: i32 = 10;

/// Returns the best cell for `cpu`, or `None` on a full board.
///
/// Each empty cell is tried in ascending order and its child position is
/// scored with the opponent to move. Only a strictly greater score replaces
/// the current best, so ties go to the lowest index.
pub fn best_move(board: &Board, cpu: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for index in board.empty_indices() {
        let mut child = *board;
        if child.place(index, cpu).is_err() {
            continue;
        }
        let score = minimax(&child, 0, false, cpu);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Scores `board` for `cpu`.
///
/// `depth` counts plies below the root move. When `maximizing` is true the
/// CPU is to move on `board`, otherwise its opponent is. The terminal checks
/// read `board` itself, the node being scored.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, cpu: Player) -> i32 {
    match board.winner() {
        Some(winner) if winner == cpu => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { cpu } else { cpu.opponent() };
    let children = board.empty_indices().into_iter().filter_map(|index| {
        let mut child = *board;
        child.place(index, mover).ok()?;
        Some(minimax(&child, depth + 1, !maximizing, cpu))
    });

    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };
    // Non-full boards always have at least one child.
    best.unwrap_or(0)
}
