//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine's search calls these on every
//! simulated node, so none of them are instrumented.

use crate::types::{Board, GameStatus, Player, Square};

/// The eight winning triples, scanned in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] filled by a single
/// player, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Some(player);
        }
    }
    None
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the game status from a board and the player whose turn it is.
///
/// A win takes precedence over a full board.
pub fn status(board: &Board, to_move: Player) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.chars().enumerate() {
            match mark {
                'X' => board.place(index, Player::X).unwrap(),
                'O' => board.place(index, Player::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut board = Board::new();
                for index in line {
                    board.place(index, player).unwrap();
                }
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from("XXO......");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from("XX..O.O..");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert_eq!(status(&board, Player::X), GameStatus::Draw);
    }

    #[test]
    fn test_win_beats_full_board() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert_eq!(status(&board, Player::O), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_in_progress_reports_mover() {
        let board = board_from("X........");
        assert_eq!(status(&board, Player::O), GameStatus::InProgress(Player::O));
    }
}
