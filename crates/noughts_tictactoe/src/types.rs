//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::rules;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns whether the cell at `index` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` is not in 0-8.
    pub fn is_occupied(&self, index: usize) -> Result<bool, BoardError> {
        self.get(index)
            .map(|square| square != Square::Empty)
            .ok_or(BoardError::InvalidIndex(index))
    }

    /// Places `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] for an index outside 0-8 and
    /// [`BoardError::CellOccupied`] if the cell already holds a mark. The
    /// board is unchanged on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        if self.is_occupied(index)? {
            return Err(BoardError::CellOccupied(index));
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Returns the player holding a complete row, column or diagonal.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; CELLS]> for Board {
    fn from(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }
}

/// Who controls the two sides of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "human-vs-human", serialize = "pvp")]
    HumanVsHuman,
    /// A human plays against the CPU.
    #[default]
    #[strum(to_string = "human-vs-cpu", serialize = "pvc")]
    HumanVsCpu,
}

/// CPU strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Takes an immediate win, otherwise blocks, otherwise random.
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is next to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the player to move while the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress(player) => Some(*player),
            GameStatus::Won(_) | GameStatus::Draw => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress(_) | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "{}'s turn", player),
            GameStatus::Won(player) => write!(f, "{} wins!", player),
            GameStatus::Draw => write!(f, "Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Player::X), Err(BoardError::InvalidIndex(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.place(4, Player::O), Err(BoardError::CellOccupied(4)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_is_occupied() {
        let mut board = Board::new();
        board.place(0, Player::O).unwrap();
        assert_eq!(board.is_occupied(0), Ok(true));
        assert_eq!(board.is_occupied(8), Ok(false));
        assert_eq!(board.is_occupied(42), Err(BoardError::InvalidIndex(42)));
    }

    #[test]
    fn test_empty_indices_ascending() {
        let mut board = Board::new();
        board.place(1, Player::X).unwrap();
        board.place(7, Player::O).unwrap();
        assert_eq!(board.empty_indices(), vec![0, 2, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        board.place(4, Player::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert_eq!("human-vs-cpu".parse::<GameMode>(), Ok(GameMode::HumanVsCpu));
        assert_eq!("o".parse::<Player>(), Ok(Player::O));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "X's turn");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "O wins!");
        assert_eq!(GameStatus::Draw.to_string(), "Draw!");
    }
}
