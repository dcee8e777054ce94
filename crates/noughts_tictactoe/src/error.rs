//! Error types for board, engine and controller operations.

use crate::types::Player;

/// Error returned by [`Board`](crate::Board) mutations and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The index is not in 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),
}

/// Error returned by the [`MoveEngine`](crate::MoveEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The engine was asked to move on a full board.
    ///
    /// Callers are expected to check for a terminal position first, so this
    /// signals a contract violation rather than a recoverable condition.
    #[display("No moves available on a full board")]
    NoMovesAvailable,
}

/// Why a move was refused by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The side is played by the CPU.
    #[display("{} is played by the CPU", _0)]
    CpuSide(Player),
}

/// Error returned by [`GameController`](crate::GameController) operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The move targets a missing or occupied cell.
    #[display("{}", _0)]
    Board(BoardError),

    /// The move is out of turn, for the CPU's side, or the game is over.
    #[display("Illegal move: {}", _0)]
    IllegalMove(#[error(not(source))] IllegalMove),

    /// The engine could not produce a move.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl GameError {
    /// Returns true for errors that simply reject a move and leave the game
    /// untouched.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, GameError::Engine(_))
    }
}
