//! Noughts tic-tac-toe - game logic with a CPU opponent
//!
//! This crate holds the rules of tic-tac-toe and a CPU player with three
//! strengths. Rendering and input are left to the caller, which drives a
//! [`GameController`] through plain method calls.
//!
//! # Architecture
//!
//! - **Board**: nine cells and pure queries (winner, full, empty cells)
//! - **Engine**: CPU move selection (random, win-or-block, minimax)
//! - **Controller**: turn order, win/draw detection, CPU replies
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Difficulty, GameController, GameMode, GameStatus, Player};
//!
//! # fn example() -> Result<(), noughts_tictactoe::GameError> {
//! let mut game = GameController::new();
//! game.set_difficulty(Difficulty::Hard);
//! game.start(GameMode::HumanVsCpu)?;
//!
//! // X takes the centre; the CPU answers as O before `play` returns.
//! let report = game.play(4)?;
//! assert!(report.cpu_reply.is_some());
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
pub mod engine;
mod error;
mod position;
pub mod rules;
mod types;

// Crate-level exports - Board and domain types
pub use types::{Board, CELLS, Difficulty, GameMode, GameStatus, Player, Square};

// Crate-level exports - Input translation
pub use position::Position;

// Crate-level exports - Errors
pub use error::{BoardError, EngineError, GameError, IllegalMove};

// Crate-level exports - Move selection
pub use engine::MoveEngine;

// Crate-level exports - Game orchestration
pub use controller::{GameController, GameSnapshot, MoveReport};
