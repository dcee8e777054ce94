//! CPU-vs-CPU matches.

use anyhow::Result;
use noughts_tictactoe::{Board, Difficulty, GameStatus, MoveEngine, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome counts over a run of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Difficulty playing X.
    pub x: Difficulty,
    /// Difficulty playing O.
    pub o: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X ({}) vs O ({}) over {} games: X wins {}, O wins {}, draws {}",
            self.x, self.o, self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games of `x` against `o`.
///
/// Each side draws its random choices from its own engine. With a `seed`
/// the two engines are seeded from `seed` and `seed + 1`.
///
/// # Errors
///
/// Only fails if an engine breaks its contract.
#[instrument]
pub fn simulate(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>) -> Result<Tally> {
    let (mut x_engine, mut o_engine) = match seed {
        Some(seed) => (
            MoveEngine::with_seed(seed),
            MoveEngine::with_seed(seed.wrapping_add(1)),
        ),
        None => (MoveEngine::new(), MoveEngine::new()),
    };
    let mut tally = Tally {
        x,
        o,
        ..Tally::default()
    };

    for game in 0..games {
        let outcome = play_one(&mut x_engine, x, &mut o_engine, o)?;
        debug!(game, ?outcome, "Game finished");
        match outcome {
            Some(Player::X) => tally.x_wins += 1,
            Some(Player::O) => tally.o_wins += 1,
            None => tally.draws += 1,
        }
        tally.games += 1;
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

/// Plays one game to the end, returning the winner or `None` for a draw.
fn play_one(
    x_engine: &mut MoveEngine,
    x: Difficulty,
    o_engine: &mut MoveEngine,
    o: Difficulty,
) -> Result<Option<Player>> {
    let mut board = Board::new();
    let mut to_move = Player::X;
    loop {
        match rules::status(&board, to_move) {
            GameStatus::Won(winner) => return Ok(Some(winner)),
            GameStatus::Draw => return Ok(None),
            GameStatus::InProgress(_) => {}
        }
        let index = match to_move {
            Player::X => x_engine.select_move(&board, x, Player::X)?,
            Player::O => o_engine.select_move(&board, o, Player::O)?,
        };
        board.place(index, to_move)?;
        to_move = to_move.opponent();
    }
}
