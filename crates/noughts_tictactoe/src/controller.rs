//! Game controller: turn order, terminal detection and CPU turns.
//!
//! The controller owns the board and is the only thing that mutates it.
//! Human moves arrive through [`GameController::submit_move`] (or
//! [`GameController::play`] on behalf of whoever is to move). In
//! [`GameMode::HumanVsCpu`] the CPU's reply is chosen by the
//! [`MoveEngine`] and applied before the call returns, so a caller only ever
//! observes positions where a human is to move or the game is over.

use crate::engine::MoveEngine;
use crate::error::{GameError, IllegalMove};
use crate::rules;
use crate::types::{Board, Difficulty, GameMode, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Board contents.
    board: Board,
    /// Derived game status.
    status: GameStatus,
    /// Who controls the two sides.
    mode: GameMode,
    /// Current CPU strength.
    difficulty: Difficulty,
    /// Side the CPU plays in [`GameMode::HumanVsCpu`].
    cpu_player: Player,
}

impl GameSnapshot {
    /// Human-readable status line: `"X's turn"`, `"O wins!"` or `"Draw!"`.
    pub fn message(&self) -> String {
        self.status.to_string()
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Cell the submitted move was played in.
    pub placed: usize,
    /// Cell the CPU answered with, if it moved.
    pub cpu_reply: Option<usize>,
    /// Status after the move and any reply.
    pub status: GameStatus,
}

/// Drives a single game of tic-tac-toe.
///
/// Each controller is independent; difficulty and mode are per instance.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    to_move: Player,
    mode: GameMode,
    difficulty: Difficulty,
    cpu_player: Player,
    engine: MoveEngine,
}

impl GameController {
    /// Creates a controller for a human-vs-CPU game on easy, with the CPU
    /// playing O. The board is empty and X is to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_engine(MoveEngine::new())
    }

    /// Creates a controller that takes CPU moves from `engine`.
    ///
    /// Call [`start`](GameController::start) before the first move; a CPU
    /// bound to X only opens once the game starts.
    #[instrument(skip(engine))]
    pub fn with_engine(engine: MoveEngine) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            cpu_player: Player::O,
            engine,
        }
    }

    /// Sets the starting difficulty.
    pub fn difficulty_level(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Binds the CPU to `player`. Takes effect from the next [`start`].
    ///
    /// [`start`]: GameController::start
    pub fn cpu_plays(mut self, player: Player) -> Self {
        self.cpu_player = player;
        self
    }

    /// Starts a fresh game in `mode`, keeping the current difficulty.
    ///
    /// If the CPU plays X it opens immediately; its cell is returned.
    ///
    /// # Errors
    ///
    /// Only fails if the engine cannot move, which cannot happen on an empty
    /// board.
    #[instrument(skip(self), fields(difficulty = %self.difficulty, cpu = %self.cpu_player))]
    pub fn start(&mut self, mode: GameMode) -> Result<Option<usize>, GameError> {
        info!(%mode, "Game starting");
        self.board = Board::new();
        self.to_move = Player::X;
        self.mode = mode;
        self.cpu_turn()
    }

    /// Restarts in the current mode.
    ///
    /// # Errors
    ///
    /// See [`GameController::start`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Option<usize>, GameError> {
        self.start(self.mode)
    }

    /// Changes CPU strength. Applies from the next CPU turn.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Plays `index` for `player`, then lets the CPU answer if it is its turn.
    ///
    /// A rejected move leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalMove`] if the game is over, `player` is not
    ///   the one to move, or `player` is the CPU's side in a human-vs-CPU game.
    /// - [`GameError::Board`] if `index` is out of range or occupied.
    /// - [`GameError::Engine`] if the CPU reply fails (a bug, logged at error).
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn submit_move(&mut self, index: usize, player: Player) -> Result<MoveReport, GameError> {
        let to_move = match self.status() {
            GameStatus::InProgress(to_move) => to_move,
            GameStatus::Won(_) | GameStatus::Draw => {
                warn!(index, %player, "Move rejected: game is over");
                return Err(IllegalMove::GameOver.into());
            }
        };
        if player != to_move {
            warn!(index, %player, %to_move, "Move rejected: out of turn");
            return Err(IllegalMove::WrongPlayer(player).into());
        }
        if self.mode == GameMode::HumanVsCpu && player == self.cpu_player {
            warn!(index, %player, "Move rejected: side belongs to the CPU");
            return Err(IllegalMove::CpuSide(player).into());
        }

        self.apply(index, player).inspect_err(|e| {
            warn!(index, %player, error = %e, "Move rejected");
        })?;
        let cpu_reply = self.cpu_turn()?;

        Ok(MoveReport {
            placed: index,
            cpu_reply,
            status: self.status(),
        })
    }

    /// Plays `index` for whichever player is to move.
    ///
    /// # Errors
    ///
    /// See [`GameController::submit_move`].
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<MoveReport, GameError> {
        self.submit_move(index, self.to_move)
    }

    /// Current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board, self.to_move)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current CPU strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Side the CPU plays in [`GameMode::HumanVsCpu`].
    pub fn cpu_player(&self) -> Player {
        self.cpu_player
    }

    /// Copies out everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            status: self.status(),
            mode: self.mode,
            difficulty: self.difficulty,
            cpu_player: self.cpu_player,
        }
    }

    /// Places a mark and advances the turn unless the game just ended.
    fn apply(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        self.board.place(index, player)?;
        debug!(index, %player, "Mark placed");

        match self.status() {
            GameStatus::InProgress(_) => self.to_move = player.opponent(),
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        Ok(())
    }

    /// Makes the CPU's move when it is the CPU's turn in a human-vs-CPU game.
    fn cpu_turn(&mut self) -> Result<Option<usize>, GameError> {
        if self.mode != GameMode::HumanVsCpu
            || self.status() != GameStatus::InProgress(self.cpu_player)
        {
            return Ok(None);
        }

        let index = self
            .engine
            .select_move(&self.board, self.difficulty, self.cpu_player)
            .inspect_err(|e| error!(error = %e, board = ?self.board, "Engine failed on CPU turn"))?;
        self.apply(index, self.cpu_player)?;
        Ok(Some(index))
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn pvp() -> GameController {
        let mut game = GameController::with_engine(MoveEngine::with_seed(0));
        game.start(GameMode::HumanVsHuman).unwrap();
        game
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = pvp();
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
        game.play(4).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress(Player::O));
        game.play(0).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_wrong_player_rejected_without_effect() {
        let mut game = pvp();
        let before = game.snapshot();
        assert_eq!(
            game.submit_move(4, Player::O),
            Err(GameError::IllegalMove(IllegalMove::WrongPlayer(Player::O)))
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_occupied_and_out_of_range_rejected() {
        let mut game = pvp();
        game.play(4).unwrap();
        let before = game.snapshot();
        assert_eq!(game.play(4), Err(GameError::Board(BoardError::CellOccupied(4))));
        assert_eq!(game.play(9), Err(GameError::Board(BoardError::InvalidIndex(9))));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut game = pvp();
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.play(8), Err(GameError::IllegalMove(IllegalMove::GameOver)));
        assert_eq!(
            game.submit_move(8, Player::O),
            Err(GameError::IllegalMove(IllegalMove::GameOver))
        );
    }

    #[test]
    fn test_cpu_replies_in_human_vs_cpu() {
        let mut game = GameController::with_engine(MoveEngine::with_seed(5));
        game.start(GameMode::HumanVsCpu).unwrap();
        let report = game.play(4).unwrap();
        let reply = report.cpu_reply.expect("CPU should answer");
        assert_ne!(reply, 4);
        assert_eq!(game.board().count(Player::O), 1);
        assert_eq!(report.status, GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_no_cpu_in_human_vs_human() {
        let mut game = pvp();
        let report = game.play(4).unwrap();
        assert_eq!(report.cpu_reply, None);
        assert_eq!(game.board().count(Player::O), 0);
    }

    #[test]
    fn test_cpu_as_x_opens() {
        let mut game = GameController::with_engine(MoveEngine::with_seed(0))
            .difficulty_level(Difficulty::Hard)
            .cpu_plays(Player::X);
        let opening = game.start(GameMode::HumanVsCpu).unwrap();
        assert_eq!(opening, Some(0));
        assert_eq!(game.status(), GameStatus::InProgress(Player::O));
    }

    #[test]
    fn test_human_cannot_move_for_cpu_before_start() {
        let mut game = GameController::with_engine(MoveEngine::with_seed(0))
            .difficulty_level(Difficulty::Hard)
            .cpu_plays(Player::X);
        let before = game.snapshot();
        assert_eq!(game.play(4), Err(GameError::IllegalMove(IllegalMove::CpuSide(Player::X))));
        assert_eq!(game.snapshot(), before);

        assert_eq!(game.start(GameMode::HumanVsCpu), Ok(Some(0)));
        assert!(game.play(4).is_ok());
    }

    #[test]
    fn test_reset_keeps_mode_and_difficulty() {
        let mut game = pvp();
        game.set_difficulty(Difficulty::Medium);
        game.play(0).unwrap();
        game.reset().unwrap();
        assert_eq!(game.mode(), GameMode::HumanVsHuman);
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_snapshot_message() {
        let mut game = pvp();
        assert_eq!(game.snapshot().message(), "X's turn");
        game.play(0).unwrap();
        assert_eq!(game.snapshot().message(), "O's turn");
    }
}
