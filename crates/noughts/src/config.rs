//! Front-end configuration loaded from TOML.
//!
//! ```toml
//! [game]
//! mode = "human-vs-cpu"
//! difficulty = "hard"
//! cpu_player = "O"
//!
//! [cpu]
//! delay_ms = 400
//! seed = 7
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_tictactoe::{Difficulty, GameMode, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoughtsConfig {
    /// Game setup.
    game: GameSection,
    /// CPU pacing and randomness.
    cpu: CpuSection,
}

/// The `[game]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSection {
    /// Mode a new session starts in.
    mode: GameMode,
    /// Starting CPU difficulty.
    difficulty: Difficulty,
    /// Side the CPU plays.
    cpu_player: Player,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsCpu,
            difficulty: Difficulty::Easy,
            cpu_player: Player::O,
        }
    }
}

/// The `[cpu]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpuSection {
    /// Pause before showing the CPU's reply, in milliseconds.
    delay_ms: u64,
    /// Seed for reproducible CPU play.
    seed: Option<u64>,
}

impl Default for CpuSection {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

#[instrument]
fn default_delay_ms() -> u64 {
    400
}

impl CpuSection {
    /// The reply delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl NoughtsConfig {
    /// Loads configuration from a TOML file, or defaults if it doesn't exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.game.mode, difficulty = %config.game.difficulty, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        cpu_player: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.game.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.game.difficulty = difficulty;
        }
        if let Some(cpu_player) = cpu_player {
            self.game.cpu_player = cpu_player;
        }
        if seed.is_some() {
            self.cpu.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
