//! Noughts - terminal front end for [`noughts_tictactoe`].
//!
//! # Architecture
//!
//! - **CLI**: `play` and `simulate` subcommands
//! - **Config**: optional TOML file, overridden by flags
//! - **Commands**: the interactive loop and CPU-vs-CPU runs

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
mod config;

// Crate-level exports - Configuration
pub use config::{ConfigError, CpuSection, GameSection, NoughtsConfig};

// Crate-level exports - CLI
pub use cli::{Cli, Command};
