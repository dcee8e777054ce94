//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_tictactoe::{Difficulty, GameMode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a CPU opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Game mode: human-vs-cpu (pvc) or human-vs-human (pvp)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// CPU difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Side the CPU plays (X or O)
        #[arg(long)]
        cpu: Option<Player>,

        /// Seed for the CPU's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play CPU against CPU and report the results
    Simulate {
        /// Difficulty of the CPU playing X
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the CPU playing O
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the CPUs' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
