//! Noughts - play tic-tac-toe against a CPU in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts::commands::{play, simulate};
use noughts::{Cli, Command, NoughtsConfig};
use noughts_tictactoe::{Difficulty, GameController, MoveEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr at warn by default so they don't interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = NoughtsConfig::load(&cli.config)?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            cpu,
            seed,
        } => run_play(config.with_overrides(mode, difficulty, cpu, seed)),
        Command::Simulate {
            x,
            o,
            games,
            seed,
            json,
        } => run_simulate(x, o, games, seed.or(*config.cpu().seed()), json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: NoughtsConfig) -> Result<()> {
    let engine = match config.cpu().seed() {
        Some(seed) => MoveEngine::with_seed(*seed),
        None => MoveEngine::new(),
    };
    let mut game = GameController::with_engine(engine)
        .difficulty_level(*config.game().difficulty())
        .cpu_plays(*config.game().cpu_player());

    let opening = game.start(*config.game().mode())?;
    if let Some(index) = opening {
        info!(index, "CPU opened");
    }

    println!("Noughts: type 'help' for commands.");
    let stdin = std::io::stdin();
    play::run(&mut game, config.cpu().delay(), stdin.lock(), std::io::stdout())
}

/// Run CPU-vs-CPU games and print the tally
#[instrument]
fn run_simulate(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let tally = simulate::simulate(x, o, games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
