//! Interactive line-oriented game loop.
//!
//! Reads one command per line from any [`BufRead`] and writes the board and
//! messages to any [`Write`], so a session can be scripted in tests.

use anyhow::Result;
use noughts_tictactoe::{Difficulty, GameController, GameMode, GameStatus, Position};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play in a cell (0-8).
    Cell(usize),
    /// Start over in the current mode.
    Reset,
    /// Start over in a new mode.
    Mode(GameMode),
    /// Change CPU strength.
    Difficulty(Difficulty),
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses a line, returning `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "r" | "reset" => Some(Input::Reset),
            "?" | "h" | "help" => Some(Input::Help),
            "mode" => rest.parse().ok().map(Input::Mode),
            "difficulty" | "level" => rest.parse().ok().map(Input::Difficulty),
            _ => Position::parse_input(line).map(|pos| Input::Cell(pos.to_index())),
        }
    }
}

const HELP: &str = "\
Commands:
  1-9 or a cell name (e.g. center, top-left)  play a move
  reset                                       start over
  mode pvp|pvc                                switch mode and start over
  difficulty easy|medium|hard                 change CPU strength
  help                                        show this list
  quit                                        leave";

/// Runs a session until the player quits or input ends.
///
/// `delay` is how long to wait before showing the CPU's reply.
///
/// # Errors
///
/// Fails on I/O errors, or if the engine breaks its contract.
#[instrument(skip_all, fields(mode = %game.mode(), difficulty = %game.difficulty()))]
pub fn run<R: BufRead, W: Write>(
    game: &mut GameController,
    delay: Duration,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Session started");
    render(game, &mut output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("Input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::Help) => writeln!(output, "{}", HELP)?,
            Some(Input::Reset) => {
                announce_opening(game.reset()?, &mut output)?;
                render(game, &mut output)?;
            }
            Some(Input::Mode(mode)) => {
                announce_opening(game.start(mode)?, &mut output)?;
                writeln!(output, "Mode: {}", mode)?;
                render(game, &mut output)?;
            }
            Some(Input::Difficulty(difficulty)) => {
                game.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}", difficulty)?;
            }
            Some(Input::Cell(index)) => play_cell(game, index, delay, &mut output)?,
            None => writeln!(output, "Unrecognised input {:?}. Type 'help'.", line.trim())?,
        }
    }

    info!("Session ended");
    Ok(())
}

fn play_cell<W: Write>(
    game: &mut GameController,
    index: usize,
    delay: Duration,
    output: &mut W,
) -> Result<()> {
    let report = match game.play(index) {
        Ok(report) => report,
        Err(e) if e.is_rejection() => {
            writeln!(output, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(reply) = report.cpu_reply {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        writeln!(output, "CPU plays {}", label(reply))?;
    }
    render(game, output)
}

fn announce_opening<W: Write>(opening: Option<usize>, output: &mut W) -> Result<()> {
    if let Some(index) = opening {
        writeln!(output, "CPU opens {}", label(index))?;
    }
    Ok(())
}

fn label(index: usize) -> &'static str {
    Position::from_index(index).map_or("?", |pos| pos.label())
}

fn render<W: Write>(game: &GameController, output: &mut W) -> Result<()> {
    let snapshot = game.snapshot();
    writeln!(output, "\n{}\n", snapshot.board().display())?;
    writeln!(output, "{}", snapshot.message())?;
    if let GameStatus::Won(_) | GameStatus::Draw = snapshot.status() {
        writeln!(output, "Type 'reset' to play again or 'quit' to leave.")?;
    }
    Ok(())
}
