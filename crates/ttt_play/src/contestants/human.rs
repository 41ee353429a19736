//! Human contestant reading move tokens from a line-based input.

use super::Contestant;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;
use ttt_engine::{Board, Position, analyze};

/// Token that prints the advisor's suggestion.
const HINT: &str = "?";

/// Tokens that abandon the game.
const QUIT: [&str; 2] = ["q", "quit"];

/// Human player typing moves like `b2`.
pub struct Human<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> Human<R, W> {
    /// Creates a new human contestant.
    ///
    /// With `hints` set the advisor's suggestion is printed before each move.
    pub fn new(name: impl Into<String>, input: R, output: W, hints: bool) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints,
        }
    }

    fn hint(&mut self, board: &Board) -> Result<()> {
        if let Some(suggestion) = analyze(board) {
            writeln!(
                self.output,
                "Hint: {} ({})",
                suggestion.position, suggestion.evaluation
            )?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Contestant for Human<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Option<Position>> {
        if self.hints {
            self.hint(board)?;
        }

        loop {
            write!(self.output, "{} ({}) to move: ", self.name, board.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(None);
            }

            let token = line.trim();
            if QUIT.contains(&token) {
                return Ok(None);
            }
            if token == HINT {
                self.hint(board)?;
                continue;
            }

            match board.parse_position(token) {
                Ok(position) => return Ok(Some(position)),
                Err(e) => {
                    debug!(error = %e, "Invalid move token");
                    writeln!(self.output, "Invalid move, try again (e.g. b2).")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
