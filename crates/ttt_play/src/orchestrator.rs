//! Game orchestration between contestants.

use crate::contestants::Contestant;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};
use ttt_engine::{Board, Outcome, Player};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// The game was played to a win or a draw.
    Finished(Outcome),
    /// A contestant withdrew before the game was over.
    Withdrew(Player),
}

/// Runs a game between two contestants, printing the board after each move.
pub struct Match<W> {
    board: Board,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
    output: W,
}

impl<W: Write> Match<W> {
    /// Creates a new match on an empty board.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>, output: W) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            output,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the match and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop until the game is decided or a contestant withdraws.
    ///
    /// # Errors
    ///
    /// Fails if a contestant fails, picks an occupied cell, or output fails.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<MatchEnd> {
        info!("Starting match");
        writeln!(self.output, "{}", self.board)?;

        loop {
            let outcome = self.board.outcome();
            if outcome.is_decided() {
                info!(%outcome, "Match finished");
                writeln!(self.output, "{}", self.describe(outcome))?;
                return Ok(MatchEnd::Finished(outcome));
            }

            let mark = self.board.to_move();
            let contestant = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %contestant.name(), %mark, "Waiting for move");
            let Some(position) = contestant.choose(&self.board)? else {
                info!(player = %contestant.name(), "Contestant withdrew");
                writeln!(self.output, "{} withdrew.", contestant.name())?;
                return Ok(MatchEnd::Withdrew(mark));
            };

            if !self.board.is_empty(position) {
                anyhow::bail!("{} chose occupied cell {}", contestant.name(), position);
            }
            let name = contestant.name().to_string();

            self.board.apply_move(position);
            writeln!(self.output, "{} ({}) plays {}\n", name, mark, position)?;
            writeln!(self.output, "{}", self.board)?;
        }
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Won(player) => {
                let name = match player {
                    Player::X => self.player_x.name(),
                    Player::O => self.player_o.name(),
                };
                format!("{} ({}) wins!", name, player)
            }
            Outcome::Draw | Outcome::Undecided => "It's a draw.".to_string(),
        }
    }
}
