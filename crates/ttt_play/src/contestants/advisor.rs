//! Contestant that always plays the advisor's suggestion.

use super::Contestant;
use anyhow::Result;
use tracing::debug;
use ttt_engine::{Board, Position, analyze};

/// Plays the minimax-optimal move every turn.
pub struct Advisor {
    name: String,
}

impl Advisor {
    /// Creates a new advisor contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for Advisor {
    fn choose(&mut self, board: &Board) -> Result<Option<Position>> {
        let Some(suggestion) = analyze(board) else {
            anyhow::bail!("No move available on a finished board");
        };
        debug!(
            advisor = %self.name,
            position = %suggestion.position,
            evaluation = %suggestion.evaluation,
            "Advisor chose position"
        );
        Ok(Some(suggestion.position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
