//! Contestant trait and implementations.

mod advisor;
mod human;

pub use advisor::Advisor;
pub use human::Human;

use anyhow::Result;
use ttt_engine::{Board, Position};

/// Something that picks moves: a person at the terminal or the advisor.
pub trait Contestant {
    /// Picks a move for the player to move on `board`.
    ///
    /// Returns `None` when the contestant withdraws from the game.
    fn choose(&mut self, board: &Board) -> Result<Option<Position>>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
