//! Structural invariants of a board.
//!
//! These hold for every board reachable by legal play. They are checked in
//! debug builds after each applied move and can be tested independently.

use crate::{Board, Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the occupied count matches the number of non-empty cells.
pub struct OccupiedCountInvariant;

impl Invariant<Board> for OccupiedCountInvariant {
    fn holds(board: &Board) -> bool {
        let filled = board
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count();
        filled == board.occupied_count()
    }

    fn description() -> &'static str {
        "Occupied count matches the non-empty cells"
    }
}

/// Invariant: X moves first and the players alternate.
///
/// X has as many marks as O or exactly one more, and the recorded last mover
/// agrees with the mark counts.
pub struct AlternatingMarksInvariant;

impl Invariant<Board> for AlternatingMarksInvariant {
    fn holds(board: &Board) -> bool {
        let count = |player| {
            board
                .cells()
                .iter()
                .filter(|cell| **cell == Cell::Occupied(player))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));

        match board.last_mover() {
            None => x == 0 && o == 0,
            Some(Player::X) => x == o + 1,
            Some(Player::O) => x == o && o > 0,
        }
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (OccupiedCountInvariant, AlternatingMarksInvariant);
