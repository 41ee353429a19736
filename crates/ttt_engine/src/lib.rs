//! Tic-tac-toe engine with an exhaustive minimax move advisor.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s, occupied count and last mover, with
//!   move parsing, win/draw detection, blank enumeration and a packed 2-bit
//!   per cell encoding
//! - **Search**: [`suggest`] and [`analyze`] explore every continuation and
//!   return the optimal move for the player to move
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Board, Outcome, suggest};
//!
//! let mut board = Board::new();
//! let center = board.parse_position("b2").unwrap();
//! board.apply_move(center);
//!
//! let reply = suggest(&board).unwrap();
//! assert!(board.is_empty(reply));
//! assert_eq!(board.outcome(), Outcome::Undecided);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod lines;
mod search;
mod types;

pub use board::Board;
pub use error::InvalidInput;
pub use invariants::{
    AlternatingMarksInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    OccupiedCountInvariant,
};
pub use lines::{LINES, line_mask};
pub use search::{Evaluation, Suggestion, analyze, suggest};
pub use types::{Cell, Outcome, Player, Position};
