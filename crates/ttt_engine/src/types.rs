//! Core domain types for tic-tac-toe.

use crate::error::InvalidInput;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Bit plane of this player's mark inside a 2-bit cell slot.
    pub(crate) fn plane(self) -> u32 {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the 2-bit code of this cell: `00` empty, `01` O, `10` X.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0b00,
            Cell::Occupied(player) => 1 << player.plane(),
        }
    }

    /// Decodes a 2-bit cell code. `11` and anything wider are invalid.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(Cell::Empty),
            0b01 => Some(Cell::Occupied(Player::O)),
            0b10 => Some(Cell::Occupied(Player::X)),
            _ => None,
        }
    }

    /// Symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Player::O) => '0',
            Cell::Occupied(Player::X) => 'X',
        }
    }
}

/// A cell coordinate on the board, row and column both in `0..3`.
///
/// Positions are written as a row letter followed by a column digit, so the
/// top-left cell is `a1` and the center is `b2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        Self::from_index(row.checked_mul(3)?.checked_add(col)?).filter(|_| col < 3)
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Parses a two-character token like `b2` without looking at any board.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        let row = match row {
            'a'..='c' => row as usize - 'a' as usize,
            _ => return None,
        };
        let col = match col {
            '1'..='3' => col as usize - '1' as usize,
            _ => return None,
        };
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.row), self.col + 1)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = InvalidInput;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::from_token(&token).ok_or_else(|| InvalidInput::new(token))
    }
}

/// Result of checking a board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{} wins", _0)]
    Won(Player),
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Undecided")]
    Undecided,
}

impl Outcome {
    /// Returns true once the game is over.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}
