//! Board state: the 3x3 grid, occupied count and last mover.

use crate::error::InvalidInput;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::lines::LINES;
use crate::{Cell, Outcome, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// No line can be complete before this many cells are occupied.
const MIN_CELLS_FOR_WIN: usize = 5;

/// Width of the packed board word (2 bits per cell).
const PACKED_BITS: u32 = 18;

/// 3x3 tic-tac-toe board.
///
/// Created once per game in the empty state and mutated by successive moves.
/// The board is small and `Copy`, so speculative play works on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Number of non-empty cells.
    occupied: u8,
    /// Player who moved last, `None` before the first move.
    last_mover: Option<Player>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            occupied: 0,
            last_mover: None,
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position) == Cell::Empty
    }

    /// Number of occupied cells (0-9).
    pub fn occupied_count(&self) -> usize {
        usize::from(self.occupied)
    }

    /// Player who made the last move.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Player whose turn is next. X moves first.
    pub fn to_move(&self) -> Player {
        self.last_mover.map_or(Player::X, Player::opponent)
    }

    /// Parses a move token such as `b2` against this board.
    ///
    /// The token must be exactly a row letter `a`-`c` followed by a column
    /// digit `1`-`3`, naming an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for malformed tokens, out-of-range coordinates
    /// and occupied cells alike.
    #[instrument(skip(self))]
    pub fn parse_position(&self, token: &str) -> Result<Position, InvalidInput> {
        match Position::from_token(token) {
            Some(position) if self.is_empty(position) => Ok(position),
            _ => {
                debug!("Rejected move token");
                Err(InvalidInput::new(token))
            }
        }
    }

    /// Plays the next player's mark at `position`.
    ///
    /// The cell must be empty; this is not re-validated here. Use
    /// [`Board::parse_position`] or [`crate::suggest`] to obtain legal positions.
    #[instrument(skip_all, fields(player = %self.to_move(), %position))]
    pub fn apply_move(&mut self, position: Position) {
        debug_assert!(self.is_empty(position), "cell {position} is occupied");
        self.place(position, self.to_move());
        debug_assert_eq!(BoardInvariants::check_all(self), Ok(()));
    }

    /// Marks `position` for `player` without bookkeeping checks.
    pub(crate) fn place(&mut self, position: Position, player: Player) {
        self.cells[position.index()] = Cell::Occupied(player);
        self.occupied += 1;
        self.last_mover = Some(player);
    }

    /// Checks whether `player` has completed a line.
    ///
    /// Only `player`'s marks are tested, so this reports either a win for
    /// `player`, a draw on a full board, or an undecided game.
    pub fn winner(&self, player: Player) -> Outcome {
        if self.occupied_count() < MIN_CELLS_FOR_WIN {
            return Outcome::Undecided;
        }

        let mark = Cell::Occupied(player);
        if LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.cells[cell] == mark))
        {
            Outcome::Won(player)
        } else if self.occupied_count() == self.cells.len() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// Outcome of the game so far, judged for the player who moved last.
    pub fn outcome(&self) -> Outcome {
        self.last_mover
            .map_or(Outcome::Undecided, |player| self.winner(player))
    }

    /// All empty positions in row-major order.
    pub fn blanks(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&position| self.is_empty(position))
            .collect()
    }

    /// Packs the board into an 18-bit word, 2 bits per cell.
    ///
    /// Cell `i` occupies bits `2i..2i+1` with the codes of [`Cell::code`].
    pub fn packed(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .fold(0, |word, (i, cell)| word | u32::from(cell.code()) << (i * 2))
    }

    /// Rebuilds a board from its packed word.
    ///
    /// Returns `None` if any cell holds the invalid code `11`, bits above the
    /// 18-bit board are set, or the mark counts could not arise from X and O
    /// alternating with X first.
    #[instrument]
    pub fn from_packed(word: u32) -> Option<Self> {
        if word >> PACKED_BITS != 0 {
            return None;
        }

        let mut board = Self::new();
        let (mut x, mut o) = (0, 0);
        for (i, slot) in board.cells.iter_mut().enumerate() {
            *slot = Cell::from_code((word >> (i * 2) & 0b11) as u8)?;
            match *slot {
                Cell::Occupied(Player::X) => x += 1,
                Cell::Occupied(Player::O) => o += 1,
                Cell::Empty => {}
            }
        }

        board.occupied = x + o;
        board.last_mover = match (x, o) {
            (0, 0) => None,
            _ if x == o + 1 => Some(Player::X),
            _ if x == o => Some(Player::O),
            _ => {
                debug!(x, o, "Unbalanced mark counts");
                return None;
            }
        };
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "     1   2   3")?;
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let label = char::from(b'a' + row as u8);
            write!(
                f,
                " {}   {} | {} |",
                label,
                cells[0].symbol(),
                cells[1].symbol()
            )?;
            if cells[2] != Cell::Empty {
                write!(f, " {}", cells[2].symbol())?;
            }
            writeln!(f)?;
            if row != 2 {
                writeln!(f, "    ---+---+---")?;
            }
        }
        Ok(())
    }
}
