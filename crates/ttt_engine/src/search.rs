//! Exhaustive minimax move advisor.
//!
//! Every continuation from the current position is explored; there is no
//! pruning and nothing is cached between calls. The tree is at most 9 ply
//! deep, so a search from the empty board visits roughly half a million
//! positions.

use crate::{Board, Outcome, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use tracing::{debug, instrument};

/// Value of a position from one player's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Evaluation {
    /// The opponent wins with best play.
    #[display("loss")]
    Loss,
    /// Neither side can force a win.
    #[display("draw")]
    Draw,
    /// This player wins with best play.
    #[display("win")]
    Win,
}

impl Evaluation {
    /// Signed value: -1 loss, 0 draw, +1 win.
    pub fn value(self) -> i8 {
        match self {
            Evaluation::Loss => -1,
            Evaluation::Draw => 0,
            Evaluation::Win => 1,
        }
    }

    /// Evaluation of a decided outcome for `player`.
    pub fn of(outcome: Outcome, player: Player) -> Option<Self> {
        match outcome {
            Outcome::Won(winner) if winner == player => Some(Evaluation::Win),
            Outcome::Won(_) => Some(Evaluation::Loss),
            Outcome::Draw => Some(Evaluation::Draw),
            Outcome::Undecided => None,
        }
    }
}

impl Neg for Evaluation {
    type Output = Self;

    /// The same value seen from the opponent's side.
    fn neg(self) -> Self {
        match self {
            Evaluation::Loss => Evaluation::Win,
            Evaluation::Draw => Evaluation::Draw,
            Evaluation::Win => Evaluation::Loss,
        }
    }
}

/// The advisor's recommended move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Suggestion {
    /// Player the move is for.
    pub player: Player,
    /// Recommended cell.
    pub position: Position,
    /// Value of the game after this move with best play by both sides.
    pub evaluation: Evaluation,
}

/// Returns the optimal move for the player to move.
///
/// Returns `None` when the game is already over or no cell is empty.
pub fn suggest(board: &Board) -> Option<Position> {
    analyze(board).map(|suggestion| suggestion.position)
}

/// Returns the optimal move for the player to move, with its evaluation.
///
/// Moves are preferred win over draw over loss. Among equal moves the first
/// in row-major order is chosen.
#[instrument(skip(board), fields(occupied = board.occupied_count(), player = %board.to_move()))]
pub fn analyze(board: &Board) -> Option<Suggestion> {
    if board.outcome().is_decided() {
        debug!(outcome = %board.outcome(), "Game already over");
        return None;
    }

    let player = board.to_move();
    let (position, evaluation) = search(board, player)?;
    debug!(%position, %evaluation, "Search complete");
    Some(Suggestion::new(player, position, evaluation))
}

/// Searches every empty cell for `player`, recursing on the opponent's reply.
///
/// A move that decides the game is returned at once without looking at later
/// cells, and scanning stops at the first forced win.
fn search(board: &Board, player: Player) -> Option<(Position, Evaluation)> {
    let mut best: Option<(Position, Evaluation)> = None;

    for position in board.blanks() {
        let mut child = *board;
        child.place(position, player);

        if let Some(evaluation) = Evaluation::of(child.winner(player), player) {
            return Some((position, evaluation));
        }

        let Some((_, reply)) = search(&child, player.opponent()) else {
            continue;
        };
        let evaluation = -reply;
        if best.is_none_or(|(_, value)| evaluation > value) {
            best = Some((position, evaluation));
        }
        if evaluation == Evaluation::Win {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(tokens: &[&str]) -> Board {
        let mut board = Board::new();
        for token in tokens {
            let position = board.parse_position(token).unwrap();
            board.apply_move(position);
        }
        board
    }

    fn pos(token: &str) -> Position {
        Position::from_token(token).unwrap()
    }

    #[test]
    fn test_evaluation_ordering() {
        assert!(Evaluation::Win > Evaluation::Draw);
        assert!(Evaluation::Draw > Evaluation::Loss);
        assert_eq!(-Evaluation::Win, Evaluation::Loss);
        assert_eq!(-Evaluation::Draw, Evaluation::Draw);
        assert_eq!(Evaluation::Loss.value(), -1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X: a1 a2, O: b1 b2, X to move.
        let board = play(&["a1", "b1", "a2", "b2"]);
        let suggestion = analyze(&board).unwrap();
        assert_eq!(suggestion.player, Player::X);
        assert_eq!(suggestion.position, pos("a3"));
        assert_eq!(suggestion.evaluation, Evaluation::Win);
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X: a1 c3, O: b2 a2; O threatens c2, X must block.
        let board = play(&["a1", "b2", "c3", "a2"]);
        let suggestion = analyze(&board).unwrap();
        assert_eq!(suggestion.position, pos("c2"));
    }

    #[test]
    fn test_last_cell_is_forced() {
        let board = play(&["a1", "b2", "a2", "a3", "c1", "b1", "b3", "c2"]);
        assert_eq!(board.blanks(), vec![pos("c3")]);
        let suggestion = analyze(&board).unwrap();
        assert_eq!(suggestion.position, pos("c3"));
        assert_eq!(suggestion.evaluation, Evaluation::Draw);
    }

    #[test]
    fn test_finished_game_has_no_suggestion() {
        let board = play(&["a1", "b1", "a2", "b2", "a3"]);
        assert_eq!(board.outcome(), Outcome::Won(Player::X));
        assert_eq!(suggest(&board), None);
    }

    #[test]
    fn test_lost_position_reports_loss() {
        // X forks on b1 and c2; O cannot block both.
        let board = play(&["a1", "b2", "c3", "a3", "c1"]);
        assert_eq!(board.to_move(), Player::O);
        let suggestion = analyze(&board).unwrap();
        assert_eq!(suggestion.evaluation, Evaluation::Loss);
        // Every move loses, so the first empty cell is kept.
        assert_eq!(suggestion.position, pos("a2"));
    }
}
