//! The eight winning lines.

use crate::Player;

/// Winning lines as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Mask selecting `player`'s marks on `line` in the packed board word.
///
/// Cell `i` sits at bits `2i..2i+1` of [`Board::packed`](crate::Board::packed),
/// O on the low bit and X on the high bit.
pub fn line_mask(line: [usize; 3], player: Player) -> u32 {
    line.iter()
        .fold(0, |mask, &cell| mask | 1 << (cell as u32 * 2 + player.plane()))
}
