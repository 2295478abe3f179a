//! Winning line detection for Tic-Tac-Toe

use super::{Board, Cell, Player, Position};

/// Three positions that win when uniformly occupied
pub type Line = [Position; 3];

/// Win detection function: board -> lines fully held by a single token
pub type WinDetector = fn(&Board, &[Line]) -> Vec<Line>;

const fn at(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// Winning lines on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)], // rows
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)], // columns
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)], // diagonals
];

/// Find every line whose three cells hold the same non-empty token.
///
/// A legal game yields at most one match (two when the final move completes
/// two lines at once); synthetic boards may yield more.
pub fn find_wins(board: &Board, lines: &[Line]) -> Vec<Line> {
    lines
        .iter()
        .filter(|line| line_owner(board, line).is_some())
        .copied()
        .collect()
}

/// The player holding all three cells of `line`, if any
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let first = board.get(line[0]);
    if first == Cell::Empty {
        return None;
    }
    if line.iter().all(|&pos| board.get(pos) == first) {
        first.to_player()
    } else {
        None
    }
}

/// Winner of the board under the standard lines
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES
        .iter()
        .find_map(|line| line_owner(board, line))
}
