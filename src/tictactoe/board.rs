//! Board snapshot representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose token occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game, identified by the token it places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate on the board.
///
/// Always inside the 3x3 grid: outside this crate a position can only be
/// built through [`Position::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Position {
    /// Create a position, rejecting coordinates outside the 3x3 grid.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= Board::SIZE || col >= Board::SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(Position { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * Board::SIZE + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable snapshot of the 3x3 grid.
///
/// `Board` is `Copy`: every hypothetical position in the search tree owns an
/// independent copy, so siblings and parents never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: usize = 3;

    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters in row-major order.
    /// Whitespace and `|` / `/` row separators are ignored, so `"XX.|...|..."`
    /// and `"XX......."` describe the same board.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cell characters remain after filtering or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Board { cells })
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All positions in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Position { row, col }))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        Self::positions().filter(|&pos| self.is_empty(pos)).collect()
    }

    pub fn empty_count(&self) -> usize {
        Self::positions().filter(|&pos| self.is_empty(pos)).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Number of cells holding the player's token
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        Self::positions()
            .filter(|&pos| self.get(pos) == target)
            .count()
    }

    /// Return a copy of this board with one more token placed.
    ///
    /// # Errors
    ///
    /// Returns `CellOccupied` if the cell already holds a token.
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: Position, player: Player) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Place a token in place. Cells are monotonic: an occupied cell is never
    /// overwritten.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> Result<(), crate::Error> {
        let pos = Position::new(pos.row, pos.col)?;
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row][pos.col] = player.to_cell();
        Ok(())
    }

    /// Copy with `pos` set to `player`; callers guarantee `pos` is empty.
    pub(crate) fn filled(&self, pos: Position, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "filled over occupied cell {pos}");
        let mut next = *self;
        next.cells[pos.row][pos.col] = player.to_cell();
        next
    }

    /// Compact single-line encoding, e.g. `XX.......`
    pub fn encode(&self) -> String {
        Self::positions().map(|pos| self.get(pos).to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < Self::SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(Board::positions().all(|pos| board.is_empty(pos)));
    }

    #[test]
    fn test_from_string_with_separators() {
        let a = Board::from_string("XX.|.O.|...").unwrap();
        let b = Board::from_string("XX. .O. ...").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(Position { row: 0, col: 1 }), Cell::X);
        assert_eq!(a.get(Position { row: 1, col: 1 }), Cell::O);
        assert_eq!(a.encode(), "XX..O....");
    }

    #[test]
    fn test_from_string_errors() {
        let err = Board::from_string("XX").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { got: 2, .. }
        ));

        let err = Board::from_string("XX.Q.....").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'Q',
                position: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board = Board::from_string("X.O.X.O.X").unwrap();
        let empties = board.empty_positions();
        assert_eq!(
            empties,
            vec![
                Position { row: 0, col: 1 },
                Position { row: 1, col: 0 },
                Position { row: 1, col: 2 },
                Position { row: 2, col: 1 },
            ]
        );
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let pos = Position::new(1, 1).unwrap();
        let next = board.with_move(pos, Player::O).unwrap();

        assert!(board.is_empty(pos));
        assert_eq!(next.get(pos), Cell::O);

        let result = next.with_move(pos, Player::X);
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_position_bounds() {
        let cell = Position::new(2, 1).unwrap();
        assert_eq!((cell.row(), cell.col()), (2, 1));
        assert_eq!(cell.index(), 7);
        assert!(matches!(
            Position::new(3, 0),
            Err(crate::Error::InvalidPosition { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.to_string(), "XO.\n...\n...");
    }
}
