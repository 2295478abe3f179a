//! Board port - read accessor and commit operation for the live board

use crate::{
    Result,
    tictactoe::{Board, Player, Position},
};

/// Live board contract consumed by [`crate::agent::Agent::play`].
///
/// # Examples
///
/// ```
/// use tictactoe_agent::{
///     ports::BoardPort,
///     tictactoe::{Board, Player, Position},
/// };
///
/// struct Scratch(Board);
///
/// impl BoardPort for Scratch {
///     fn snapshot(&self) -> Board {
///         self.0
///     }
///
///     fn set(&mut self, pos: Position, token: Player) -> tictactoe_agent::Result<()> {
///         self.0 = self.0.with_move(pos, token)?;
///         Ok(())
///     }
/// }
///
/// let mut scratch = Scratch(Board::new());
/// scratch.set(Position::new(1, 1).unwrap(), Player::X).unwrap();
/// assert!(scratch.set(Position::new(1, 1).unwrap(), Player::O).is_err());
/// ```
pub trait BoardPort {
    /// Current contents of all nine cells, reflecting the live state at call time.
    fn snapshot(&self) -> Board;

    /// Mark one empty cell with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOccupied`] if the cell already holds a
    /// token. Implementations notify their observers only on success.
    fn set(&mut self, pos: Position, token: Player) -> Result<()>;
}
