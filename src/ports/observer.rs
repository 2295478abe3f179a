//! Observer port - notification of committed moves
//!
//! The game loop uses these notifications to detect a finished game and to
//! decide whose turn comes next.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player, Position},
};

/// Observer trait for monitoring a live game
///
/// # Event Sequence
///
/// 1. `on_move(...)` - After every accepted commit, with the board after the move
/// 2. `on_game_end(outcome)` - Once, after the move that finished the game
///
/// An error returned from either hook is logged by the game; it never undoes
/// or rejects the commit that triggered it.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_agent::{
///     ports::MoveObserver,
///     tictactoe::GameOutcome,
/// };
///
/// struct Tally {
///     finished: usize,
/// }
///
/// impl MoveObserver for Tally {
///     fn on_game_end(&mut self, _outcome: GameOutcome) -> tictactoe_agent::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait MoveObserver {
    /// Called after a token has been placed.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_move(&mut self, _board: &Board, _pos: Position, _token: Player) -> Result<()> {
        Ok(())
    }

    /// Called when the game reaches a win or a draw.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_game_end(&mut self, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }
}
