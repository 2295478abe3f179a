//! Tic-Tac-Toe board representation and game loop

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player, Position};
pub use game::{Game, GameOutcome};
pub use lines::{Line, WINNING_LINES, WinDetector, find_wins, winner};
