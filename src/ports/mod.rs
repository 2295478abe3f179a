//! Ports (trait boundaries) for external collaborators.
//!
//! The decision engine never renders, reads input or owns the live game. It
//! consumes a board it can read and commit to, and the surrounding game loop
//! is told about every committed token through an observer.

pub mod board;
pub mod observer;

pub use board::BoardPort;
pub use observer::MoveObserver;
