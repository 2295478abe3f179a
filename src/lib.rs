//! Tic-Tac-Toe minimax agent
//!
//! This crate provides:
//! - Board snapshots, winning lines and a live game loop
//! - Exhaustive game tree construction below any position
//! - Minimax with alpha-beta pruning and randomized tie-breaking
//! - An agent facade that commits its move through a board port
//!
//! ```
//! use tictactoe_agent::{
//!     agent::Agent,
//!     app::AgentConfig,
//!     tictactoe::{Board, Player, Position},
//! };
//!
//! let mut agent = Agent::new(Player::X, AgentConfig::new().with_seed(1))?;
//! let board = Board::from_string("XX.|OO.|...")?;
//! let decision = agent.decide(&board)?;
//! assert_eq!(decision.position, Position::new(0, 2)?);
//! # Ok::<(), tictactoe_agent::Error>(())
//! ```

pub mod agent;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use agent::{Agent, Decision};
pub use app::AgentConfig;
pub use error::{Error, Result};
