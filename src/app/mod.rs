//! Application configuration.
//!
//! [`AgentConfig`] is built in code with the builder methods or loaded from a
//! JSON file; missing fields fall back to their defaults.
//!
//! ```
//! use tictactoe_agent::app::AgentConfig;
//!
//! let config = AgentConfig::new().with_seed(42).with_pruning(false);
//! assert_eq!(config.seed, Some(42));
//! ```

pub mod config;

pub use config::AgentConfig;
