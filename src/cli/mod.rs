//! CLI infrastructure for the tic-tac-toe agent
//!
//! This module provides the command-line interface for inspecting single
//! decisions and running agent-versus-agent matches.

pub mod commands;
pub mod output;
