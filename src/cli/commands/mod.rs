//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod selfplay;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::{app::AgentConfig, tictactoe::Player};

/// Agent options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct AgentArgs {
    /// JSON file with an agent configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Visit the whole tree instead of applying alpha-beta cutoffs
    #[arg(long)]
    pub no_pruning: bool,
}

impl AgentArgs {
    /// Configuration from `--config`, with command-line overrides applied
    pub fn load(&self) -> Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::from_json_file(path)
                .with_context(|| format!("loading agent config from {}", path.display()))?,
            None => AgentConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.no_pruning {
            config = config.with_pruning(false);
        }
        Ok(config)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
