//! Configuration types for agent creation.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::agent::ScoringConfig;

/// Configuration for creating an [`crate::agent::Agent`].
///
/// # Examples
///
/// ```
/// use tictactoe_agent::{agent::ScoringConfig, app::AgentConfig};
///
/// let config = AgentConfig::new()
///     .with_seed(42)
///     .with_scoring(ScoringConfig {
///         completed_line_bonus: 0,
///         ..ScoringConfig::default()
///     });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Random seed for tie-breaking; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Apply alpha-beta cutoffs; disabling visits the whole tree
    pub pruning: bool,
    /// Leaf heuristic parameters
    pub scoring: ScoringConfig,
}

impl AgentConfig {
    /// Create a configuration with default values:
    /// - Seed: None (non-deterministic)
    /// - Pruning: enabled
    /// - Scoring: completed-line bonus of 2, tempo enabled
    pub fn new() -> Self {
        Self {
            seed: None,
            pruning: true,
            scoring: ScoringConfig::default(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Set the leaf heuristic parameters.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON or
    /// fails [`AgentConfig::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: AgentConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a negative completed-line bonus,
    /// which would let a won board score below the lines it completes.
    pub fn validate(&self) -> crate::Result<()> {
        if self.scoring.completed_line_bonus < 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "completed_line_bonus must be non-negative, got {}",
                    self.scoring.completed_line_bonus
                ),
            });
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
