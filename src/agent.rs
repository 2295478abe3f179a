//! Minimax agent
//!
//! Every call to [`Agent::play`] builds the complete game tree below the
//! current board, resolves it with alpha-beta pruning and commits the chosen
//! move to the live board. No tree state survives between calls.

pub mod pruning;
pub mod scoring;
pub mod tie_break;
pub mod tree;

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

pub use pruning::{PruningEngine, Resolved, SearchStats, Window};
pub use scoring::{COMPLETED_LINE_BONUS, LeafScorer, ScoringConfig};
pub use tie_break::{FirstCandidate, RandomTieBreak, TieBreaker};
pub use tree::{GameTreeNode, TreeBuilder};

use crate::{
    Result,
    app::AgentConfig,
    ports::BoardPort,
    tictactoe::{Board, Line, Player, Position, WINNING_LINES, WinDetector, find_wins},
};

/// Winning lines and the win-detection function, supplied by the game loop
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub lines: &'static [Line],
    pub detect: WinDetector,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            lines: &WINNING_LINES,
            detect: find_wins,
        }
    }
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub position: Position,
    /// Resolved minimax value from the agent's point of view
    pub value: i32,
    /// Every move tied for `value`, in row-major order
    pub candidates: Vec<Position>,
    /// Nodes in the built tree
    pub nodes: usize,
    /// Nodes the pruning engine visited
    pub visited: usize,
}

/// Agent playing one token with full-depth search
pub struct Agent<T = RandomTieBreak<StdRng>> {
    token: Player,
    rules: Rules,
    config: AgentConfig,
    tie_break: T,
}

impl<T> std::fmt::Debug for Agent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("token", &self.token)
            .field("config", &self.config)
            .finish()
    }
}

impl Agent {
    /// Create an agent with the standard rules and a random tie-breaker
    /// seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(token: Player, config: AgentConfig) -> Result<Self> {
        let tie_break = RandomTieBreak::from_seed(config.seed);
        Self::with_parts(token, config, Rules::default(), tie_break)
    }
}

impl<T: TieBreaker> Agent<T> {
    /// Create an agent from explicit rules and tie-break source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_parts(
        token: Player,
        config: AgentConfig,
        rules: Rules,
        tie_break: T,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            token,
            rules,
            config,
            tie_break,
        })
    }

    pub fn token(&self) -> Player {
        self.token
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Search `board` with the agent to move, without committing anything.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] if the board has no empty cell or
    /// already holds a winning line.
    pub fn decide(&mut self, board: &Board) -> Result<Decision> {
        if board.is_full() {
            return Err(crate::Error::NoLegalMove);
        }

        let mut root = GameTreeNode::root(*board);
        TreeBuilder::new(self.rules.lines, self.rules.detect).expand(&mut root, self.token);
        if root.is_leaf() {
            return Err(crate::Error::NoLegalMove);
        }
        let nodes = root.node_count();

        // Leaves are scored for the opponent, so the agent's level minimizes.
        let scorer = LeafScorer::new(self.rules.lines, self.config.scoring);
        let mut engine = PruningEngine::new(
            scorer,
            self.token.opponent(),
            self.config.pruning,
            &mut self.tie_break,
        );
        let resolved = engine.resolve(&mut root, None, true);
        let stats = engine.stats();

        let position = root.chosen_move.ok_or(crate::Error::NoLegalMove)?;
        let candidates = resolved
            .desirable
            .iter()
            .filter_map(|&i| root.children[i].incoming_move)
            .collect();

        let decision = Decision {
            position,
            value: -resolved.value,
            candidates,
            nodes,
            visited: stats.visited,
        };
        debug!(
            token = %self.token,
            board = %board.encode(),
            nodes,
            visited = stats.visited,
            cutoffs = stats.cutoffs,
            value = decision.value,
            candidates = decision.candidates.len(),
            position = %position,
            "agent decided"
        );
        Ok(decision)
    }

    /// Read the live board, search it and commit the chosen move.
    ///
    /// The search only touches copies; the single commit at the end is the
    /// only write to `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] when there is nothing to play and
    /// propagates any rejection from the commit.
    pub fn play<B: BoardPort + ?Sized>(&mut self, board: &mut B) -> Result<Decision> {
        let snapshot = board.snapshot();
        let decision = self.decide(&snapshot)?;
        board.set(decision.position, self.token)?;
        Ok(decision)
    }
}
