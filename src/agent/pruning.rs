//! Minimax with alpha-beta cutoffs and randomized tie-breaking
//!
//! Leaves are scored from one fixed perspective chosen at the root. Levels
//! alternate between minimizing and maximizing that score. At each level the
//! engine keeps the *desirable set*: every child tied for the best value seen
//! so far. It is cleared on a strict improvement, extended on a tie and left
//! alone otherwise. Once the level is done, one member is drawn through the
//! injected [`TieBreaker`].
//!
//! Cutoffs are strict. A level stops only when a child is strictly worse for
//! the enclosing level than what that level already holds, so a cut node
//! never ties into its parent's desirable set and every node whose value lies
//! inside its window is resolved exactly. At the root this means the
//! desirable set holds every optimal move.

use tracing::trace;

use super::{scoring::LeafScorer, tie_break::TieBreaker, tree::GameTreeNode};
use crate::tictactoe::Player;

/// Bounds an enclosing level has already secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Best value a maximizing ancestor is guaranteed
    pub alpha: i32,
    /// Best value a minimizing ancestor is guaranteed
    pub beta: i32,
}

impl Window {
    pub const OPEN: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };
}

/// Outcome of resolving one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: i32,
    /// Indices into the node's children tied for `value`; empty for leaves
    pub desirable: Vec<usize>,
}

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub visited: usize,
    pub cutoffs: usize,
}

pub struct PruningEngine<'a, T: ?Sized> {
    scorer: LeafScorer<'a>,
    perspective: Player,
    pruning: bool,
    tie_break: &'a mut T,
    stats: SearchStats,
}

impl<'a, T: TieBreaker + ?Sized> PruningEngine<'a, T> {
    /// `perspective` is the player leaves are scored for; it never changes
    /// during the search. With `pruning` off every child is visited.
    pub fn new(
        scorer: LeafScorer<'a>,
        perspective: Player,
        pruning: bool,
        tie_break: &'a mut T,
    ) -> Self {
        Self {
            scorer,
            perspective,
            pruning,
            tie_break,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Resolve `node` bottom-up, writing its bounds and `chosen_move`.
    ///
    /// `bound` is the window of the enclosing level (`None` at the root, where
    /// no cutoff applies).
    pub fn resolve(
        &mut self,
        node: &mut GameTreeNode,
        bound: Option<Window>,
        minimize: bool,
    ) -> Resolved {
        self.stats.visited += 1;

        if node.is_leaf() {
            let value = self.scorer.score(&node.board, self.perspective);
            node.lower_bound = value;
            node.upper_bound = value;
            node.chosen_move = node.incoming_move;
            return Resolved {
                value,
                desirable: Vec::new(),
            };
        }

        let outer = bound.unwrap_or(Window::OPEN);
        let mut best: Option<i32> = None;
        let mut desirable: Vec<usize> = Vec::new();

        for (index, child) in node.children.iter_mut().enumerate() {
            let window = match (minimize, best) {
                (true, Some(b)) => Window {
                    beta: outer.beta.min(b),
                    ..outer
                },
                (false, Some(b)) => Window {
                    alpha: outer.alpha.max(b),
                    ..outer
                },
                (_, None) => outer,
            };
            let value = self.resolve(child, Some(window), !minimize).value;

            match best {
                Some(b) if value == b => desirable.push(index),
                Some(b) if (minimize && value > b) || (!minimize && value < b) => {}
                _ => {
                    best = Some(value);
                    desirable.clear();
                    desirable.push(index);
                }
            }

            if self.pruning {
                if let Some(parent) = bound {
                    let cut = if minimize {
                        value < parent.alpha
                    } else {
                        value > parent.beta
                    };
                    if cut {
                        self.stats.cutoffs += 1;
                        trace!(value, ?parent, minimize, index, "cutoff");
                        break;
                    }
                }
            }
        }

        // Non-leaf nodes always visit their first child.
        let value = best.unwrap_or_default();
        let pick = self.tie_break.pick(desirable.len()).min(desirable.len() - 1);
        let selected = &node.children[desirable[pick]];

        node.lower_bound = value;
        node.upper_bound = value;
        node.chosen_move = selected.incoming_move;

        Resolved { value, desirable }
    }
}
