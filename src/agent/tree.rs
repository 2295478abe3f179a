//! Exhaustive game tree construction
//!
//! The tree is strictly top-down: a node owns its children and keeps no
//! reference to its parent. Every node owns an independent board copy that
//! differs from its parent's in exactly one cell.

use crate::tictactoe::{Board, Line, Player, Position, WinDetector};

/// A hypothetical board reached after zero or more moves from the search root
#[derive(Debug, Clone)]
pub struct GameTreeNode {
    pub board: Board,
    /// Move that produced this node from its parent; `None` at the root
    pub incoming_move: Option<Position>,
    /// Recommended next move once the pruning engine has resolved this node
    pub chosen_move: Option<Position>,
    /// Continuations in row-major order of the cell played; empty for leaves
    pub children: Vec<GameTreeNode>,
    pub lower_bound: i32,
    pub upper_bound: i32,
}

impl GameTreeNode {
    /// Root node for a search starting at `board`
    pub fn root(board: Board) -> Self {
        Self::new(board, None)
    }

    fn new(board: Board, incoming_move: Option<Position>) -> Self {
        Self {
            board,
            incoming_move,
            chosen_move: None,
            children: Vec::new(),
            lower_bound: i32::MIN,
            upper_bound: i32::MAX,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Resolved value, once both bounds have collapsed
    pub fn value(&self) -> Option<i32> {
        (self.lower_bound == self.upper_bound).then_some(self.lower_bound)
    }
}

/// Enumerates every legal continuation until a win or a full board
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    lines: &'a [Line],
    detect: WinDetector,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(lines: &'a [Line], detect: WinDetector) -> Self {
        Self { lines, detect }
    }

    /// Populate `node.children` recursively, `next` placing the first token.
    ///
    /// A node whose board already holds a winning line stays childless, as
    /// does a full board. Recursion depth is bounded by the nine cells.
    pub fn expand(&self, node: &mut GameTreeNode, next: Player) {
        if !(self.detect)(&node.board, self.lines).is_empty() {
            return;
        }

        let empties = node.board.empty_positions();
        node.children.reserve_exact(empties.len());
        for pos in empties {
            let mut child = GameTreeNode::new(node.board.filled(pos, next), Some(pos));
            self.expand(&mut child, next.opponent());
            node.children.push(child);
        }
    }
}
