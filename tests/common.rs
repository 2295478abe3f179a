//! Common test utilities for the agent test suite.

#![allow(dead_code)]

use tictactoe_agent::{
    agent::{Agent, FirstCandidate, LeafScorer, Rules, ScoringConfig},
    app::AgentConfig,
    tictactoe::{Board, Player, Position, WINNING_LINES, find_wins},
};

/// Agent that always takes the first of several equal moves
pub fn first_candidate_agent(token: Player, config: AgentConfig) -> Agent<FirstCandidate> {
    Agent::with_parts(token, config, Rules::default(), FirstCandidate)
        .expect("default configuration is valid")
}

pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("test board literal is valid")
}

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("test position is on the board")
}

/// Plain minimax with no cutoffs and no tree, scored for `perspective`.
///
/// Returns the value of `board` with `to_move` playing next, minimizing when
/// `to_move` is the agent (leaves are scored for the agent's opponent).
pub fn brute_force_value(
    board: &Board,
    to_move: Player,
    perspective: Player,
    scoring: ScoringConfig,
) -> i32 {
    let scorer = LeafScorer::new(&WINNING_LINES, scoring);
    if !find_wins(board, &WINNING_LINES).is_empty() || board.is_full() {
        return scorer.score(board, perspective);
    }

    let values = board.empty_positions().into_iter().map(|p| {
        let next = board.with_move(p, to_move).expect("empty cell");
        brute_force_value(&next, to_move.opponent(), perspective, scoring)
    });
    if to_move == perspective {
        values.max().expect("at least one empty cell")
    } else {
        values.min().expect("at least one empty cell")
    }
}

/// Every root move whose brute-force value equals the best for `agent`
pub fn brute_force_moves(board: &Board, agent: Player, scoring: ScoringConfig) -> (i32, Vec<Position>) {
    let perspective = agent.opponent();
    let scored: Vec<(Position, i32)> = board
        .empty_positions()
        .into_iter()
        .map(|p| {
            let next = board.with_move(p, agent).expect("empty cell");
            (p, brute_force_value(&next, perspective, perspective, scoring))
        })
        .collect();
    let best = scored.iter().map(|(_, v)| *v).min().expect("non-full board");
    let moves = scored
        .into_iter()
        .filter(|(_, v)| *v == best)
        .map(|(p, _)| p)
        .collect();
    (-best, moves)
}
