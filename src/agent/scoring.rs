//! Line-counting heuristic for leaf positions
//!
//! Each line contributes to a player's total only while the opponent has no
//! token on it. A completed line earns a fixed bonus on top of its three
//! tokens, and the owner of a completed line also earns one point per empty
//! cell left on the board, so an earlier win outranks a later one.
//!
//! A drawn board scores zero for both players, since every line of a full
//! drawn board is contested. With a positive bonus or the tempo term, any won
//! board scores positive for the winner and negative for the loser, so minimax
//! over these scores never trades a win or a draw for a worse outcome. With
//! both switched off a won board can score zero or less for its winner.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Line, Player};

/// Bonus added for a line fully occupied by one token
pub const COMPLETED_LINE_BONUS: i32 = 2;

/// Tunable parts of the leaf heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Bonus per completed line, on top of its token count
    pub completed_line_bonus: i32,
    /// Reward the owner of a completed line with the number of empty cells
    pub tempo: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completed_line_bonus: COMPLETED_LINE_BONUS,
            tempo: true,
        }
    }
}

/// Heuristic evaluation of boards that the tree builder did not expand
#[derive(Debug, Clone, Copy)]
pub struct LeafScorer<'a> {
    lines: &'a [Line],
    config: ScoringConfig,
}

impl<'a> LeafScorer<'a> {
    pub fn new(lines: &'a [Line], config: ScoringConfig) -> Self {
        Self { lines, config }
    }

    /// Running total of `player` over every uncontested line
    pub fn total(&self, board: &Board, player: Player) -> i32 {
        let own = player.to_cell();
        let other = player.opponent().to_cell();
        let mut total = 0;
        let mut completed = false;

        for line in self.lines {
            let (mut mine, mut theirs) = (0, 0);
            for &pos in line {
                match board.get(pos) {
                    c if c == own => mine += 1,
                    c if c == other => theirs += 1,
                    _ => {}
                }
            }
            if theirs > 0 {
                continue;
            }
            total += mine;
            if mine == line.len() as i32 {
                total += self.config.completed_line_bonus;
                completed = true;
            }
        }

        if completed && self.config.tempo {
            total += board.empty_count() as i32;
        }
        total
    }

    /// Score of `board` from `perspective`: its total minus the opponent's
    pub fn score(&self, board: &Board, perspective: Player) -> i32 {
        self.total(board, perspective) - self.total(board, perspective.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::WINNING_LINES;

    fn scorer(config: ScoringConfig) -> LeafScorer<'static> {
        LeafScorer::new(&WINNING_LINES, config)
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let s = scorer(ScoringConfig::default());
        assert_eq!(s.score(&Board::new(), Player::X), 0);
        assert_eq!(s.score(&Board::new(), Player::O), 0);
    }

    #[test]
    fn test_single_token_counts_uncontested_lines() {
        let s = scorer(ScoringConfig::default());
        let corner = Board::from_string("X........").unwrap();
        let center = Board::from_string("....X....").unwrap();

        assert_eq!(s.total(&corner, Player::X), 3);
        assert_eq!(s.total(&center, Player::X), 4);
        assert_eq!(s.score(&center, Player::O), -4);
    }

    #[test]
    fn test_contested_lines_are_ignored() {
        // XX.
        // OO.
        // ..X
        let s = scorer(ScoringConfig::default());
        let board = Board::from_string("XX.OO...X").unwrap();
        assert_eq!(s.total(&board, Player::X), 4);
        assert_eq!(s.total(&board, Player::O), 3);
        assert_eq!(s.score(&board, Player::X), 1);
    }

    #[test]
    fn test_completed_line_bonus_and_tempo() {
        // XXX
        // OO.
        // ...
        let board = Board::from_string("XXXOO....").unwrap();

        let full = scorer(ScoringConfig::default());
        assert_eq!(full.total(&board, Player::X), 10);
        assert_eq!(full.total(&board, Player::O), 2);

        let no_tempo = scorer(ScoringConfig {
            tempo: false,
            ..ScoringConfig::default()
        });
        assert_eq!(no_tempo.total(&board, Player::X), 6);

        let no_bonus = scorer(ScoringConfig {
            completed_line_bonus: 0,
            ..ScoringConfig::default()
        });
        assert_eq!(no_bonus.total(&board, Player::X), 8);
    }

    #[test]
    fn test_drawn_board_scores_zero() {
        let s = scorer(ScoringConfig::default());
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(s.total(&board, Player::X), 0);
        assert_eq!(s.total(&board, Player::O), 0);
    }

    #[test]
    fn test_win_sign_needs_bonus_or_tempo() {
        // XO.
        // .OX
        // XO.
        let board = Board::from_string("XO..OXXO.").unwrap();

        let default = scorer(ScoringConfig::default());
        assert!(default.score(&board, Player::O) > 0);

        let bonus_only = scorer(ScoringConfig {
            tempo: false,
            ..ScoringConfig::default()
        });
        assert!(bonus_only.score(&board, Player::O) > 0);

        let bare = scorer(ScoringConfig {
            completed_line_bonus: 0,
            tempo: false,
        });
        assert_eq!(bare.score(&board, Player::O), 0);
    }

    #[test]
    fn test_earlier_win_outscores_later_win() {
        let s = scorer(ScoringConfig::default());
        let early = Board::from_string("XXX......").unwrap();
        let late = Board::from_string("XXXOO.X.O").unwrap();
        assert!(s.score(&early, Player::X) > s.score(&late, Player::X));
        assert!(s.score(&late, Player::X) > 0);
    }
}
