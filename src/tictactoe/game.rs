//! Live game: the board the agent commits to, plus win/draw bookkeeping

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Board, Player, Position, lines::winner};
use crate::ports::{BoardPort, MoveObserver};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a board, if it is finished
    pub fn of(board: &Board) -> Option<GameOutcome> {
        if let Some(player) = winner(board) {
            Some(GameOutcome::Win(player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// The live game the surrounding loop drives.
///
/// Every accepted commit is reported to the registered observers, followed by
/// `on_game_end` once the board is won or full. Further commits are refused.
/// An observer that fails is logged and skipped; the commit still stands and
/// the remaining observers are still notified.
pub struct Game {
    board: Board,
    first: Player,
    to_move: Player,
    outcome: Option<GameOutcome>,
    history: Vec<(Position, Player)>,
    observers: Vec<Box<dyn MoveObserver>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board.encode())
            .field("first", &self.first)
            .field("to_move", &self.to_move)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Create a new empty game with `first` to move
    pub fn new(first: Player) -> Self {
        Game {
            board: Board::new(),
            first,
            to_move: first,
            outcome: None,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Create a new game whose first player is drawn at random
    pub fn new_random_first<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            Player::O
        } else {
            Player::X
        };
        Self::new(first)
    }

    /// Resume from an existing position. The player to move is the opponent of
    /// whoever holds more tokens, `first` when the counts are equal.
    pub fn from_board(board: Board, first: Player) -> Self {
        let to_move = match board.count(first).cmp(&board.count(first.opponent())) {
            std::cmp::Ordering::Greater => first.opponent(),
            _ => first,
        };
        Game {
            board,
            first,
            to_move,
            outcome: GameOutcome::of(&board),
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for commits and the end of the game
    pub fn add_observer(&mut self, observer: Box<dyn MoveObserver>) {
        self.observers.push(observer);
    }

    /// Clear the board for a new game; observers stay registered
    pub fn reset(&mut self, first: Player) {
        self.board = Board::new();
        self.first = first;
        self.to_move = first;
        self.outcome = None;
        self.history.clear();
    }

    pub fn first(&self) -> Player {
        self.first
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Moves committed since the game was created or reset
    pub fn history(&self) -> &[(Position, Player)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The only remaining cell, when exactly one is left and the game is open
    pub fn forced_move(&self) -> Option<Position> {
        if self.is_over() {
            return None;
        }
        match self.board.empty_positions().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl BoardPort for Game {
    fn snapshot(&self) -> Board {
        self.board
    }

    fn set(&mut self, pos: Position, token: Player) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(pos, token)?;
        self.history.push((pos, token));
        self.to_move = token.opponent();
        self.outcome = GameOutcome::of(&self.board);

        for (index, observer) in self.observers.iter_mut().enumerate() {
            if let Err(error) = observer.on_move(&self.board, pos, token) {
                warn!(observer = index, %pos, %token, %error, "observer failed on move");
            }
        }
        if let Some(outcome) = self.outcome {
            for (index, observer) in self.observers.iter_mut().enumerate() {
                if let Err(error) = observer.on_game_end(outcome) {
                    warn!(observer = index, ?outcome, %error, "observer failed on game end");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[derive(Default)]
    struct Recorded {
        moves: Vec<(Position, Player)>,
        outcomes: Vec<GameOutcome>,
    }

    struct Recorder(Rc<RefCell<Recorded>>);

    impl MoveObserver for Recorder {
        fn on_move(&mut self, _board: &Board, pos: Position, token: Player) -> crate::Result<()> {
            self.0.borrow_mut().moves.push((pos, token));
            Ok(())
        }

        fn on_game_end(&mut self, outcome: GameOutcome) -> crate::Result<()> {
            self.0.borrow_mut().outcomes.push(outcome);
            Ok(())
        }
    }

    struct Failing;

    impl MoveObserver for Failing {
        fn on_move(&mut self, _board: &Board, _pos: Position, _token: Player) -> crate::Result<()> {
            Err(crate::Error::InvalidConfiguration {
                message: "observer unavailable".to_string(),
            })
        }

        fn on_game_end(&mut self, _outcome: GameOutcome) -> crate::Result<()> {
            Err(crate::Error::InvalidConfiguration {
                message: "observer unavailable".to_string(),
            })
        }
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_commit_notifies_and_switches_turn() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut game = Game::new(Player::X);
        game.add_observer(Box::new(Recorder(log.clone())));

        game.set(pos(1, 1), Player::X).unwrap();

        assert_eq!(game.to_move(), Player::O);
        assert_eq!(log.borrow().moves, vec![(pos(1, 1), Player::X)]);
        assert_eq!(game.history(), log.borrow().moves.as_slice());
        assert!(log.borrow().outcomes.is_empty());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_notification() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut game = Game::new(Player::X);
        game.add_observer(Box::new(Recorder(log.clone())));

        game.set(pos(0, 0), Player::X).unwrap();
        let err = game.set(pos(0, 0), Player::O).unwrap_err();

        assert!(matches!(err, crate::Error::CellOccupied { row: 0, col: 0 }));
        assert_eq!(log.borrow().moves.len(), 1);
        assert_eq!(game.snapshot().get(pos(0, 0)), crate::tictactoe::Cell::X);
    }

    #[test]
    fn test_win_ends_game() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut game = Game::new(Player::X);
        game.add_observer(Box::new(Recorder(log.clone())));

        for (p, token) in [
            (pos(0, 0), Player::X),
            (pos(1, 0), Player::O),
            (pos(0, 1), Player::X),
            (pos(1, 1), Player::O),
            (pos(0, 2), Player::X),
        ] {
            game.set(p, token).unwrap();
        }

        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(log.borrow().outcomes, vec![GameOutcome::Win(Player::X)]);
        assert!(matches!(
            game.set(pos(2, 2), Player::O),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_draw_detected_on_full_board() {
        let board = Board::from_string("XOXXOOOX.").unwrap();
        let mut game = Game::from_board(board, Player::X);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.forced_move(), Some(pos(2, 2)));

        game.set(pos(2, 2), Player::X).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.forced_move(), None);
    }

    #[test]
    fn test_failing_observer_does_not_undo_commit() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let board = Board::from_string("XX.|OO.|...").unwrap();
        let mut game = Game::from_board(board, Player::X);
        game.add_observer(Box::new(Failing));
        game.add_observer(Box::new(Recorder(log.clone())));

        game.set(pos(0, 2), Player::X).unwrap();

        assert_eq!(game.snapshot().get(pos(0, 2)), crate::tictactoe::Cell::X);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(log.borrow().moves, vec![(pos(0, 2), Player::X)]);
        assert_eq!(log.borrow().outcomes, vec![GameOutcome::Win(Player::X)]);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut game = Game::new(Player::O);
        game.set(pos(2, 2), Player::O).unwrap();
        game.reset(Player::X);

        assert_eq!(game.snapshot(), Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
        assert!(!game.is_over());
    }

    #[test]
    fn test_random_first_player_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        let firsts: std::collections::HashSet<Player> = (0..32)
            .map(|_| Game::new_random_first(&mut rng).first())
            .collect();
        assert_eq!(firsts.len(), 2);
    }
}
