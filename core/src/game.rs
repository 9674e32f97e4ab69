use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::types::*;

/// A game in progress: the current board, whose turn it is, and every move
/// played so far.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    /// Board before each move in `history`, for undo.
    previous: Vec<Board>,
    to_move: Player,
    history: Vec<(Player, Location)>,
}

impl Game {
    /// Starts a game on the given board with X to move.
    pub fn new(board: Board) -> Self {
        Self::with_first_player(board, Player::X)
    }

    /// Starts a game on the given board with `first` to move.
    pub fn with_first_player(board: Board, first: Player) -> Self {
        Self {
            board,
            previous: Vec::new(),
            to_move: first,
            history: Vec::new(),
        }
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Player, Location)] {
        &self.history
    }

    /// Classification of the current board.
    pub fn state(&self) -> GameState {
        self.board.state()
    }

    /// Returns true once the game has finished.
    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Places a stone for the player to move and passes the turn.
    pub fn play(&mut self, location: Location) -> Result<()> {
        if self.board.is_over() {
            return Err(BoardError::GameOver {
                state: self.board.state(),
            });
        }

        let next = self.board.update(self.to_move, location)?;
        self.previous.push(std::mem::replace(&mut self.board, next));
        self.history.push((self.to_move, location));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Takes back the most recent move, restoring the board it was played
    /// on. Returns the undone move, if any.
    pub fn undo(&mut self) -> Option<(Player, Location)> {
        let board = self.previous.pop()?;
        let last = self.history.pop()?;

        self.board = board;
        self.to_move = last.0;
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_turns() {
        let mut game = Game::new(Board::tic_tac_toe());
        assert_eq!(game.to_move(), Player::X);

        game.play(Location::new(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Location::new(0, 0)), Some(Player::X));

        game.play(Location::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(
            game.history(),
            &[
                (Player::X, Location::new(0, 0)),
                (Player::O, Location::new(1, 1))
            ]
        );
    }

    #[test]
    fn test_illegal_move_leaves_game_untouched() {
        let mut game = Game::new(Board::tic_tac_toe());
        game.play(Location::new(0, 0)).unwrap();
        let before = game.clone();

        assert!(game.play(Location::new(0, 0)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new(Board::tic_tac_toe());
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Location::new(r, c)).unwrap();
        }
        assert_eq!(game.state(), GameState::Won(Player::X));

        let err = game.play(Location::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            BoardError::GameOver {
                state: GameState::Won(Player::X)
            }
        );
    }

    #[test]
    fn test_undo() {
        let mut game = Game::new(Board::tic_tac_toe());
        assert_eq!(game.undo(), None);

        game.play(Location::new(0, 0)).unwrap();
        game.play(Location::new(2, 2)).unwrap();
        assert_eq!(game.undo(), Some((Player::O, Location::new(2, 2))));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Location::new(2, 2)), None);
        assert_eq!(game.board().stone_count(), 1);
    }

    #[test]
    fn test_undo_restores_finished_game() {
        let mut game = Game::with_first_player(Board::tic_tac_toe(), Player::O);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(Location::new(r, c)).unwrap();
        }
        let before_win = game.clone();

        game.play(Location::new(0, 2)).unwrap();
        assert_eq!(game.state(), GameState::Won(Player::O));

        assert_eq!(game.undo(), Some((Player::O, Location::new(0, 2))));
        assert_eq!(game, before_win);

        while game.undo().is_some() {}
        assert_eq!(game, Game::with_first_player(Board::tic_tac_toe(), Player::O));
    }
}
