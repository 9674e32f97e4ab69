pub mod arena;
pub mod baseline;
pub mod error;
pub mod evaluation;
pub mod minimax;
pub mod move_gen;
pub mod random;
pub mod search;

use gomoku_core::{Game, Location, Player};

/// Core trait for game-playing agents
pub trait Agent {
    /// Pick the move to play for the current game, or None if there is no
    /// empty cell. Must not change the game.
    fn next_move(&mut self, game: &Game) -> error::Result<Option<Location>>;

    /// The player this agent moves for
    fn player(&self) -> Player;

    /// Get the agent's name
    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn next_move(&mut self, game: &Game) -> error::Result<Option<Location>> {
        (**self).next_move(game)
    }

    fn player(&self) -> Player {
        (**self).player()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub use arena::{play_game, play_match, GameRecord, MatchSummary};
pub use baseline::FirstEmptyAgent;
pub use error::AgentError;
pub use evaluation::*;
pub use minimax::MinimaxAgent;
pub use move_gen::*;
pub use random::RandomAgent;
pub use search::{Minimax, SearchResult};
