use crate::{error::Result, Agent};
use gomoku_core::{Game, Location, Player};

/// Plays the first empty cell in row-major order. Does no search at all;
/// useful as a fixed, predictable opponent.
pub struct FirstEmptyAgent {
    name: String,
    me: Player,
}

impl FirstEmptyAgent {
    pub fn new(me: Player) -> Self {
        FirstEmptyAgent {
            name: "FirstEmpty".to_string(),
            me,
        }
    }
}

impl Agent for FirstEmptyAgent {
    fn next_move(&mut self, game: &Game) -> Result<Option<Location>> {
        Ok(game.board().empty_locations().next())
    }

    fn player(&self) -> Player {
        self.me
    }

    fn name(&self) -> &str {
        &self.name
    }
}
