use crate::{error::Result, Agent};
use gomoku_core::{Game, Location, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

/// Plays a uniformly random empty cell.
pub struct RandomAgent {
    name: String,
    me: Player,
    /// Seeded generator; None draws from the thread RNG.
    rng: Option<StdRng>,
}

impl RandomAgent {
    pub fn new(me: Player) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            me,
            rng: None,
        }
    }

    /// Reproducible variant for matches and tests.
    pub fn with_seed(me: Player, seed: u64) -> Self {
        RandomAgent {
            rng: Some(StdRng::seed_from_u64(seed)),
            ..Self::new(me)
        }
    }
}

impl Agent for RandomAgent {
    fn next_move(&mut self, game: &Game) -> Result<Option<Location>> {
        let moves: Vec<Location> = game.board().empty_locations().collect();
        let choice = match &mut self.rng {
            Some(rng) => moves.choose(rng),
            None => moves.choose(&mut thread_rng()),
        };
        Ok(choice.copied())
    }

    fn player(&self) -> Player {
        self.me
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::Board;

    #[test]
    fn test_plays_empty_cells_only() {
        let board = Board::from_diagram("XOX/.O./OX.", 3).unwrap();
        let game = Game::new(board);
        let mut agent = RandomAgent::with_seed(Player::X, 7);

        for _ in 0..20 {
            let mv = agent.next_move(&game).unwrap().unwrap();
            assert!(game.board().get(mv).is_none(), "{} is occupied", mv);
        }
    }

    #[test]
    fn test_unseeded_agent_plays_empty_cells() {
        let board = Board::from_diagram("XOX/OXO/.X.", 3).unwrap();
        let game = Game::new(board);
        let mut agent = RandomAgent::new(Player::O);

        for _ in 0..20 {
            let mv = agent.next_move(&game).unwrap().unwrap();
            assert!(
                mv == Location::new(2, 0) || mv == Location::new(2, 2),
                "{} is occupied",
                mv
            );
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let game = Game::new(Board::gomoku());
        let mut a = RandomAgent::with_seed(Player::X, 42);
        let mut b = RandomAgent::with_seed(Player::X, 42);

        for _ in 0..5 {
            assert_eq!(a.next_move(&game).unwrap(), b.next_move(&game).unwrap());
        }
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_diagram("XOX/XOO/OXX", 3).unwrap();
        let mut agent = RandomAgent::new(Player::O);
        assert_eq!(agent.next_move(&Game::new(board)).unwrap(), None);
    }
}
