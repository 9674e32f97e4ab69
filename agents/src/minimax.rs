use crate::{
    error::{AgentError, Result},
    evaluation::{Evaluator, LineEvaluator},
    move_gen::{MoveGenerator, Neighborhood},
    search::Minimax,
    Agent,
};
use gomoku_core::{Game, Location, Player};
use tracing::{debug, instrument};

/// Plays the move minimax finds best at a fixed depth.
pub struct MinimaxAgent<G, E> {
    name: String,
    me: Player,
    depth: u8,
    search: Minimax<G, E>,
}

impl<G: MoveGenerator, E: Evaluator> MinimaxAgent<G, E> {
    /// Fails if `depth` is 0: such an agent could never pick a move.
    pub fn new(me: Player, depth: u8, generator: G, evaluator: E) -> Result<Self> {
        if depth == 0 {
            return Err(AgentError::InvalidDepth);
        }

        Ok(MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            me,
            depth,
            search: Minimax::new(generator, evaluator),
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn search(&self) -> &Minimax<G, E> {
        &self.search
    }
}

impl MinimaxAgent<Neighborhood, LineEvaluator> {
    /// Neighbourhood-restricted search with the line-counting evaluator.
    pub fn with_defaults(me: Player, depth: u8) -> Result<Self> {
        Self::new(me, depth, Neighborhood::default(), LineEvaluator::default())
    }
}

impl<G: MoveGenerator, E: Evaluator> Agent for MinimaxAgent<G, E> {
    #[instrument(level = "debug", skip_all, fields(agent = %self.name, player = %self.me))]
    fn next_move(&mut self, game: &Game) -> Result<Option<Location>> {
        let board = game.board();
        if board.is_full() {
            return Ok(None);
        }

        let result = self.search.search(board, self.me, self.depth, self.me)?;
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "search finished"
        );

        Ok(result.best_move)
    }

    fn player(&self) -> Player {
        self.me
    }

    fn name(&self) -> &str {
        &self.name
    }
}
