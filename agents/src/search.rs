use crate::evaluation::Evaluator;
use crate::move_gen::MoveGenerator;
use gomoku_core::{Board, BoardError, Location, Player};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Location>,
    /// Score from the searching player's side; ±infinity for forced wins and
    /// losses.
    pub score: f64,
    pub depth: u8,
    /// Boards visited, the root included.
    pub nodes: u64,
}

struct SearchInfo {
    root_depth: u8,
    nodes: u64,
}

/// Minimax search composed from a move generator and an evaluator.
///
/// The player being searched for maximizes and the opponent minimizes. Both
/// the generator and the evaluator are always asked about the searching
/// player, so scores never flip sign with depth. Every candidate is explored;
/// there is no pruning.
///
/// Ties go to the first candidate, in generator order, that reaches the best
/// score. The same strict comparison is used at every depth, the root included.
#[derive(Clone, Debug, Default)]
pub struct Minimax<G, E> {
    generator: G,
    evaluator: E,
}

impl<G: MoveGenerator, E: Evaluator> Minimax<G, E> {
    pub fn new(generator: G, evaluator: E) -> Self {
        Self {
            generator,
            evaluator,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `depth` plies ahead from `board` with `to_move` on turn,
    /// scoring everything for `me`.
    ///
    /// The root call of an agent is `search(board, me, depth, me)`. A depth of
    /// 0, a finished board, or a generator with nothing to offer all return
    /// the static estimate with no move. Board errors from a defective
    /// generator are passed through untouched.
    pub fn search(
        &self,
        board: &Board,
        to_move: Player,
        depth: u8,
        me: Player,
    ) -> Result<SearchResult, BoardError> {
        let mut info = SearchInfo {
            root_depth: depth,
            nodes: 0,
        };
        let (best_move, score) = self.minimax(board, to_move, depth, me, &mut info)?;

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: info.nodes,
        })
    }

    /// Scores every root candidate separately, in generator order.
    /// Each score is what [`search`](Self::search) would see for that move.
    pub fn divide(
        &self,
        board: &Board,
        to_move: Player,
        depth: u8,
        me: Player,
    ) -> Result<Vec<(Location, f64)>, BoardError> {
        if depth == 0 || board.is_over() {
            return Ok(Vec::new());
        }

        let mut info = SearchInfo {
            root_depth: depth,
            nodes: 0,
        };
        let mut results = Vec::new();
        for mv in self.generator.moves(board) {
            let child = board.update(to_move, mv)?;
            let (_, score) = self.minimax(&child, to_move.opponent(), depth - 1, me, &mut info)?;
            results.push((mv, score));
        }

        Ok(results)
    }

    /// Returns the static estimate of `board` for `me`.
    pub fn estimate(&self, board: &Board, me: Player) -> f64 {
        self.evaluator.estimate(board, me)
    }

    fn minimax(
        &self,
        board: &Board,
        to_move: Player,
        depth: u8,
        me: Player,
        info: &mut SearchInfo,
    ) -> Result<(Option<Location>, f64), BoardError> {
        info.nodes += 1;

        if depth == 0 || board.is_over() {
            return Ok((None, self.evaluator.estimate(board, me)));
        }

        let candidates = self.generator.moves(board);
        if candidates.is_empty() {
            return Ok((None, self.evaluator.estimate(board, me)));
        }

        let maximizing = to_move == me;
        let mut best_move = None;
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in candidates {
            let child = board.update(to_move, mv)?;
            let (_, score) = self.minimax(&child, to_move.opponent(), depth - 1, me, info)?;

            if depth == info.root_depth {
                trace!(%mv, score, "root candidate");
            }

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };

            // The first candidate is always taken so that a node with only
            // losing (or only winning) replies still names a move.
            if best_move.is_none() || better {
                best_move = Some(mv);
                best_score = score;
            }
        }

        Ok((best_move, best_score))
    }
}
