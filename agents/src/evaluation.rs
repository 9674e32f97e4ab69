use gomoku_core::{Board, Outcome, Player};

/// Scores a board for one fixed player.
///
/// Scores are always from `me`'s point of view, whoever is to move:
/// `f64::INFINITY` exactly when `me` has won, `f64::NEG_INFINITY` exactly when
/// `me` has lost, and a finite value otherwise (0 for a draw).
pub trait Evaluator {
    fn estimate(&self, board: &Board, me: Player) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> f64,
{
    fn estimate(&self, board: &Board, me: Player) -> f64 {
        self(board, me)
    }
}

/// Score of a finished board, or None while it is still in play.
pub fn terminal_score(board: &Board, me: Player) -> Option<f64> {
    board.state().outcome_for(me).map(|outcome| match outcome {
        Outcome::Win => f64::INFINITY,
        Outcome::Loss => f64::NEG_INFINITY,
        Outcome::Draw => 0.0,
    })
}

/// Only knows about finished games; every open position is worth 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalEvaluator;

impl Evaluator for TerminalEvaluator {
    fn estimate(&self, board: &Board, me: Player) -> f64 {
        terminal_score(board, me).unwrap_or(0.0)
    }
}

/// Counts open lines.
///
/// Every window of `win_length` cells that holds stones of only one player is
/// worth `base^k` to that player, where `k` is the number of stones in it.
/// Windows holding both colours are dead and score nothing.
#[derive(Clone, Copy, Debug)]
pub struct LineEvaluator {
    base: f64,
}

impl LineEvaluator {
    pub const DEFAULT_BASE: f64 = 10.0;

    pub fn new(base: f64) -> Self {
        Self { base }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    fn weight(&self, stones: usize) -> f64 {
        // Saturate before overflowing into the win sentinel.
        self.base.powi(stones as i32).min(f64::MAX)
    }
}

impl Default for LineEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}

impl Evaluator for LineEvaluator {
    fn estimate(&self, board: &Board, me: Player) -> f64 {
        if let Some(score) = terminal_score(board, me) {
            return score;
        }

        let opponent = me.opponent();
        let mut score = 0.0;
        for window in board.windows() {
            let mine = window.count(me);
            let theirs = window.count(opponent);
            match (mine, theirs) {
                (0, 0) => {}
                (k, 0) => score += self.weight(k),
                (0, k) => score -= self.weight(k),
                _ => {}
            }
        }

        score.clamp(f64::MIN, f64::MAX)
    }
}
