use crate::{
    error::{AgentError, Result},
    Agent,
};
use gomoku_core::{Board, Game, GameState, Location, Player};
use tracing::{debug, info, instrument};

/// How a single game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<(Player, Location)>,
    pub result: GameState,
    pub board: Board,
}

/// Tally over a series of games with fixed seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Games stopped because an agent had no move on an open board.
    pub unfinished: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws + self.unfinished
    }

    fn record(&mut self, result: GameState) {
        match result {
            GameState::Won(Player::X) => self.x_wins += 1,
            GameState::Won(Player::O) => self.o_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::NotOver => self.unfinished += 1,
        }
    }
}

fn check_seat(agent: &dyn Agent, seat: Player) -> Result<()> {
    if agent.player() != seat {
        return Err(AgentError::WrongTurn {
            agent: agent.name().to_string(),
            plays: agent.player(),
            to_move: seat,
        });
    }
    Ok(())
}

/// Plays `game` to the end, asking `x` and `o` for moves in turn.
///
/// Stops early if the agent on turn has no move. A move the authoritative
/// board rejects is returned as an error.
#[instrument(level = "debug", skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_game(mut game: Game, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord> {
    check_seat(x, Player::X)?;
    check_seat(o, Player::O)?;

    while !game.is_over() {
        let to_move = game.to_move();
        let agent: &mut dyn Agent = match to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let Some(mv) = agent.next_move(&game)? else {
            debug!(player = %to_move, "no move available");
            break;
        };
        debug!(player = %to_move, %mv, "move");
        game.play(mv)?;
    }

    info!(result = %game.state(), moves = game.history().len(), "game finished");

    Ok(GameRecord {
        moves: game.history().to_vec(),
        result: game.state(),
        board: game.board().clone(),
    })
}

/// Plays `games` games from `board` with the same seats every time.
pub fn play_match(
    board: &Board,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    games: usize,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::default();
    for _ in 0..games {
        let record = play_game(Game::new(board.clone()), x, o)?;
        summary.record(record.result);
    }

    info!(
        x = x.name(),
        o = o.name(),
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "match finished"
    );
    Ok(summary)
}
