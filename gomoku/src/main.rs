mod display;
mod interactive;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use display::{display_board, label};
use gomoku_agents::{
    play_match, Agent, AllEmpty, FirstEmptyAgent, LineEvaluator, Minimax, MinimaxAgent,
    MoveGenerator, Neighborhood, RandomAgent,
};
use gomoku_core::{Board, Player};
use interactive::InteractiveGame;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "gomoku.log";
const DEFAULT_WIN_LENGTH: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Minimax player for five-in-a-row")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Side the engine plays
        #[arg(long, value_enum, default_value_t = Side::O)]
        engine: Side,

        /// Search depth in plies
        #[arg(short, long, default_value_t = 2)]
        depth: u8,

        /// Candidate radius around existing stones, 0 for every empty cell
        #[arg(short, long, default_value_t = 1)]
        radius: usize,
    },

    /// Pit two agents against each other
    Match {
        #[command(flatten)]
        board: BoardArgs,

        /// Agent for X: minimax[:depth], first-empty or random
        #[arg(long, default_value = "minimax:2")]
        x: AgentKind,

        /// Agent for O: minimax[:depth], first-empty or random
        #[arg(long, default_value = "first-empty")]
        o: AgentKind,

        /// Number of games
        #[arg(short = 'n', long, default_value_t = 1)]
        games: usize,

        /// Candidate radius for minimax agents, 0 for every empty cell
        #[arg(short, long, default_value_t = 1)]
        radius: usize,

        /// Seed for random agents
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Search a position and print the best move
    Analyze {
        /// Rows separated by '/', e.g. "XX./OO./..."
        diagram: String,

        /// Stones in a row needed to win [default: 5, capped at the board size]
        #[arg(short, long)]
        win_length: Option<usize>,

        /// Player on turn; inferred from stone counts if omitted
        #[arg(long, value_enum)]
        to_move: Option<Side>,

        /// Search depth in plies
        #[arg(short, long, default_value_t = 2)]
        depth: u8,

        /// Candidate radius around existing stones, 0 for every empty cell
        #[arg(short, long, default_value_t = 1)]
        radius: usize,
    },
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// Board side length
    #[arg(short, long, default_value_t = 9)]
    size: usize,

    /// Stones in a row needed to win
    #[arg(short, long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
}

impl BoardArgs {
    fn board(&self) -> Result<Board> {
        Board::new(self.size, self.win_length).context("invalid board dimensions")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AgentKind {
    Minimax { depth: u8 },
    FirstEmpty,
    Random,
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s, None),
        };

        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("minimax", None) => Ok(AgentKind::Minimax { depth: 2 }),
            ("minimax", Some(depth)) => depth
                .parse()
                .map(|depth| AgentKind::Minimax { depth })
                .map_err(|_| format!("invalid minimax depth: {}", depth)),
            ("first-empty", None) => Ok(AgentKind::FirstEmpty),
            ("random", None) => Ok(AgentKind::Random),
            _ => Err(format!(
                "unknown agent '{}', expected minimax[:depth], first-empty or random",
                s
            )),
        }
    }
}

/// Radius 0 means no neighbourhood restriction.
fn generator(radius: usize) -> Result<Box<dyn MoveGenerator>> {
    if radius == 0 {
        Ok(Box::new(AllEmpty))
    } else {
        Ok(Box::new(Neighborhood::new(radius)?))
    }
}

fn build_agent(
    kind: AgentKind,
    me: Player,
    radius: usize,
    seed: Option<u64>,
) -> Result<Box<dyn Agent>> {
    Ok(match kind {
        AgentKind::Minimax { depth } => Box::new(MinimaxAgent::new(
            me,
            depth,
            generator(radius)?,
            LineEvaluator::default(),
        )?),
        AgentKind::FirstEmpty => Box::new(FirstEmptyAgent::new(me)),
        AgentKind::Random => match seed {
            // Different streams for the two seats.
            Some(seed) => Box::new(RandomAgent::with_seed(me, seed ^ me as u64)),
            None => Box::new(RandomAgent::new(me)),
        },
    })
}

/// Parses an analysis diagram. Without an explicit win length, small
/// diagrams play to their own side length.
fn parse_diagram(diagram: &str, win_length: Option<usize>) -> Result<Board> {
    let win_length = win_length.unwrap_or_else(|| {
        let rows = diagram
            .split(['/', '\n'])
            .filter(|row| row.chars().any(|c| !c.is_whitespace()))
            .count();
        DEFAULT_WIN_LENGTH.min(rows)
    });
    Board::from_diagram(diagram, win_length).context("failed to parse diagram")
}

/// X moves first, so equal stone counts mean X is on turn.
fn infer_to_move(board: &Board) -> Player {
    let x = board
        .locations()
        .filter(|&loc| board.get(loc) == Some(Player::X))
        .count();
    let o = board.stone_count() - x;
    if x > o {
        Player::O
    } else {
        Player::X
    }
}

fn init_tracing(level: &str, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if to_file {
        // Keep log output off the raw-mode screen.
        let log_file = std::fs::File::create(LOG_FILE)
            .with_context(|| format!("failed to create {}", LOG_FILE))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn run_play(board: Board, engine: Player, depth: u8, radius: usize) -> Result<()> {
    let engine = MinimaxAgent::new(engine, depth, generator(radius)?, LineEvaluator::default())?;
    info!(size = board.size(), win_length = board.win_length(), "starting interactive game");
    InteractiveGame::new(board, engine).run()
}

fn run_match(
    board: Board,
    x: AgentKind,
    o: AgentKind,
    games: usize,
    radius: usize,
    seed: Option<u64>,
) -> Result<()> {
    if games == 0 {
        bail!("at least one game is required");
    }

    let mut x = build_agent(x, Player::X, radius, seed)?;
    let mut o = build_agent(o, Player::O, radius, seed)?;
    let summary = play_match(&board, &mut *x, &mut *o, games)?;

    println!("{} (X) vs {} (O), {} games", x.name(), o.name(), summary.games());
    println!("X wins:     {}", summary.x_wins);
    println!("O wins:     {}", summary.o_wins);
    println!("Draws:      {}", summary.draws);
    if summary.unfinished > 0 {
        println!("Unfinished: {}", summary.unfinished);
    }
    Ok(())
}

fn run_analyze(
    diagram: &str,
    win_length: Option<usize>,
    to_move: Option<Side>,
    depth: u8,
    radius: usize,
) -> Result<()> {
    let board = parse_diagram(diagram, win_length)?;
    let to_move = to_move.map_or_else(|| infer_to_move(&board), Player::from);

    display_board(&board, None);
    if board.is_over() {
        return Ok(());
    }

    let search = Minimax::new(generator(radius)?, LineEvaluator::default());
    let result = search.search(&board, to_move, depth, to_move)?;

    println!("{} to move, depth {}", to_move, depth);
    match result.best_move {
        Some(mv) => println!("Best move: {} {}", label(mv), mv),
        None => println!("Best move: none"),
    }
    println!("Score: {}", result.score);
    println!("Nodes: {}", result.nodes);

    let divide = search.divide(&board, to_move, depth, to_move)?;
    if !divide.is_empty() {
        println!();
        for (mv, score) in divide {
            println!("  {:<4} {}", label(mv), score);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, matches!(cli.command, Commands::Play { .. }))?;

    match cli.command {
        Commands::Play {
            board,
            engine,
            depth,
            radius,
        } => run_play(board.board()?, engine.into(), depth, radius),
        Commands::Match {
            board,
            x,
            o,
            games,
            radius,
            seed,
        } => run_match(board.board()?, x, o, games, radius, seed),
        Commands::Analyze {
            diagram,
            win_length,
            to_move,
            depth,
            radius,
        } => run_analyze(&diagram, win_length, to_move, depth, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_kind_parsing() {
        assert_eq!("minimax".parse::<AgentKind>(), Ok(AgentKind::Minimax { depth: 2 }));
        assert_eq!("minimax:4".parse::<AgentKind>(), Ok(AgentKind::Minimax { depth: 4 }));
        assert_eq!("first-empty".parse::<AgentKind>(), Ok(AgentKind::FirstEmpty));
        assert_eq!("Random".parse::<AgentKind>(), Ok(AgentKind::Random));

        assert!("minimax:x".parse::<AgentKind>().is_err());
        assert!("random:3".parse::<AgentKind>().is_err());
        assert!("alphabeta".parse::<AgentKind>().is_err());
    }

    #[test]
    fn test_infer_to_move() {
        assert_eq!(infer_to_move(&Board::tic_tac_toe()), Player::X);
        let board = Board::from_diagram("X../.../...", 3).unwrap();
        assert_eq!(infer_to_move(&board), Player::O);
        let board = Board::from_diagram("X../.O./...", 3).unwrap();
        assert_eq!(infer_to_move(&board), Player::X);
    }

    #[test]
    fn test_small_diagram_defaults_to_its_size() {
        let board = parse_diagram("XX./OO./...", None).unwrap();
        assert_eq!(board.win_length(), 3);

        let gomoku = parse_diagram(&Board::gomoku().to_diagram(), None).unwrap();
        assert_eq!(gomoku.win_length(), 5);

        let board = parse_diagram("XX./.../...", Some(2)).unwrap();
        assert_eq!(board.state(), gomoku_core::GameState::Won(Player::X));
        assert!(parse_diagram("XX./OO./...", Some(5)).is_err());
    }

    #[test]
    fn test_build_agent_seats() {
        let agent = build_agent(AgentKind::Minimax { depth: 3 }, Player::O, 1, None).unwrap();
        assert_eq!(agent.player(), Player::O);
        assert_eq!(agent.name(), "Minimax(depth=3)");

        assert!(build_agent(AgentKind::Minimax { depth: 0 }, Player::X, 1, None).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["gomoku", "match", "--x", "random", "-n", "3"]).unwrap();
        match cli.command {
            Commands::Match { x, o, games, .. } => {
                assert_eq!(x, AgentKind::Random);
                assert_eq!(o, AgentKind::FirstEmpty);
                assert_eq!(games, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
