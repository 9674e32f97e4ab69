use gomoku_agents::{
    terminal_score, Agent, AllEmpty, Evaluator, FirstEmptyAgent, Minimax, MinimaxAgent,
};
use gomoku_core::{Board, Game, Location, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Hand-picked cell values. X gains them, O loses them; finished boards
/// score as usual.
const CELL_VALUES: [[f64; 3]; 3] = [[3.0, -1.0, 2.0], [0.5, 4.0, -2.0], [1.0, 7.0, -3.0]];

fn table_score(board: &Board, me: Player) -> f64 {
    if let Some(score) = terminal_score(board, me) {
        return score;
    }

    let mut x_score = 0.0;
    for loc in board.locations() {
        match board.get(loc) {
            Some(Player::X) => x_score += CELL_VALUES[loc.row][loc.col],
            Some(Player::O) => x_score -= CELL_VALUES[loc.row][loc.col],
            None => {}
        }
    }
    if me == Player::X {
        x_score
    } else {
        -x_score
    }
}

struct Node {
    board: Board,
    to_move: Player,
    depth: u8,
    children: Vec<(Location, usize)>,
}

/// Expands the whole game tree breadth-first into a flat node list, then
/// backs scores up from the leaves in reverse order.
fn enumerate(board: &Board, to_move: Player, depth: u8, me: Player) -> (Option<Location>, f64) {
    let mut nodes = vec![Node {
        board: board.clone(),
        to_move,
        depth,
        children: Vec::new(),
    }];

    let mut next = 0;
    while next < nodes.len() {
        if nodes[next].depth > 0 && !nodes[next].board.is_over() {
            let moves: Vec<Location> = nodes[next].board.empty_locations().collect();
            for mv in moves {
                let child = Node {
                    board: nodes[next].board.update(nodes[next].to_move, mv).unwrap(),
                    to_move: nodes[next].to_move.opponent(),
                    depth: nodes[next].depth - 1,
                    children: Vec::new(),
                };
                nodes.push(child);
                let index = nodes.len() - 1;
                nodes[next].children.push((mv, index));
            }
        }
        next += 1;
    }

    let mut values: Vec<(Option<Location>, f64)> = vec![(None, 0.0); nodes.len()];
    for index in (0..nodes.len()).rev() {
        let node = &nodes[index];
        if node.children.is_empty() {
            values[index] = (None, table_score(&node.board, me));
            continue;
        }

        let maximizing = node.to_move == me;
        let mut best: Option<(Location, f64)> = None;
        for &(mv, child) in &node.children {
            let score = values[child].1;
            let replace = match best {
                None => true,
                Some((_, incumbent)) if maximizing => score > incumbent,
                Some((_, incumbent)) => score < incumbent,
            };
            if replace {
                best = Some((mv, score));
            }
        }
        values[index] = best.map_or((None, 0.0), |(mv, score)| (Some(mv), score));
    }

    values[0]
}

fn random_position(rng: &mut StdRng, stones: usize) -> (Board, Player) {
    loop {
        let mut board = Board::tic_tac_toe();
        let mut to_move = Player::X;
        for _ in 0..stones {
            let empty: Vec<Location> = board.empty_locations().collect();
            let mv = *empty.choose(rng).unwrap();
            board = board.update(to_move, mv).unwrap();
            to_move = to_move.opponent();
        }
        if !board.is_over() {
            return (board, to_move);
        }
    }
}

#[test]
fn recursive_search_matches_enumeration() {
    let search = Minimax::new(AllEmpty, table_score);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for stones in 0..=6 {
        for _ in 0..4 {
            let (board, to_move) = random_position(&mut rng, stones);
            for depth in 1..=4 {
                for me in [to_move, to_move.opponent()] {
                    let result = search.search(&board, to_move, depth, me).unwrap();
                    let (expected_move, expected_score) = enumerate(&board, to_move, depth, me);

                    assert_eq!(
                        result.best_move, expected_move,
                        "board {} to_move {} depth {} me {}",
                        board.to_diagram(), to_move, depth, me
                    );
                    assert_eq!(
                        result.score, expected_score,
                        "board {} to_move {} depth {} me {}",
                        board.to_diagram(), to_move, depth, me
                    );
                }
            }
        }
    }
}

#[test]
fn full_depth_from_empty_board_is_a_draw() {
    let search = Minimax::new(AllEmpty, table_score);
    let result = search.search(&Board::tic_tac_toe(), Player::X, 9, Player::X).unwrap();

    // Every leaf is terminal at this depth and perfect play draws.
    assert_eq!(result.score, 0.0);
    assert!(result.best_move.is_some());
}

#[test]
fn minimax_moves_are_always_legal() {
    let mut rng = StdRng::seed_from_u64(11);
    for stones in 0..8 {
        let (board, to_move) = random_position(&mut rng, stones);
        let game = Game::with_first_player(board.clone(), to_move);

        let mut agent = MinimaxAgent::new(to_move, 3, AllEmpty, table_score).unwrap();
        let mv = agent.next_move(&game).unwrap().unwrap();
        assert!(board.get(mv).is_none(), "{} occupied on {}", mv, board.to_diagram());

        let mut baseline = FirstEmptyAgent::new(to_move);
        let first = baseline.next_move(&game).unwrap().unwrap();
        assert_eq!(Some(first), board.empty_locations().next());
    }
}

#[test]
fn evaluator_is_fixed_to_the_searching_player() {
    let board = Board::from_diagram("X../.O./...", 3).unwrap();
    assert_eq!(table_score.estimate(&board, Player::X), 3.0 - 4.0);
    assert_eq!(table_score.estimate(&board, Player::O), 4.0 - 3.0);
}
