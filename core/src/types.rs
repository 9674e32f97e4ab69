use std::fmt;

/// One of the two players. `X` always moves first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Returns the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the stone character used in board diagrams.
    pub const fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Reads a stone character ('X'/'O', either case).
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cell on the grid.
/// Ordering is row-major, which is the scan order every board uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps by the given row/column delta.
    /// Returns None when the result would leave the non-negative quadrant.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Location { row, col })
    }

    /// Chebyshev (king-move) distance to another location.
    pub const fn distance(self, other: Location) -> usize {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        if row_diff > col_diff {
            row_diff
        } else {
            col_diff
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Absolute classification of a board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameState {
    NotOver,
    Won(Player),
    Draw,
}

/// How a finished game went for one particular player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl GameState {
    /// Returns true once the game is decided or drawn.
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::NotOver)
    }

    /// Returns the winner, if any.
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Reads the classification from `player`'s point of view.
    /// Returns None while the game is still going.
    pub fn outcome_for(self, player: Player) -> Option<Outcome> {
        match self {
            GameState::NotOver => None,
            GameState::Draw => Some(Outcome::Draw),
            GameState::Won(winner) if winner == player => Some(Outcome::Win),
            GameState::Won(_) => Some(Outcome::Loss),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::NotOver => write!(f, "in progress"),
            GameState::Won(player) => write!(f, "{} wins", player),
            GameState::Draw => write!(f, "draw"),
        }
    }
}
