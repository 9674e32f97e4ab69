use crate::error::{BoardError, Result};
use crate::types::*;

/// Largest supported side length (columns are labelled a-z in diagrams).
pub const MAX_SIZE: usize = 26;

/// The four line directions: east, south, south-east, south-west.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A square grid of cells, each empty or holding one player's stone.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Option<Player>>,
    stones: usize,
    state: GameState,
}

impl Board {
    /// Creates an empty board of `size` x `size` where `win_length` stones in a
    /// row win.
    pub fn new(size: usize, win_length: usize) -> Result<Self> {
        if size == 0 || size > MAX_SIZE || win_length == 0 || win_length > size {
            return Err(BoardError::InvalidDimensions { size, win_length });
        }

        Ok(Self {
            size,
            win_length,
            cells: vec![None; size * size],
            stones: 0,
            state: GameState::NotOver,
        })
    }

    /// The standard 9x9 five-in-a-row board.
    pub fn gomoku() -> Self {
        Self::empty_unchecked(9, 5)
    }

    /// A 3x3 three-in-a-row board.
    pub fn tic_tac_toe() -> Self {
        Self::empty_unchecked(3, 3)
    }

    fn empty_unchecked(size: usize, win_length: usize) -> Self {
        Self {
            size,
            win_length,
            cells: vec![None; size * size],
            stones: 0,
            state: GameState::NotOver,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stones in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns true if the location lies on this board.
    pub fn contains(&self, location: Location) -> bool {
        location.row < self.size && location.col < self.size
    }

    fn index(&self, location: Location) -> usize {
        location.row * self.size + location.col
    }

    /// Gets the stone at the given location. Off-board locations read as empty.
    pub fn get(&self, location: Location) -> Option<Player> {
        if self.contains(location) {
            self.cells[self.index(location)]
        } else {
            None
        }
    }

    /// Returns true if the location is on the board and unoccupied.
    pub fn is_empty_at(&self, location: Location) -> bool {
        self.contains(location) && self.get(location).is_none()
    }

    /// Returns a new board with `player`'s stone at `location`.
    /// The receiver is left untouched.
    pub fn update(&self, player: Player, location: Location) -> Result<Self> {
        if !self.contains(location) {
            return Err(BoardError::OutOfBounds {
                location,
                size: self.size,
            });
        }
        if let Some(occupant) = self.get(location) {
            return Err(BoardError::Occupied { location, occupant });
        }

        let mut next = self.clone();
        let index = next.index(location);
        next.cells[index] = Some(player);
        next.stones += 1;

        if self.state == GameState::NotOver {
            next.state = if next.completes_line(location, player) {
                GameState::Won(player)
            } else if next.is_full() {
                GameState::Draw
            } else {
                GameState::NotOver
            };
        }

        Ok(next)
    }

    /// Terminal classification of this snapshot.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns true if the game on this board has finished.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Iterates every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Location::new(row, col)))
    }

    /// Iterates the unoccupied locations in row-major order.
    pub fn empty_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations().filter(move |&loc| self.get(loc).is_none())
    }

    /// Number of stones placed so far.
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Returns true if no stone has been placed.
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// The centre cell (rounded towards the origin on even sizes).
    pub fn center(&self) -> Location {
        Location::new(self.size / 2, self.size / 2)
    }

    /// Counts consecutive `player` stones from `from` (exclusive) in one direction.
    fn run_length(&self, from: Location, player: Player, d_row: isize, d_col: isize) -> usize {
        let mut count = 0;
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if self.get(next) != Some(player) {
                break;
            }
            count += 1;
            current = next;
        }
        count
    }

    /// Returns true if the stone at `location` is part of a winning line.
    fn completes_line(&self, location: Location, player: Player) -> bool {
        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            let forward = self.run_length(location, player, d_row, d_col);
            let backward = self.run_length(location, player, -d_row, -d_col);
            forward + backward + 1 >= self.win_length
        })
    }

    /// Iterates every run of `win_length` consecutive cells along rows,
    /// columns and both diagonals, reporting how many stones each player
    /// holds in it.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        let span = self.win_length as isize - 1;
        self.locations()
            .flat_map(|start| DIRECTIONS.iter().map(move |&dir| (start, dir)))
            .filter(move |&(start, (d_row, d_col))| {
                start
                    .offset(d_row * span, d_col * span)
                    .is_some_and(|end| self.contains(end))
            })
            .map(move |(start, (d_row, d_col))| {
                let mut window = Window::default();
                for step in 0..self.win_length as isize {
                    if let Some(loc) = start.offset(d_row * step, d_col * step) {
                        match self.get(loc) {
                            Some(Player::X) => window.x += 1,
                            Some(Player::O) => window.o += 1,
                            None => {}
                        }
                    }
                }
                window
            })
    }

    /// Rebuilds a board from raw cells, classifying it from scratch.
    /// Used by the diagram parser, where stones do not arrive one at a time.
    pub(crate) fn from_cells(
        size: usize,
        win_length: usize,
        cells: Vec<Option<Player>>,
    ) -> std::result::Result<Self, crate::error::ParseBoardError> {
        let mut board = Self::new(size, win_length)?;
        board.stones = cells.iter().filter(|cell| cell.is_some()).count();
        board.cells = cells;

        let winners: Vec<Player> = Player::ALL
            .into_iter()
            .filter(|&player| {
                board
                    .windows()
                    .any(|window| window.count(player) == board.win_length)
            })
            .collect();

        board.state = match winners.as_slice() {
            [] if board.is_full() => GameState::Draw,
            [] => GameState::NotOver,
            [winner] => GameState::Won(*winner),
            _ => return Err(crate::error::ParseBoardError::TwoWinners),
        };

        Ok(board)
    }
}

/// Stone counts inside one winning-length window.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Window {
    pub x: usize,
    pub o: usize,
}

impl Window {
    /// Stones held by `player` in this window.
    pub const fn count(self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}
