use crate::error::{AgentError, Result};
use gomoku_core::{Board, Location};

/// Produces the candidate moves considered at a search node.
///
/// Every returned location must be empty on `board`, and at least one must be
/// returned whenever the board has an empty cell the generator would consider.
pub trait MoveGenerator {
    fn moves(&self, board: &Board) -> Vec<Location>;
}

impl<T: MoveGenerator + ?Sized> MoveGenerator for &T {
    fn moves(&self, board: &Board) -> Vec<Location> {
        (**self).moves(board)
    }
}

impl<T: MoveGenerator + ?Sized> MoveGenerator for Box<T> {
    fn moves(&self, board: &Board) -> Vec<Location> {
        (**self).moves(board)
    }
}

/// Every empty cell, in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllEmpty;

impl MoveGenerator for AllEmpty {
    fn moves(&self, board: &Board) -> Vec<Location> {
        board.empty_locations().collect()
    }
}

/// Empty cells within `radius` king moves of an existing stone, in
/// row-major order. An empty board yields just the centre cell.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood {
    radius: usize,
}

impl Neighborhood {
    pub fn new(radius: usize) -> Result<Self> {
        if radius == 0 {
            return Err(AgentError::InvalidRadius);
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    fn near_stone(&self, board: &Board, location: Location) -> bool {
        // No neighbourhood reaches further than the board itself.
        let r = self.radius.min(board.size()) as isize;
        (-r..=r).any(|d_row| {
            (-r..=r).any(|d_col| {
                location
                    .offset(d_row, d_col)
                    .is_some_and(|near| board.get(near).is_some())
            })
        })
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl MoveGenerator for Neighborhood {
    fn moves(&self, board: &Board) -> Vec<Location> {
        if board.is_empty() {
            return vec![board.center()];
        }

        board
            .empty_locations()
            .filter(|&loc| self.near_stone(board, loc))
            .collect()
    }
}
