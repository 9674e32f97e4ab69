use crate::board::Board;
use crate::error::ParseBoardError;
use crate::types::Player;
use std::fmt;

/// Board diagrams: one row per line (or `/`-separated), `X`/`O` for stones
/// and `.` or `-` for empty cells. Whitespace inside a row is ignored.
///
/// ```text
/// X.O
/// .X.
/// ..O
/// ```
impl Board {
    /// Parses a square diagram. The win length is not part of the diagram.
    pub fn from_diagram(diagram: &str, win_length: usize) -> Result<Self, ParseBoardError> {
        let rows: Vec<Vec<char>> = diagram
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(ParseBoardError::Empty);
        };
        let size = first.len();

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    got: cells.len(),
                    expected: size,
                });
            }
        }
        if rows.len() != size {
            return Err(ParseBoardError::NotSquare {
                rows: rows.len(),
                cols: size,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, chars) in rows.iter().enumerate() {
            for (col, &character) in chars.iter().enumerate() {
                let cell = match character {
                    '.' | '-' => None,
                    c => Some(Player::from_char(c).ok_or(ParseBoardError::InvalidCell {
                        character,
                        row,
                        col,
                    })?),
                };
                cells.push(cell);
            }
        }

        Board::from_cells(size, win_length, cells)
    }

    /// Renders the board as a `/`-separated single-line diagram.
    pub fn to_diagram(&self) -> String {
        self.to_string().trim_end().replace('\n', "/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let cell = self
                    .get(crate::types::Location::new(row, col))
                    .map_or('.', Player::to_char);
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Small positions used across the test suites.
pub mod positions {
    /// X to move wins at (0, 2).
    pub const X_WINS_TOP_ROW: &str = "XX./OO./...";

    /// X to move must block O at (1, 2).
    pub const X_MUST_BLOCK: &str = "X../OO./X..";

    /// One empty cell left at (2, 2).
    pub const LAST_CELL: &str = "XOX/XOO/OX.";
}
