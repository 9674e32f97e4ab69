use gomoku_core::{Board, Location};

/// Column letter plus 1-based row, e.g. `e5` for (4, 4).
pub fn label(location: Location) -> String {
    let column = (b'a' + location.col as u8) as char;
    format!("{}{}", column, location.row + 1)
}

fn column_header(size: usize) -> String {
    let letters: Vec<String> = (0..size)
        .map(|col| ((b'a' + col as u8) as char).to_string())
        .collect();
    format!("    {}", letters.join(" "))
}

/// Prints the board with coordinates, marking `highlight` if given.
pub fn display_board(board: &Board, highlight: Option<Location>) {
    let size = board.size();

    println!();
    println!("{}", column_header(size));
    println!("   {}", "-".repeat(size * 2 + 1));

    for row in 0..size {
        print!("{:>2} |", row + 1);
        for col in 0..size {
            let loc = Location::new(row, col);
            let cell = board.get(loc).map_or('.', |player| player.to_char());
            if highlight == Some(loc) {
                print!("[{}", cell);
            } else if highlight.is_some_and(|h| h.row == row && h.col + 1 == col) {
                print!("]{}", cell);
            } else {
                print!(" {}", cell);
            }
        }
        if highlight.is_some_and(|h| h.row == row && h.col + 1 == size) {
            println!("]| {}", row + 1);
        } else {
            println!(" | {}", row + 1);
        }
    }

    println!("   {}", "-".repeat(size * 2 + 1));
    println!("{}", column_header(size));
    println!();
    println!("{}", board.state());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(label(Location::new(0, 0)), "a1");
        assert_eq!(label(Location::new(4, 4)), "e5");
        assert_eq!(label(Location::new(8, 2)), "c9");
    }

    #[test]
    fn test_column_header() {
        assert_eq!(column_header(3), "    a b c");
    }
}
