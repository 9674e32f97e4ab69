use crate::display::label;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use gomoku_agents::{Agent, LineEvaluator, MinimaxAgent, MoveGenerator};
use gomoku_core::{Board, Game, Location, Player};
use std::io::{self, Write};
use tracing::info;

type Engine = MinimaxAgent<Box<dyn MoveGenerator>, LineEvaluator>;

/// Leaves raw mode first, so a failed write cannot strand the terminal in it.
fn restore_terminal<W: Write>(
    out: &mut W,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let left = leave_raw_mode();
    let redrawn = out
        .execute(Show)
        .and_then(|out| out.execute(Clear(ClearType::All)))
        .and_then(|out| out.execute(MoveTo(0, 0)))
        .map(|_| ());
    left.and(redrawn)
}

pub struct InteractiveGame {
    start: Board,
    game: Game,
    engine: Engine,
    human: Player,
    cursor: (usize, usize), // (row, col)
    last_move: Option<Location>,
    message: String,
}

impl InteractiveGame {
    pub fn new(board: Board, engine: Engine) -> Self {
        let human = engine.player().opponent();
        let center = board.center();
        Self {
            game: Game::new(board.clone()),
            start: board,
            engine,
            human,
            cursor: (center.row, center.col),
            last_move: None,
            message: String::from("Use hjkl to move, Enter to place, q to quit"),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();

        let result = stdout
            .execute(Hide)
            .and_then(|out| out.execute(Clear(ClearType::All)))
            .map_err(anyhow::Error::from)
            .and_then(|_| self.game_loop());
        let restored = restore_terminal(&mut stdout, terminal::disable_raw_mode);

        result?;
        restored.context("failed to restore terminal")
    }

    fn game_loop(&mut self) -> Result<()> {
        if self.game.to_move() != self.human {
            self.engine_move()?;
        }

        loop {
            self.draw_board()?;

            if self.game.is_over() {
                self.message = format!("Game over: {}. n = new game, q = quit", self.game.state());
            }

            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }

            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.place_stone() {
                        self.engine_move()?;
                    }
                }
                KeyCode::Char('u') => self.undo_move()?,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let size = self.game.board().size();
        let row = self.cursor.0.checked_add_signed(d_row);
        let col = self.cursor.1.checked_add_signed(d_col);

        if let (Some(row), Some(col)) = (row, col) {
            if row < size && col < size {
                self.cursor = (row, col);
            }
        }
    }

    /// Plays the human's stone at the cursor. Returns true if it was placed.
    fn place_stone(&mut self) -> bool {
        if self.game.is_over() || self.game.to_move() != self.human {
            return false;
        }

        let location = Location::new(self.cursor.0, self.cursor.1);
        match self.game.play(location) {
            Ok(()) => {
                self.last_move = Some(location);
                self.message = format!("You played {}", label(location));
                true
            }
            Err(err) => {
                self.message = err.to_string();
                false
            }
        }
    }

    fn engine_move(&mut self) -> Result<()> {
        if self.game.is_over() {
            return Ok(());
        }

        self.message = String::from("Engine thinking...");
        self.draw_board()?;

        if let Some(mv) = self.engine.next_move(&self.game)? {
            self.game.play(mv)?;
            self.last_move = Some(mv);
            self.message = format!("Engine played {}", label(mv));
            info!(%mv, "engine move");
        }

        Ok(())
    }

    fn undo_move(&mut self) -> Result<()> {
        // Take back the engine's reply and the human move before it.
        let mut undone = 0;
        while undone < 2 && self.game.undo().is_some() {
            undone += 1;
            if self.game.to_move() == self.human {
                break;
            }
        }

        self.last_move = self.game.history().last().map(|&(_, loc)| loc);
        self.message = if undone == 0 {
            String::from("Nothing to undo")
        } else {
            String::from("Undid last move")
        };

        // Only the engine's opening move was left to take back.
        if self.game.to_move() != self.human {
            self.engine_move()?;
        }
        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        self.game = Game::new(self.start.clone());
        self.last_move = None;
        let center = self.start.center();
        self.cursor = (center.row, center.col);
        self.message = String::from("New game started!");

        if self.game.to_move() != self.human {
            self.engine_move()?;
        }
        Ok(())
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(MoveTo(0, 0))?;
        stdout.execute(Clear(ClearType::FromCursorDown))?;

        let board = self.game.board();
        let size = board.size();
        let header: String = (0..size)
            .map(|col| format!("{} ", (b'a' + col as u8) as char))
            .collect();

        print!("Gomoku - {} in a row (vim keys: hjkl)\r\n", board.win_length());
        print!("Commands: Enter=place, u=undo, n=new, q=quit\r\n");
        print!("You play {}, engine: {}\r\n\r\n", self.human, self.engine.name());

        print!("    {}\r\n", header);
        print!("   ┌{}┐\r\n", "─".repeat(size * 2 + 1));

        for row in 0..size {
            print!("{:>2} │ ", row + 1);

            for col in 0..size {
                let loc = Location::new(row, col);

                if self.cursor == (row, col) {
                    stdout.execute(SetBackgroundColor(TermColor::Yellow))?;
                } else if self.last_move == Some(loc) {
                    stdout.execute(SetBackgroundColor(TermColor::Blue))?;
                }

                match board.get(loc) {
                    Some(Player::X) => {
                        stdout.execute(SetForegroundColor(TermColor::White))?;
                        print!("X");
                    }
                    Some(Player::O) => {
                        stdout.execute(SetForegroundColor(TermColor::Magenta))?;
                        print!("O");
                    }
                    None => print!("·"),
                }

                stdout.execute(ResetColor)?;
                print!(" ");
            }

            print!("│ {}\r\n", row + 1);
        }

        print!("   └{}┘\r\n", "─".repeat(size * 2 + 1));
        print!("    {}\r\n\r\n", header);

        print!(
            "{} to move | Move {}\r\n\r\n",
            self.game.to_move(),
            self.game.history().len() + 1
        );
        print!("{}\r\n", self.message);

        stdout.flush()?;
        Ok(())
    }
}
