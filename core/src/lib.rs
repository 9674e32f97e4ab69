pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod types;

pub use board::*;
pub use error::{BoardError, ParseBoardError};
pub use game::Game;
pub use notation::positions;
pub use types::*;
