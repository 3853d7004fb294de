//! Game session: board, key statuses and the play state machine

mod board;
mod error;
mod keys;
mod session;

pub use board::{Board, COLS, Cell, ROWS};
pub use error::GameError;
pub use keys::{KEYBOARD_ROWS, KeyStatusMap};
pub use session::{
    Action, GameSession, GameState, INVALID_FLASH, InvalidMark, Outcome, SessionConfig,
};
