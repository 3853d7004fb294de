//! Errors a game session reports back to its front-end
//!
//! All of these are local to the session: the caller shows them to the
//! player and keeps going.

use crate::core::Word;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input arrived before the word lists were installed
    #[error("word lists are not loaded yet")]
    NotLoaded,

    /// Row input after the game was won or lost
    #[error("the game is over, start a new one")]
    GameOver,

    /// Submit pressed with fewer than five letters typed
    #[error("not enough letters ({0}/5)")]
    IncompleteRow(usize),

    /// The typed word is not in the allowed-guess list
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
}
