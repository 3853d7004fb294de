//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and the [`WordLists`] pair a game session needs before play can start.

use super::{ALLOWED, ANSWERS};
use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable word list
///
/// Fatal at session start: a game cannot be played without both lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the {0} word list contains no valid 5-letter words")]
    Empty(&'static str),
}

/// Load words from a file
///
/// Lines are trimmed and lowercased; anything that is not exactly five ASCII
/// letters is skipped.
///
/// # Errors
///
/// Returns a [`LoadError::Io`] if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Parse newline-delimited text into words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim().to_ascii_lowercase();
            if trimmed.len() == WORD_LEN {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The two word lists a session plays with
#[derive(Debug, Clone)]
pub struct WordLists {
    allowed: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl WordLists {
    /// Build from already-parsed lists
    ///
    /// Every answer is also accepted as a guess, so a game is always winnable.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if either list is empty.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, LoadError> {
        if allowed.is_empty() {
            return Err(LoadError::Empty("allowed"));
        }
        if answers.is_empty() {
            return Err(LoadError::Empty("answers"));
        }

        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().copied());

        Ok(Self { allowed, answers })
    }

    /// Lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if a data file was empty at build time.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Load both lists, falling back to the embedded copy for any path not given
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if a file cannot be read or a list is empty.
    pub fn load(allowed: Option<&Path>, answers: Option<&Path>) -> Result<Self, LoadError> {
        let allowed = match allowed {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ALLOWED),
        };
        let answers = match answers {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ANSWERS),
        };
        Self::new(allowed, answers)
    }

    /// Check whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}
