//! Game session state machine
//!
//! A [`GameSession`] owns everything about one game: the hidden answer, the
//! board, the guess history and the key status map. Front-ends feed it
//! [`Action`]s and render what it exposes; the evaluator and suggester are
//! called from here with immutable snapshots.

use super::board::{Board, COLS, Cell, ROWS};
use super::error::GameError;
use super::keys::KeyStatusMap;
use crate::core::{Feedback, Word, evaluate};
use crate::solver::{Solver, StrategyType};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// How long a rejected row stays marked invalid
pub const INVALID_FLASH: Duration = Duration::from_millis(500);

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No word lists yet; nothing can be played
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// Discrete input events from the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Backspace,
    Submit,
    ToggleHint,
    NewGame,
}

/// What an accepted action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Typed,
    Erased,
    /// Action had no effect (full row, empty row, non-letter key)
    Ignored,
    /// Row scored, game continues
    Scored(Feedback),
    Won(Feedback),
    Lost { feedback: Feedback, answer: Word },
    HintToggled(bool),
    NewGame,
}

/// Session settings
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Start with next-guess hints shown
    pub hints: bool,
    /// How long an invalid row stays marked
    pub invalid_flash: Duration,
    /// Ranking used for hints
    pub strategy: StrategyType,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hints: false,
            invalid_flash: INVALID_FLASH,
            strategy: StrategyType::default(),
        }
    }
}

/// Transient marker on a row that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMark {
    pub row: usize,
    /// Identifies this marker; a timer holding an older token is stale
    pub token: u64,
    pub raised_at: Instant,
}

/// One game of Wordle plus the word lists it is played with
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    word_lists: Option<WordLists>,
    answer: Option<Word>,
    board: Board,
    history: Vec<(Word, Feedback)>,
    keys: KeyStatusMap,
    row: usize,
    col: usize,
    state: GameState,
    hints: bool,
    suggestion: Option<Word>,
    invalid: Option<InvalidMark>,
    next_token: u64,
}

impl GameSession {
    /// Create a session with no word lists; play is gated until [`load`](Self::load)
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            word_lists: None,
            answer: None,
            board: Board::new(),
            history: Vec::new(),
            keys: KeyStatusMap::new(),
            row: 0,
            col: 0,
            state: GameState::NotStarted,
            hints: config.hints,
            suggestion: None,
            invalid: None,
            next_token: 0,
        }
    }

    /// Create a session and start a game with a random answer
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotLoaded`] if the answer list is empty.
    pub fn with_word_lists(
        config: SessionConfig,
        word_lists: WordLists,
    ) -> Result<Self, GameError> {
        let mut session = Self::new(config);
        session.load(word_lists)?;
        Ok(session)
    }

    /// Install the word lists and start a game
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotLoaded`] if the answer list is empty.
    pub fn load(&mut self, word_lists: WordLists) -> Result<(), GameError> {
        self.word_lists = Some(word_lists);
        self.new_game()
    }

    /// Start a new game with an answer drawn uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotLoaded`] before word lists are installed.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.new_game_with_rng(&mut rand::rng())
    }

    /// Start a new game drawing the answer from `rng`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotLoaded`] before word lists are installed.
    pub fn new_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let answer = self
            .word_lists
            .as_ref()
            .and_then(|lists| lists.answers().choose(rng))
            .copied()
            .ok_or(GameError::NotLoaded)?;
        self.start(answer);
        Ok(())
    }

    /// Start a new game with a known answer
    ///
    /// # Errors
    ///
    /// - [`GameError::NotLoaded`] before word lists are installed
    /// - [`GameError::NotInWordList`] if the answer could never be guessed
    pub fn start_with_answer(&mut self, answer: Word) -> Result<(), GameError> {
        let lists = self.word_lists.as_ref().ok_or(GameError::NotLoaded)?;
        if !lists.is_allowed(&answer) {
            return Err(GameError::NotInWordList(answer));
        }
        self.start(answer);
        Ok(())
    }

    fn start(&mut self, answer: Word) {
        self.answer = Some(answer);
        self.board.clear();
        self.history.clear();
        self.keys.clear();
        self.row = 0;
        self.col = 0;
        self.invalid = None;
        self.state = GameState::InProgress;
        self.refresh_suggestion();
    }

    /// Apply one input event
    ///
    /// # Errors
    ///
    /// - [`GameError::NotLoaded`] for row input before the word lists are in
    /// - [`GameError::GameOver`] for row input after a win or loss
    /// - [`GameError::IncompleteRow`] when submitting fewer than five letters
    /// - [`GameError::NotInWordList`] when the typed word is not allowed; the
    ///   row is marked invalid and nothing advances
    pub fn handle(&mut self, action: Action) -> Result<Outcome, GameError> {
        match action {
            Action::NewGame => {
                self.new_game()?;
                Ok(Outcome::NewGame)
            }
            Action::ToggleHint => {
                self.hints = !self.hints;
                self.refresh_suggestion();
                Ok(Outcome::HintToggled(self.hints))
            }
            Action::Letter(letter) => {
                self.ensure_playing()?;
                Ok(self.type_letter(letter))
            }
            Action::Backspace => {
                self.ensure_playing()?;
                Ok(self.erase_letter())
            }
            Action::Submit => {
                self.ensure_playing()?;
                self.submit()
            }
        }
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        match self.state {
            GameState::NotStarted => Err(GameError::NotLoaded),
            GameState::Won | GameState::Lost => Err(GameError::GameOver),
            GameState::InProgress => Ok(()),
        }
    }

    fn type_letter(&mut self, letter: char) -> Outcome {
        if !letter.is_ascii_alphabetic() || self.col >= COLS {
            return Outcome::Ignored;
        }
        self.invalid = None;
        self.board.set_letter(self.row, self.col, letter);
        self.col += 1;
        Outcome::Typed
    }

    fn erase_letter(&mut self) -> Outcome {
        if self.col == 0 {
            return Outcome::Ignored;
        }
        self.invalid = None;
        self.col -= 1;
        self.board.clear_letter(self.row, self.col);
        Outcome::Erased
    }

    fn submit(&mut self) -> Result<Outcome, GameError> {
        if self.col < COLS {
            return Err(GameError::IncompleteRow(self.col));
        }

        let (Some(lists), Some(answer)) = (self.word_lists.as_ref(), self.answer) else {
            return Err(GameError::NotLoaded);
        };

        // Only ASCII letters are ever typed, so a full row parses
        let guess = Word::new(self.board.row_text(self.row))
            .map_err(|_| GameError::IncompleteRow(self.col))?;

        if !lists.is_allowed(&guess) {
            self.raise_invalid();
            return Err(GameError::NotInWordList(guess));
        }

        let feedback = evaluate(&guess, &answer);
        self.board.apply_feedback(self.row, feedback);
        self.keys.record(&guess, &feedback);
        self.history.push((guess, feedback));
        self.row += 1;
        self.col = 0;
        self.invalid = None;

        let outcome = if feedback.is_win() {
            self.state = GameState::Won;
            Outcome::Won(feedback)
        } else if self.row >= ROWS {
            self.state = GameState::Lost;
            Outcome::Lost { feedback, answer }
        } else {
            Outcome::Scored(feedback)
        };

        self.refresh_suggestion();
        Ok(outcome)
    }

    fn raise_invalid(&mut self) {
        self.next_token += 1;
        self.invalid = Some(InvalidMark {
            row: self.row,
            token: self.next_token,
            raised_at: Instant::now(),
        });
    }

    /// Clear the invalid marker once its flash time has passed
    ///
    /// Returns `true` if a marker was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.invalid.is_some_and(|mark| {
            now.saturating_duration_since(mark.raised_at) >= self.config.invalid_flash
        });
        if expired {
            self.invalid = None;
        }
        expired
    }

    /// Clear the invalid marker identified by `token`
    ///
    /// Tokens from a marker that was already replaced or cleared (including
    /// by a new game) are ignored. Returns `true` if a marker was cleared.
    pub fn revert_invalid(&mut self, token: u64) -> bool {
        if self.invalid.is_some_and(|mark| mark.token == token) {
            self.invalid = None;
            return true;
        }
        false
    }

    fn refresh_suggestion(&mut self) {
        self.suggestion = match (&self.word_lists, self.hints, self.state) {
            (Some(lists), true, GameState::InProgress) => {
                Solver::new(self.config.strategy, lists.answers()).suggest(&self.history)
            }
            _ => None,
        };
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The 30 board cells in row-major order
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.board.cells().collect()
    }

    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.keys
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Current hint, present only while hints are enabled and the game runs
    #[must_use]
    pub const fn suggestion(&self) -> Option<Word> {
        self.suggestion
    }

    #[must_use]
    pub const fn hints_enabled(&self) -> bool {
        self.hints
    }

    /// The answer, exposed only after a loss
    #[must_use]
    pub fn revealed_answer(&self) -> Option<Word> {
        match self.state {
            GameState::Lost => self.answer,
            _ => None,
        }
    }

    #[must_use]
    pub const fn invalid_mark(&self) -> Option<InvalidMark> {
        self.invalid
    }

    /// Index of the row being typed (equals the number of submitted rows)
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Index of the next column to type into
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn current_input(&self) -> String {
        if self.row < ROWS {
            self.board.row_text(self.row)
        } else {
            String::new()
        }
    }

    #[must_use]
    pub const fn word_lists(&self) -> Option<&WordLists> {
        self.word_lists.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyStatus, Verdict};
    use crate::solver::OPENING_WORD;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALLOWED: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "react", "cater", "speed", "steal",
        "adieu", "words",
    ];

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(ALLOWED),
            words_from_slice(&["crane", "slate", "grate"]),
        )
        .unwrap()
    }

    fn session_with_answer(answer: &str) -> GameSession {
        let mut session = GameSession::with_word_lists(SessionConfig::default(), lists()).unwrap();
        session
            .start_with_answer(Word::new(answer).unwrap())
            .unwrap();
        session
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for letter in word.chars() {
            session.handle(Action::Letter(letter)).unwrap();
        }
    }

    fn guess(session: &mut GameSession, word: &str) -> Result<Outcome, GameError> {
        type_word(session, word);
        session.handle(Action::Submit)
    }

    #[test]
    fn input_is_gated_until_loaded() {
        let mut session = GameSession::new(SessionConfig::default());
        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(
            session.handle(Action::Letter('a')),
            Err(GameError::NotLoaded)
        );
        assert_eq!(session.handle(Action::Submit), Err(GameError::NotLoaded));
        assert_eq!(session.handle(Action::NewGame), Err(GameError::NotLoaded));
        assert_eq!(
            session.start_with_answer(Word::new("crane").unwrap()),
            Err(GameError::NotLoaded)
        );

        session.load(lists()).unwrap();
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.handle(Action::Letter('a')), Ok(Outcome::Typed));
    }

    #[test]
    fn unguessable_answer_is_refused() {
        let mut session = session_with_answer("crane");
        type_word(&mut session, "sla");
        let zzzzz = Word::new("zzzzz").unwrap();

        assert_eq!(
            session.start_with_answer(zzzzz),
            Err(GameError::NotInWordList(zzzzz))
        );
        assert_eq!(session.current_input(), "SLA");
        assert_eq!(session.state(), GameState::InProgress);

        session
            .start_with_answer(Word::new("words").unwrap())
            .unwrap();
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn random_answer_comes_from_answer_list() {
        let mut session = GameSession::new(SessionConfig::default());
        session.load(lists()).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            session.new_game_with_rng(&mut rng).unwrap();
            let answer = session.answer.unwrap();
            assert!(session.word_lists().unwrap().answers().contains(&answer));
        }
    }

    #[test]
    fn typing_and_erasing() {
        let mut session = session_with_answer("crane");

        assert_eq!(session.handle(Action::Backspace), Ok(Outcome::Ignored));
        type_word(&mut session, "slat");
        assert_eq!(session.current_input(), "SLAT");
        assert_eq!(session.current_col(), 4);

        assert_eq!(session.handle(Action::Letter('1')), Ok(Outcome::Ignored));
        assert_eq!(session.handle(Action::Backspace), Ok(Outcome::Erased));
        assert_eq!(session.current_input(), "SLA");

        type_word(&mut session, "te");
        assert_eq!(session.handle(Action::Letter('x')), Ok(Outcome::Ignored));
        assert_eq!(session.current_input(), "SLATE");
    }

    #[test]
    fn incomplete_row_is_rejected() {
        let mut session = session_with_answer("crane");
        type_word(&mut session, "cra");
        assert_eq!(
            session.handle(Action::Submit),
            Err(GameError::IncompleteRow(3))
        );
        assert_eq!(session.current_row(), 0);
        assert!(session.invalid_mark().is_none());
    }

    #[test]
    fn unknown_word_marks_row_and_does_not_advance() {
        let mut session = session_with_answer("crane");
        let result = guess(&mut session, "zzzzz");

        assert_eq!(
            result,
            Err(GameError::NotInWordList(Word::new("zzzzz").unwrap()))
        );
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_col(), 5);
        assert!(session.history().is_empty());
        assert!(session.key_statuses().is_empty());

        let mark = session.invalid_mark().unwrap();
        assert_eq!(mark.row, 0);
    }

    #[test]
    fn invalid_mark_expires_after_flash() {
        let mut session = session_with_answer("crane");
        guess(&mut session, "zzzzz").unwrap_err();
        let mark = session.invalid_mark().unwrap();

        assert!(!session.tick(mark.raised_at + Duration::from_millis(100)));
        assert!(session.invalid_mark().is_some());

        assert!(session.tick(mark.raised_at + INVALID_FLASH));
        assert!(session.invalid_mark().is_none());
    }

    #[test]
    fn stale_revert_token_is_ignored() {
        let mut session = session_with_answer("crane");
        guess(&mut session, "zzzzz").unwrap_err();
        let first = session.invalid_mark().unwrap().token;

        // Re-submitting raises a fresh marker
        session.handle(Action::Submit).unwrap_err();
        let second = session.invalid_mark().unwrap().token;
        assert_ne!(first, second);

        assert!(!session.revert_invalid(first));
        assert!(session.invalid_mark().is_some());
        assert!(session.revert_invalid(second));
        assert!(session.invalid_mark().is_none());
    }

    #[test]
    fn new_game_discards_invalid_mark() {
        let mut session = session_with_answer("crane");
        guess(&mut session, "zzzzz").unwrap_err();
        let token = session.invalid_mark().unwrap().token;

        session.handle(Action::NewGame).unwrap();
        assert!(session.invalid_mark().is_none());
        assert!(!session.revert_invalid(token));
    }

    #[test]
    fn scored_row_updates_board_and_keys() {
        let mut session = session_with_answer("crane");
        let outcome = guess(&mut session, "trace").unwrap();

        use Verdict::{Absent, Correct, Present};
        let expected = Feedback::new([Absent, Correct, Correct, Present, Correct]);
        assert_eq!(outcome, Outcome::Scored(expected));

        let cells = session.cells();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].letter, Some('T'));
        assert_eq!(cells[0].verdict, Some(Absent));
        assert_eq!(cells[3].verdict, Some(Present));
        assert_eq!(cells[5], Cell::default());

        let keys = session.key_statuses();
        assert_eq!(keys.get('T'), Some(KeyStatus::Miss));
        assert_eq!(keys.get('C'), Some(KeyStatus::Present));
        assert_eq!(keys.get('R'), Some(KeyStatus::Correct));

        assert_eq!(session.current_row(), 1);
        assert_eq!(session.current_col(), 0);
    }

    #[test]
    fn winning_row_ends_game() {
        let mut session = session_with_answer("crane");
        guess(&mut session, "slate").unwrap();
        let outcome = guess(&mut session, "crane").unwrap();

        assert_eq!(outcome, Outcome::Won(Feedback::PERFECT));
        assert_eq!(session.state(), GameState::Won);
        assert!(session.is_over());
        assert!(session.revealed_answer().is_none());
        assert!(session.suggestion().is_none());
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert_eq!(session.key_statuses().get(letter), Some(KeyStatus::Correct));
        }

        assert_eq!(
            session.handle(Action::Letter('a')),
            Err(GameError::GameOver)
        );
        assert_eq!(session.handle(Action::Submit), Err(GameError::GameOver));
    }

    #[test]
    fn six_misses_lose_and_reveal_answer() {
        let config = SessionConfig {
            hints: true,
            ..SessionConfig::default()
        };
        let mut session = GameSession::with_word_lists(config, lists()).unwrap();
        session
            .start_with_answer(Word::new("steal").unwrap())
            .unwrap();

        let misses = ["crane", "irate", "crate", "grate", "trace", "react"];
        for (i, word) in misses.iter().enumerate() {
            let outcome = guess(&mut session, word).unwrap();
            if i < 5 {
                assert!(matches!(outcome, Outcome::Scored(_)));
                assert_eq!(session.revealed_answer(), None);
            } else {
                assert!(
                    matches!(outcome, Outcome::Lost { answer, .. } if answer.text() == "STEAL")
                );
            }
        }

        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.revealed_answer().unwrap().text(), "STEAL");
        assert!(session.suggestion().is_none());
        assert_eq!(session.current_input(), "");
        assert_eq!(
            session.handle(Action::Letter('s')),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = session_with_answer("crane");
        guess(&mut session, "slate").unwrap();
        type_word(&mut session, "cr");

        session.handle(Action::NewGame).unwrap();

        assert!(session.board().is_empty());
        assert!(session.key_statuses().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_col(), 0);
        assert!(!session.is_over());
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn hints_follow_toggle_and_history() {
        let mut session = session_with_answer("grate");
        assert!(!session.hints_enabled());
        assert_eq!(session.suggestion(), None);

        assert_eq!(
            session.handle(Action::ToggleHint),
            Ok(Outcome::HintToggled(true))
        );
        assert_eq!(session.suggestion(), Some(OPENING_WORD));

        // SLATE vs GRATE leaves only GRATE among the answers
        guess(&mut session, "slate").unwrap();
        assert_eq!(session.suggestion().unwrap().text(), "GRATE");

        session.handle(Action::ToggleHint).unwrap();
        assert_eq!(session.suggestion(), None);
    }
}
