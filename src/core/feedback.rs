//! Guess evaluation and feedback representation
//!
//! Feedback is the five verdicts produced by scoring a guess against the
//! hidden answer. It can also be typed in by hand as `"GY-GY"` or
//! `"🟩🟨⬜🟩🟨"`, which is how the `hint` command receives histories.

use super::verdict::Verdict;
use super::word::{WORD_LEN, Word};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Verdicts for each column of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LEN]);

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback mark '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidMark(char),
}

/// Score `guess` against `answer`
///
/// Implements Wordle's feedback rules, including repeated letters.
///
/// # Algorithm
/// 1. Exact pass: every column where the letters match is `Correct`, and that
///    answer position is marked used
/// 2. Presence pass: every other column takes the leftmost unused answer
///    position holding the same letter and becomes `Present`; with none left
///    it stays `Absent`
///
/// A guessed letter is therefore never reported more often than it occurs in
/// the answer.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("trace").unwrap();
/// let answer = Word::new("crane").unwrap();
/// let feedback = evaluate(&guess, &answer);
///
/// use Verdict::{Absent, Correct, Present};
/// assert_eq!(feedback.verdicts(), &[Absent, Correct, Correct, Present, Correct]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> Feedback {
    let guess = guess.chars();
    let answer = answer.chars();

    let mut verdicts = [Verdict::Absent; WORD_LEN];
    let mut used = [false; WORD_LEN];

    // Allow: Index needed to compare guess[i] with answer[i] and set both masks
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess[i] == answer[i] {
            verdicts[i] = Verdict::Correct;
            used[i] = true;
        }
    }

    for i in 0..WORD_LEN {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let slot = (0..WORD_LEN).find(|&j| !used[j] && answer[j] == guess[i]);
        if let Some(j) = slot {
            verdicts[i] = Verdict::Present;
            used[j] = true;
        }
    }

    Feedback(verdicts)
}

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Check if every column is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, column: usize) -> &Verdict {
        &self.0[column]
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/'.'/⬜/⬛ for absent
impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<char> = s.trim().chars().collect();
        if marks.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(marks.len()));
        }

        let mut verdicts = [Verdict::Absent; WORD_LEN];
        for (slot, mark) in verdicts.iter_mut().zip(marks) {
            *slot = match mark {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => Verdict::Absent,
                other => return Err(FeedbackError::InvalidMark(other)),
            };
        }

        Ok(Self(verdicts))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}
