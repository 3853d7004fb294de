//! Per-letter feedback classifications

use std::fmt;

/// Feedback for one letter of a guess
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    /// Letter does not occur in the answer (beyond the copies already matched)
    Absent,
    /// Letter occurs in the answer at a different position
    Present,
    /// Letter is at this exact position in the answer
    Correct,
}

impl Verdict {
    /// Single-character code used in typed feedback strings
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Best verdict seen so far for a keyboard key
///
/// The derived ordering is the upgrade rank: `Miss < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyStatus {
    Miss,
    Present,
    Correct,
}

impl From<Verdict> for KeyStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Miss,
            Verdict::Present => Self::Present,
            Verdict::Correct => Self::Correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_rank_order() {
        assert!(Verdict::Absent < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
    }

    #[test]
    fn key_status_rank_order() {
        assert!(KeyStatus::Miss < KeyStatus::Present);
        assert!(KeyStatus::Present < KeyStatus::Correct);
        assert_eq!(KeyStatus::Miss.max(KeyStatus::Correct), KeyStatus::Correct);
    }

    #[test]
    fn key_status_from_verdict() {
        assert_eq!(KeyStatus::from(Verdict::Absent), KeyStatus::Miss);
        assert_eq!(KeyStatus::from(Verdict::Present), KeyStatus::Present);
        assert_eq!(KeyStatus::from(Verdict::Correct), KeyStatus::Correct);
    }
}
