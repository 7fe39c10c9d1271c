//! Named constraints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, ConstraintResult};

/// A named phonotactic constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// No phonemes outside the native inventory.
    Native,
    /// Front and back vowels do not mix.
    Harmonic,
    /// Onset and coda respect sonority sequencing.
    #[serde(rename = "sonseq")]
    SonSeq,
    /// More than one vowel.
    MinWord,
    /// Not exactly vowel-vowel-consonant.
    NotVvc,
    /// Ends in a vowel or coronal consonant.
    WordFinal,
}

/// Where a constraint applies within a candidate syllabification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Once, on the whole word.
    Word,
    /// On every syllable.
    Segment,
    /// On the last syllable only.
    Final,
}

impl Constraint {
    /// All constraints, in evaluation order.
    pub const ALL: [Constraint; 6] = [
        Constraint::Native,
        Constraint::Harmonic,
        Constraint::SonSeq,
        Constraint::MinWord,
        Constraint::NotVvc,
        Constraint::WordFinal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Constraint::Native => "native",
            Constraint::Harmonic => "harmonic",
            Constraint::SonSeq => "sonseq",
            Constraint::MinWord => "min_word",
            Constraint::NotVvc => "not_vvc",
            Constraint::WordFinal => "word_final",
        }
    }

    pub fn scope(self) -> Scope {
        match self {
            Constraint::Native | Constraint::Harmonic | Constraint::MinWord => Scope::Word,
            Constraint::SonSeq | Constraint::NotVvc => Scope::Segment,
            Constraint::WordFinal => Scope::Final,
        }
    }

    /// What a violating word does wrong.
    pub fn complaint(self) -> &'static str {
        match self {
            Constraint::Native => "contains phonemes outside the native inventory",
            Constraint::Harmonic => "mixes front and back vowels",
            Constraint::SonSeq => "violates sonority sequencing",
            Constraint::MinWord => "has fewer than two vowels",
            Constraint::NotVvc => "has the forbidden VVC shape",
            Constraint::WordFinal => "ends in a non-coronal consonant",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> ConstraintResult<Self> {
        Constraint::ALL
            .into_iter()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| ConstraintError::unknown_constraint(s))
    }
}
