//! Dot-delimited syllabifications.

use std::fmt;

use crate::error::SyllableResult;
use crate::syllable::{split_syllable, Syllable};
use crate::weight::{syllable_weight, WeightClass};

/// Syllable delimiter of the serialized form.
pub const DELIMITER: char = '.';

/// An ordered sequence of syllable strings.
///
/// Parsing and displaying round-trip exactly: `Syllabification::parse(s)`
/// displays as `s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Syllabification {
    syllables: Vec<String>,
}

impl Syllabification {
    pub fn parse(serialized: &str) -> Self {
        Self {
            syllables: serialized.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    pub fn from_syllables<I, S>(syllables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            syllables: syllables.into_iter().map(Into::into).collect(),
        }
    }

    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.syllables.iter().map(String::as_str)
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True if the serialized form is empty.
    pub fn is_empty(&self) -> bool {
        self.syllables.iter().all(String::is_empty)
    }

    /// The word with syllable boundaries removed.
    pub fn word(&self) -> String {
        self.syllables.concat()
    }

    pub fn last(&self) -> Option<&str> {
        self.syllables.last().map(String::as_str)
    }

    pub fn decompose(&self) -> Vec<SyllableResult<Syllable>> {
        self.iter().map(split_syllable).collect()
    }

    pub fn weights(&self) -> Vec<WeightClass> {
        self.iter().map(syllable_weight).collect()
    }

    /// Whether this syllabification equals any of the given reference
    /// syllabifications. Empty syllabifications never match.
    pub fn matches_any<'a, I>(&self, references: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return false;
        }
        let serialized = self.to_string();
        references
            .into_iter()
            .any(|reference| !reference.is_empty() && reference == serialized)
    }
}

impl fmt::Display for Syllabification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.syllables.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", syllable)?;
        }
        Ok(())
    }
}

impl From<&str> for Syllabification {
    fn from(serialized: &str) -> Self {
        Self::parse(serialized)
    }
}
