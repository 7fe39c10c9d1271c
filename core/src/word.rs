//! The word value passed into phonotactic rules.

use std::fmt;
use std::ops::Deref;

use crate::{fold, is_vowel, restore_umlauts, Phoneme};

/// A word in the internal alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word {
    text: String,
}

impl Word {
    /// Build a word from raw orthography (any case, `ä`/`ö` or legacy bytes).
    pub fn parse(raw: &str) -> Self {
        Self { text: fold(raw) }
    }

    /// Wrap text that is already lower-case and normalized.
    pub fn from_normalized(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn phonemes(&self) -> impl Iterator<Item = Phoneme> + '_ {
        self.text.chars().map(Phoneme::new)
    }

    pub fn vowels(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().filter(|&c| is_vowel(c))
    }

    /// Number of phonemes.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn last(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// The word with `ä`/`ö` put back.
    pub fn restored(&self) -> String {
        restore_umlauts(&self.text)
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
