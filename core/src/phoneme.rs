//! Phoneme classification.
//!
//! Free predicates over single normalized characters and short strings.
//! They are total: anything outside the Finnish alphabet is simply a
//! consonant with no special properties.

use std::fmt;

use crate::alphabet;

/// Major class of a phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vowel,
    Consonant,
}

/// Vowel harmony class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelDepth {
    /// ä, ö, y
    Front,
    /// a, o, u
    Back,
    /// e, i: transparent to harmony.
    Neutral,
}

/// A single normalized character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phoneme(char);

impl Phoneme {
    pub fn new(c: char) -> Self {
        Self(c)
    }

    /// Get the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    pub fn category(self) -> Category {
        if is_vowel(self.0) {
            Category::Vowel
        } else {
            Category::Consonant
        }
    }

    pub fn is_vowel(self) -> bool {
        is_vowel(self.0)
    }

    pub fn is_consonant(self) -> bool {
        is_consonant(self.0)
    }

    pub fn is_coronal(self) -> bool {
        is_coronal(self.0)
    }

    pub fn is_sonorant(self) -> bool {
        is_sonorant(self.0)
    }

    /// Harmony class, `None` for consonants.
    pub fn depth(self) -> Option<VowelDepth> {
        vowel_depth(self.0)
    }

    pub fn sonority(self) -> u8 {
        sonority(self.0)
    }
}

impl From<char> for Phoneme {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn is_vowel(c: char) -> bool {
    alphabet().is_vowel(c)
}

/// Anything that is not a vowel, including foreign letters such as `w`.
pub fn is_consonant(c: char) -> bool {
    !is_vowel(c)
}

pub fn is_coronal(c: char) -> bool {
    alphabet().is_coronal(c)
}

pub fn is_sonorant(c: char) -> bool {
    alphabet().is_sonorant(c)
}

/// Whether `s` is a legal onset consonant cluster (`pl`, `tr`, `schm`, ...).
pub fn is_cluster(s: &str) -> bool {
    alphabet().is_cluster(s)
}

pub fn is_diphthong(s: &str) -> bool {
    alphabet().is_diphthong(s)
}

/// Whether `s` is a geminate: non-empty, every character the same.
pub fn is_long(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

pub fn is_front(c: char) -> bool {
    vowel_depth(c) == Some(VowelDepth::Front)
}

pub fn is_back(c: char) -> bool {
    vowel_depth(c) == Some(VowelDepth::Back)
}

pub fn is_neutral(c: char) -> bool {
    vowel_depth(c) == Some(VowelDepth::Neutral)
}

pub fn vowel_depth(c: char) -> Option<VowelDepth> {
    alphabet().depth(c)
}

/// Sonority rank on the 0..=3 scale (sibilant, obstruent, approximant, nasal).
pub fn sonority(c: char) -> u8 {
    alphabet().sonority(c)
}
