//! Moraic weight.
//!
//! (C)V is light; (C)VC+ and (C)VV+C* are heavy.

use std::fmt;

use tracing::debug;

use crate::syllabification::{Syllabification, DELIMITER};
use crate::syllable::split_syllable;

/// Weight of a single syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    Light,
    Heavy,
    /// The syllable could not be decomposed.
    Unknown,
}

impl WeightClass {
    /// The symbol used in serialized weight strings.
    pub fn symbol(self) -> char {
        match self {
            WeightClass::Light => 'L',
            WeightClass::Heavy => 'H',
            WeightClass::Unknown => '?',
        }
    }

    pub fn is_heavy(self) -> bool {
        matches!(self, WeightClass::Heavy)
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Weight of one syllable string, `Unknown` if it has no vowel.
pub fn syllable_weight(syllable: &str) -> WeightClass {
    match split_syllable(syllable) {
        Ok(syl) => syl.weight(),
        Err(e) => {
            debug!(error = %e, "syllable weight unknown");
            WeightClass::Unknown
        }
    }
}

/// Weight string of a syllabified word, e.g. `"ka.lan"` -> `"L.H"`.
pub fn word_weights(syllabification: &str) -> String {
    Syllabification::parse(syllabification)
        .weights()
        .into_iter()
        .map(|w| w.symbol().to_string())
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}
