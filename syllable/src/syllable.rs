//! Onset / nucleus / coda decomposition.

use std::fmt;

use finnsyll_core::{fold, is_diphthong, is_long, is_vowel, restore_umlauts};

use crate::error::{DecompositionError, SyllableResult};
use crate::weight::WeightClass;

/// A syllable split around its vocalic core.
///
/// `onset + nucleus + coda` always equals the folded syllable string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    /// Consonants before the nucleus.
    pub onset: String,
    /// The first maximal run of vowels. Never empty.
    pub nucleus: String,
    /// Everything after the nucleus.
    pub coda: String,
}

impl Syllable {
    /// Moraic weight: long nucleus or closed syllable is heavy.
    pub fn weight(&self) -> WeightClass {
        if self.nucleus.chars().count() > 1 || !self.coda.is_empty() {
            WeightClass::Heavy
        } else {
            WeightClass::Light
        }
    }

    /// True if the syllable ends in its nucleus.
    pub fn is_open(&self) -> bool {
        self.coda.is_empty()
    }

    /// True for a long vowel or a diphthong nucleus.
    pub fn has_long_nucleus(&self) -> bool {
        self.nucleus.chars().count() > 1 && (is_long(&self.nucleus) || is_diphthong(&self.nucleus))
    }

    /// The syllable spelled with `ä`/`ö`.
    pub fn to_orthography(&self) -> String {
        restore_umlauts(&self.to_string())
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.onset, self.nucleus, self.coda)
    }
}

/// Split a syllable into onset, nucleus and coda.
///
/// The input is case-folded and normalized first. The nucleus is the first
/// maximal run of vowels; anything after it, vowels included, is coda.
pub fn split_syllable(syllable: &str) -> SyllableResult<Syllable> {
    let folded = fold(syllable);

    let start = folded
        .find(|c: char| is_vowel(c))
        .ok_or_else(|| DecompositionError::new(syllable))?;
    let end = folded[start..]
        .find(|c: char| !is_vowel(c))
        .map_or(folded.len(), |offset| start + offset);

    Ok(Syllable {
        onset: folded[..start].to_string(),
        nucleus: folded[start..end].to_string(),
        coda: folded[end..].to_string(),
    })
}
