//! Seeded generation of native Finnish syllabifications.
//!
//! Generated syllables have the shape `(C)V(V)(C)`: at most one onset
//! consonant, a short vowel, long vowel or `i`-final diphthong, and at most
//! one coronal coda. All vowels of a word come from one harmony class plus
//! the neutral `e`/`i`, so every generated word is native and harmonic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use finnsyll_syllable::Syllabification;

const ONSETS: [&str; 12] = ["", "k", "p", "t", "s", "h", "m", "n", "l", "r", "v", "j"];
const CODAS: [&str; 6] = ["", "n", "t", "s", "l", "r"];

const BACK: [char; 5] = ['a', 'o', 'u', 'e', 'i'];
const FRONT: [char; 5] = ['ä', 'ö', 'y', 'e', 'i'];

/// A generated syllable and the parts it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSyllable {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
}

impl GeneratedSyllable {
    pub fn text(&self) -> String {
        format!("{}{}{}", self.onset, self.nucleus, self.coda)
    }

    /// Onsetless long nucleus followed by one consonant.
    pub fn is_vvc(&self) -> bool {
        self.onset.is_empty() && self.nucleus.chars().count() == 2 && self.coda.chars().count() == 1
    }
}

/// Deterministic word generator.
pub struct WordGenerator {
    rng: StdRng,
}

impl WordGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One syllable drawn from the given vowel set.
    pub fn syllable_from(&mut self, vowels: &[char]) -> GeneratedSyllable {
        let onset = ONSETS.choose(&mut self.rng).copied().unwrap_or_default();
        let coda = CODAS.choose(&mut self.rng).copied().unwrap_or_default();

        let first = vowels[self.rng.gen_range(0..vowels.len())];
        let nucleus = match self.rng.gen_range(0..3) {
            0 => first.to_string(),
            1 => format!("{}{}", first, first),
            _ if first != 'i' => format!("{}i", first),
            _ => first.to_string(),
        };

        GeneratedSyllable {
            onset: onset.to_string(),
            nucleus,
            coda: coda.to_string(),
        }
    }

    /// A word of `min..=max` syllables within one harmony class.
    pub fn word(&mut self, min: usize, max: usize) -> Vec<GeneratedSyllable> {
        let vowels: &[char] = if self.rng.gen_bool(0.5) { &BACK } else { &FRONT };
        let count = self.rng.gen_range(min..=max);
        (0..count).map(|_| self.syllable_from(vowels)).collect()
    }

    /// A word as a syllabification.
    pub fn syllabification(&mut self, min: usize, max: usize) -> (Syllabification, Vec<GeneratedSyllable>) {
        let syllables = self.word(min, max);
        let syllabification = Syllabification::from_syllables(syllables.iter().map(|s| s.text()));
        (syllabification, syllables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_seed_same_words() {
        let mut a = WordGenerator::new(7);
        let mut b = WordGenerator::new(7);

        for _ in 0..20 {
            assert_eq!(a.word(1, 4), b.word(1, 4));
        }
    }

    #[test]
    fn test_word_length_in_range() {
        let mut generator = WordGenerator::new(42);
        for _ in 0..100 {
            let word = generator.word(2, 5);
            assert!((2..=5).contains(&word.len()));
            assert!(word.iter().all(|s| !s.nucleus.is_empty()));
        }
    }

    #[test]
    fn test_vvc_shape() {
        let syllable = GeneratedSyllable {
            onset: String::new(),
            nucleus: "aa".into(),
            coda: "t".into(),
        };
        assert!(syllable.is_vvc());
        assert_eq!(syllable.text(), "aat");
    }
}
