//! Phonotactic rules.
//!
//! Every rule is a pure predicate over a word in the internal alphabet
//! (`ä` = `A`, `ö` = `O`, lower case). `true` means the word satisfies the
//! rule.

use std::collections::{BTreeSet, HashSet};

use finnsyll_core::{
    alphabet, is_consonant, is_vowel, replace_umlauts, sonority, vowel_depth, VowelDepth,
};

// Foreign-word detection ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Whether the word looks like a loanword.
///
/// A word is foreign if it ends in anything but a vowel or coronal
/// consonant, or if it contains characters outside the native inventory.
pub fn is_foreign(word: &str) -> bool {
    let word = replace_umlauts(word);
    let chars: Vec<char> = word.chars().collect();
    let alphabet = alphabet();

    if chars.len() > 1 && matches!(chars.last(), Some(&c) if !alphabet.is_word_final(c)) {
        return true;
    }

    let foreign: BTreeSet<char> = chars
        .iter()
        .copied()
        .filter(|&c| !alphabet.is_native(c))
        .collect();

    if foreign.len() == 1 && foreign.contains(&'g') {
        return !velar_nasal_exception(&chars);
    }

    !foreign.is_empty()
}

/// `g` after `n` spells the velar nasal /ŋ/, which is native.
///
/// Only the first `g` is inspected.
fn velar_nasal_exception(chars: &[char]) -> bool {
    match chars.iter().position(|&c| c == 'g') {
        Some(i) if i > 0 => chars[i - 1] == 'n',
        _ => false,
    }
}

// Vowel harmony ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Front and back vowels do not co-occur. Neutral `e`/`i` are transparent.
pub fn harmonic(word: &str) -> bool {
    let depths: HashSet<VowelDepth> = word
        .chars()
        .filter_map(vowel_depth)
        .filter(|&depth| depth != VowelDepth::Neutral)
        .collect();

    depths.len() < 2
}

/// [`harmonic`], with foreign words exempt when `foreign` is set.
pub fn harmonic_with(word: &str, foreign: bool) -> bool {
    foreign || harmonic(word)
}

// Sonority sequencing ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Direction of a sonority slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    /// Rising toward the nucleus (onsets).
    Rising,
    /// Falling away from the nucleus (codas).
    Falling,
}

/// Whether the sonority of `segment` strictly rises or falls.
pub fn is_sloping(segment: &str, slope: Slope) -> bool {
    let values: Vec<u8> = segment.chars().map(sonority).collect();

    let mut expected = values.clone();
    expected.sort_unstable();
    expected.dedup();
    if slope == Slope::Falling {
        expected.reverse();
    }

    values == expected
}

/// Sonority sequencing for native words: a simplex or native complex
/// onset, and a simplex coda.
pub fn sonseq(word: &str) -> bool {
    sonseq_with(word, false)
}

/// [`sonseq`], judging foreign words by slope instead: the onset must
/// rise and the coda fall.
pub fn sonseq_with(word: &str, foreign: bool) -> bool {
    let (onset, coda) = margins(word);

    if foreign {
        return is_sloping(onset, Slope::Rising) && is_sloping(coda, Slope::Falling);
    }

    let simplex_onset = onset.chars().count() <= 1;
    let simplex_coda = coda.chars().count() <= 1;

    (simplex_onset || alphabet().is_native_onset(onset)) && simplex_coda
}

/// The consonants before the first vowel and after the last one. A word
/// without vowels is all margin on both sides.
fn margins(word: &str) -> (&str, &str) {
    let from_nucleus = word.trim_start_matches(|c: char| !is_vowel(c));
    let to_nucleus = word.trim_end_matches(|c: char| !is_vowel(c));

    if from_nucleus.is_empty() {
        return (word, word);
    }

    let onset = &word[..word.len() - from_nucleus.len()];
    let coda = &word[to_nucleus.len()..];
    (onset, coda)
}

// MinWord ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// A word needs more than one vowel.
pub fn min_word(word: &str) -> bool {
    word.chars().filter(|&c| is_vowel(c)).count() > 1
}

// *VVC ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Rejects exactly the three-letter shape vowel-vowel-consonant.
pub fn not_vvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    match chars.as_slice() {
        &[a, b, c] => !(is_vowel(a) && is_vowel(b) && is_consonant(c)),
        _ => true,
    }
}

// Word-final ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// A word ends in a vowel or a coronal consonant.
pub fn word_final(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|c| alphabet().is_word_final(c))
}
