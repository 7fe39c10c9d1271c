//! The Finnish alphabet table.
//!
//! All phoneme predicates read from one immutable [`Alphabet`], built on
//! first use and shared for the rest of the process. Text is expected in the
//! internal alphabet, where `ä` is written `A` and `ö` is written `O`.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::VowelDepth;

/// Finnish vowels (`A` = ä, `O` = ö).
pub const VOWELS: [char; 8] = ['i', 'e', 'A', 'y', 'O', 'a', 'u', 'o'];

/// Legal Finnish diphthongs.
pub const DIPHTHONGS: [&str; 19] = [
    "ai", "ei", "oi", "Ai", "Oi", "au", "eu", "ou", "ey", "Ay", "Oy", "ui", "yi", "iu", "iy", "ie",
    "uo", "yO", "oy",
];

/// Consonant clusters licensed in loanword onsets (Karlsson 1985, #4).
pub const CLUSTERS: [&str; 15] = [
    "bl", "br", "dr", "fl", "fr", "gl", "gr", "kl", "kr", "kv", "pl", "pr", "cl", "qv", "schm",
];

const FRONT_VOWELS: [char; 3] = ['A', 'y', 'O'];
const BACK_VOWELS: [char; 3] = ['a', 'u', 'o'];
const NEUTRAL_VOWELS: [char; 2] = ['e', 'i'];

// Suomi et al. 2008
const CORONALS: [char; 5] = ['s', 't', 'r', 'n', 'l'];
const SONORANTS: [char; 4] = ['m', 'n', 'l', 'r'];

/// Characters of the native phonemic inventory. Space and hyphen appear in
/// compounds and multi-word tokens.
const PHONEMIC_INVENTORY: [char; 22] = [
    'i', 'e', 'A', 'y', 'O', 'a', 'u', 'o', ' ', '-', 'd', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r',
    's', 't', 'v',
];

/// Characters a native word may end in: vowels and coronal consonants.
const WORD_FINAL_INVENTORY: [char; 13] = [
    'i', 'e', 'A', 'y', 'O', 'a', 'u', 'o', 'l', 'n', 'r', 's', 't',
];

/// Complex onsets that satisfy sonority sequencing in native words.
const NATIVE_ONSETS: [&str; 14] = [
    "pl", "pr", "tr", "kl", "kr", "sp", "st", "sk", "ps", "ts", "sn", "dr", "spr", "str",
];

/// Sonority ranks: sibilant < obstruent < approximant < nasal.
const SONORITIES: [(char, u8); 21] = [
    ('s', 0),
    ('p', 1),
    ('b', 1),
    ('t', 1),
    ('d', 1),
    ('c', 1),
    ('q', 1),
    ('x', 1),
    ('k', 1),
    ('g', 1),
    ('\'', 1),
    ('f', 1),
    ('v', 1),
    ('z', 1),
    ('h', 1),
    ('l', 2),
    ('r', 2),
    ('j', 2),
    ('w', 2),
    ('m', 3),
    ('n', 3),
];

/// Lookup tables for Finnish phonotactics.
#[derive(Debug)]
pub struct Alphabet {
    vowels: HashSet<char>,
    coronals: HashSet<char>,
    sonorants: HashSet<char>,
    clusters: HashSet<&'static str>,
    diphthongs: HashSet<&'static str>,
    phonemic_inventory: HashSet<char>,
    word_final: HashSet<char>,
    native_onsets: HashSet<&'static str>,
    depths: HashMap<char, VowelDepth>,
    sonorities: HashMap<char, u8>,
}

impl Alphabet {
    fn build() -> Self {
        let depths = FRONT_VOWELS
            .iter()
            .map(|&c| (c, VowelDepth::Front))
            .chain(BACK_VOWELS.iter().map(|&c| (c, VowelDepth::Back)))
            .chain(NEUTRAL_VOWELS.iter().map(|&c| (c, VowelDepth::Neutral)))
            .collect();

        Self {
            vowels: VOWELS.into_iter().collect(),
            coronals: CORONALS.into_iter().collect(),
            sonorants: SONORANTS.into_iter().collect(),
            clusters: CLUSTERS.into_iter().collect(),
            diphthongs: DIPHTHONGS.into_iter().collect(),
            phonemic_inventory: PHONEMIC_INVENTORY.into_iter().collect(),
            word_final: WORD_FINAL_INVENTORY.into_iter().collect(),
            native_onsets: NATIVE_ONSETS.into_iter().collect(),
            depths,
            sonorities: SONORITIES.into_iter().collect(),
        }
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_coronal(&self, c: char) -> bool {
        self.coronals.contains(&c)
    }

    pub fn is_sonorant(&self, c: char) -> bool {
        self.sonorants.contains(&c)
    }

    pub fn is_cluster(&self, s: &str) -> bool {
        self.clusters.contains(s)
    }

    pub fn is_diphthong(&self, s: &str) -> bool {
        self.diphthongs.contains(s)
    }

    /// Whether `c` belongs to the native phonemic inventory.
    pub fn is_native(&self, c: char) -> bool {
        self.phonemic_inventory.contains(&c)
    }

    /// Whether a native word may end in `c`.
    pub fn is_word_final(&self, c: char) -> bool {
        self.word_final.contains(&c)
    }

    /// Whether `s` is a complex onset found in native words.
    pub fn is_native_onset(&self, s: &str) -> bool {
        self.native_onsets.contains(s)
    }

    /// Harmony depth of a vowel, `None` for anything else.
    pub fn depth(&self, c: char) -> Option<VowelDepth> {
        self.depths.get(&c).copied()
    }

    /// Sonority rank of a consonant. Unranked characters count as 0.
    pub fn sonority(&self, c: char) -> u8 {
        self.sonorities.get(&c).copied().unwrap_or(0)
    }
}

/// The process-wide alphabet table.
pub fn alphabet() -> &'static Alphabet {
    static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
    ALPHABET.get_or_init(Alphabet::build)
}
