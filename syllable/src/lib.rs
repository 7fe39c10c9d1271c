//! FinnSyll Syllable
//!
//! Decompose syllables and profile syllabified words.
//!
//! Responsibilities:
//! - Split a syllable into onset, nucleus and coda
//! - Parse and serialize `.`-delimited syllabifications
//! - Derive per-syllable moraic weight (`L`, `H`, `?`)
//! - Render sonority profiles with the nucleus marked as the peak
//!
//! A syllable without a vowel cannot be decomposed. That is never fatal:
//! weight and sonority degrade to `?` for that syllable only.

mod error;
mod sonority;
mod syllabification;
mod syllable;
mod weight;

pub use error::{DecompositionError, SyllableResult};
pub use sonority::sonority_profile;
pub use syllabification::{Syllabification, DELIMITER};
pub use syllable::{split_syllable, Syllable};
pub use weight::{syllable_weight, word_weights, WeightClass};
