//! Sonority profiles.
//!
//! A diagnostic view of where the sonority peaks of a syllabified word fall:
//! each syllable is echoed with the first letter of its nucleus upper-cased.
//! Diacritics are restored first, so a marked `a` (`A`) can't be mistaken for
//! the `ä` placeholder.

use finnsyll_core::restore_umlauts;
use tracing::debug;

use crate::syllabification::{Syllabification, DELIMITER};
use crate::syllable::{split_syllable, Syllable};

const UNKNOWN: &str = "?";

/// Sonority profile of a syllabified word, e.g. `"ka.lan"` -> `"kA.lAn"`.
pub fn sonority_profile(syllabification: &str) -> String {
    Syllabification::parse(syllabification)
        .iter()
        .map(sonorous_syllable)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

fn sonorous_syllable(raw: &str) -> String {
    match split_syllable(raw) {
        Ok(syllable) => render(&syllable),
        Err(e) => {
            debug!(error = %e, "sonority unknown");
            UNKNOWN.to_string()
        }
    }
}

fn render(syllable: &Syllable) -> String {
    let restored = restore_umlauts(&syllable.nucleus);
    let mut nucleus = restored.chars();
    let peak: String = match nucleus.next() {
        Some(first) => first.to_uppercase().chain(nucleus).collect(),
        None => String::new(),
    };
    format!(
        "{}{}{}",
        restore_umlauts(&syllable.onset),
        peak,
        restore_umlauts(&syllable.coda)
    )
}
