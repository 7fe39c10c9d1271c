//! Diacritic normalization.
//!
//! Internally `ä` is written `A` and `ö` is written `O`, so that every
//! Finnish phoneme is a single ASCII character. Text that went through a
//! UTF-8 -> Latin-1 mix-up spells the diacritics as `Ã¤` and `Ã¶`; those are
//! accepted on the way in as well.

const LEGACY_A: &str = "\u{c3}\u{a4}";
const LEGACY_O: &str = "\u{c3}\u{b6}";

/// Map diacritic vowels to their placeholders, or back when `restore` is set.
///
/// Characters outside the mapping pass through unchanged.
pub fn normalize(text: &str, restore: bool) -> String {
    if restore {
        text.replace('A', "ä").replace('O', "ö")
    } else {
        decode_legacy(text).replace('ä', "A").replace('ö', "O")
    }
}

/// Replace `ä`/`ö` with `A`/`O`.
pub fn replace_umlauts(text: &str) -> String {
    normalize(text, false)
}

/// Replace `A`/`O` with `ä`/`ö`.
pub fn restore_umlauts(text: &str) -> String {
    normalize(text, true)
}

/// Lower-case raw orthography and normalize it.
///
/// Case folding has to happen first: folding after normalization would turn
/// the `A`/`O` placeholders back into `a`/`o`.
pub fn fold(raw: &str) -> String {
    normalize(&decode_legacy(raw).to_lowercase(), false)
}

fn decode_legacy(text: &str) -> String {
    text.replace(LEGACY_A, "ä").replace(LEGACY_O, "ö")
}
