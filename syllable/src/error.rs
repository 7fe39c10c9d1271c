//! Syllable error types.

use thiserror::Error;

/// Result type for syllable decomposition.
pub type SyllableResult<T> = Result<T, DecompositionError>;

/// A syllable string with no vowel, so no nucleus to split around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot decompose syllable '{syllable}': no vowel nucleus")]
pub struct DecompositionError {
    pub syllable: String,
}

impl DecompositionError {
    pub fn new(syllable: impl Into<String>) -> Self {
        Self {
            syllable: syllable.into(),
        }
    }
}
