//! FinnSyll Constraint
//!
//! Judge words and candidate syllabifications against Finnish phonotactics.
//!
//! Responsibilities:
//! - Pure rule predicates (vowel harmony, sonority sequencing, minimal word,
//!   *VVC, word-final restriction, foreign-word detection)
//! - Check a word against every enabled rule
//! - Check a candidate split segment by segment and score it
//! - Distinguish hard (error) vs soft (warning) constraints

mod checker;
mod config;
mod constraint;
mod error;
mod report;
pub mod rules;
mod violation;

pub use checker::ConstraintChecker;
pub use config::CheckerConfig;
pub use constraint::{Constraint, Scope};
pub use error::{ConstraintError, ConstraintResult};
pub use report::{SegmentReport, SplitReport};
pub use rules::{
    harmonic, harmonic_with, is_foreign, is_sloping, min_word, not_vvc, sonseq, sonseq_with,
    word_final, Slope,
};
pub use violation::{Violation, ViolationSeverity, Violations};
