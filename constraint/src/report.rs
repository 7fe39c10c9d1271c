//! Results of checking a candidate syllabification.

use serde::Serialize;

use crate::{Violation, Violations};

/// Violations found in one syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    /// The syllable, case-folded and spelled with `ä`/`ö`.
    pub segment: String,
    pub violations: Violations,
}

/// Outcome of checking one candidate split of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// The candidate, case-folded and spelled with `ä`/`ö`.
    pub syllabification: String,
    /// Violations of word-scoped constraints.
    pub word: Violations,
    /// Per-syllable violations, in order.
    pub segments: Vec<SegmentReport>,
    /// Number of constraint evaluations performed.
    pub checks: usize,
}

impl SplitReport {
    pub fn new(syllabification: impl Into<String>) -> Self {
        Self {
            syllabification: syllabification.into(),
            ..Self::default()
        }
    }

    /// No hard constraint failed anywhere.
    pub fn is_well_formed(&self) -> bool {
        self.violations().all(|v| !v.is_error())
    }

    /// Number of checks that passed. Higher is better.
    pub fn score(&self) -> usize {
        self.checks.saturating_sub(self.violation_count())
    }

    pub fn violation_count(&self) -> usize {
        self.word.len() + self.segments.iter().map(|s| s.violations.len()).sum::<usize>()
    }

    /// All violations, word-level first.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.word
            .all()
            .iter()
            .chain(self.segments.iter().flat_map(|s| s.violations.all()))
    }
}
