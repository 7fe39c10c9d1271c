//! Constraint checking.

use finnsyll_core::Word;
use finnsyll_syllable::Syllabification;
use tracing::{debug, trace};

use crate::config::CheckerConfig;
use crate::constraint::{Constraint, Scope};
use crate::report::{SegmentReport, SplitReport};
use crate::rules;
use crate::violation::{Violation, Violations};

/// Constraint checker.
///
/// Holds only its configuration, so one checker can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct ConstraintChecker {
    config: CheckerConfig,
}

impl ConstraintChecker {
    /// Create a new constraint checker.
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check a whole word against every enabled constraint.
    pub fn check_word(&self, word: &Word) -> Violations {
        let mut violations = Violations::new();

        for constraint in self.enabled() {
            if let Some(violation) = self.check_constraint(constraint, word) {
                violations.push(violation);
            }
        }

        violations
    }

    /// Check a candidate syllabification.
    ///
    /// Word-scoped constraints run on the rejoined word, segment-scoped ones
    /// on every syllable, and the word-final restriction on the last
    /// syllable only.
    pub fn check_syllabification(&self, syllabification: &Syllabification) -> SplitReport {
        let mut report = SplitReport::new(Word::parse(&syllabification.to_string()).restored());

        // Word-level constraints
        let word = Word::parse(&syllabification.word());
        for constraint in self.enabled().filter(|c| c.scope() == Scope::Word) {
            report.checks += 1;
            if let Some(violation) = self.check_constraint(constraint, &word) {
                report.word.push(violation);
            }
        }

        // Segment-level constraints
        let count = syllabification.len();
        for (i, raw) in syllabification.iter().enumerate() {
            let is_last = i + 1 == count;
            let segment = Word::parse(raw);
            let orthography = segment.restored();
            let mut violations = Violations::new();

            for constraint in self.enabled() {
                let applies = match constraint.scope() {
                    Scope::Word => false,
                    Scope::Segment => true,
                    Scope::Final => is_last,
                };
                if !applies {
                    continue;
                }

                report.checks += 1;
                if let Some(violation) = self.check_constraint(constraint, &segment) {
                    violations.push(violation.with_segment(orthography.as_str()));
                }
            }

            report.segments.push(SegmentReport {
                segment: orthography,
                violations,
            });
        }

        report
    }

    /// Evaluate one constraint, honoring the loanword options.
    pub fn passes(&self, constraint: Constraint, word: &str) -> bool {
        match constraint {
            Constraint::Native => !rules::is_foreign(word),
            Constraint::Harmonic if self.config.exempt_foreign_harmony => {
                rules::harmonic_with(word, rules::is_foreign(word))
            }
            Constraint::Harmonic => rules::harmonic(word),
            Constraint::SonSeq if self.config.foreign_slopes => {
                rules::sonseq_with(word, rules::is_foreign(word))
            }
            Constraint::SonSeq => rules::sonseq(word),
            Constraint::MinWord => rules::min_word(word),
            Constraint::NotVvc => rules::not_vvc(word),
            Constraint::WordFinal => rules::word_final(word),
        }
    }

    // ========== Internal checking methods ==========

    fn enabled(&self) -> impl Iterator<Item = Constraint> + '_ {
        Constraint::ALL
            .into_iter()
            .filter(|&c| self.config.is_enabled(c))
    }

    fn check_constraint(&self, constraint: Constraint, word: &Word) -> Option<Violation> {
        let passed = self.passes(constraint, word);
        trace!(%constraint, %word, passed, "constraint evaluated");

        if passed {
            return None;
        }

        let severity = self.config.severity(constraint);
        debug!(%constraint, %word, ?severity, "constraint violated");

        Some(Violation::new(
            constraint,
            severity,
            format!("'{}' {}", word.restored(), constraint.complaint()),
        ))
    }
}
