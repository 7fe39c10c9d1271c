//! Configuration for constraint checking

use serde::{Deserialize, Serialize};

use crate::error::ConstraintResult;
use crate::{Constraint, ViolationSeverity};

/// Configuration for constraint checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Constraints to evaluate
    pub enabled: Vec<Constraint>,
    /// Constraints that only warn instead of failing the candidate
    pub soft: Vec<Constraint>,
    /// Judge sonority sequencing of foreign words by slope
    pub foreign_slopes: bool,
    /// Let foreign words skip vowel harmony
    pub exempt_foreign_harmony: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            enabled: Constraint::ALL.to_vec(),
            soft: Vec::new(),
            foreign_slopes: false,
            exempt_foreign_harmony: false,
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every constraint enabled, none of them hard.
    pub fn lenient() -> Self {
        Self {
            soft: Constraint::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// Loanword-aware checking: slopes for sonority, no harmony for
    /// foreign words.
    pub fn loanwords() -> Self {
        Self {
            foreign_slopes: true,
            exempt_foreign_harmony: true,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.enabled = constraints.into_iter().collect();
        self
    }

    pub fn with_soft(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.soft = constraints.into_iter().collect();
        self
    }

    pub fn with_foreign_slopes(mut self, enabled: bool) -> Self {
        self.foreign_slopes = enabled;
        self
    }

    pub fn with_foreign_harmony_exemption(mut self, enabled: bool) -> Self {
        self.exempt_foreign_harmony = enabled;
        self
    }

    pub fn is_enabled(&self, constraint: Constraint) -> bool {
        self.enabled.contains(&constraint)
    }

    pub fn severity(&self, constraint: Constraint) -> ViolationSeverity {
        if self.soft.contains(&constraint) {
            ViolationSeverity::Warning
        } else {
            ViolationSeverity::Error
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConstraintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ConstraintResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
