//! Output formatting utilities for the REPL.

use serde::Serialize;

use finnsyll_constraint::{SplitReport, Violation, ViolationSeverity, Violations};
use finnsyll_core::restore_umlauts;
use finnsyll_syllable::Syllable;

/// Format a violation list, or `ok` when there is none.
pub fn format_violations(violations: &Violations) -> String {
    if violations.is_empty() {
        return "ok".to_string();
    }

    violations
        .all()
        .iter()
        .map(format_violation)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a split report: score line, then any violations.
pub fn format_report(report: &SplitReport) -> String {
    let verdict = if report.is_well_formed() {
        "well-formed"
    } else {
        "ill-formed"
    };

    let mut lines = vec![format!(
        "{} {}/{} ({})",
        report.syllabification,
        report.score(),
        report.checks,
        verdict
    )];
    lines.extend(report.violations().map(format_violation));
    lines.join("\n")
}

/// Format a decomposed syllable as `onset|nucleus|coda`.
pub fn format_split(syllable: &Syllable) -> String {
    format!(
        "{}|{}|{}",
        restore_umlauts(&syllable.onset),
        restore_umlauts(&syllable.nucleus),
        restore_umlauts(&syllable.coda)
    )
}

/// Serialize a result for `--json` output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn format_violation(v: &Violation) -> String {
    let severity = match v.severity {
        ViolationSeverity::Error => "error",
        ViolationSeverity::Warning => "warning",
    };

    match &v.segment {
        Some(segment) => format!(
            "  {:<7} {} [{}]: {}",
            severity, v.constraint, segment, v.message
        ),
        None => format!("  {:<7} {}: {}", severity, v.constraint, v.message),
    }
}

/// Help text listing every command.
pub fn help_text() -> String {
    [
        "FinnSyll REPL Commands:",
        "  \\i <file>           Load and execute a file",
        "  config              Show the checker configuration",
        "  verbose             Toggle verbose mode",
        "  json                Toggle JSON output",
        "  help, \\h            Show this help",
        "  quit, \\q            Exit",
        "",
        "Analysis:",
        "  weights <syll>      Syllable weights, e.g. ka.lan -> L.H",
        "  sonority <syll>     Sonority profile, e.g. ka.lan -> kA.lAn",
        "  split <syllable>    Onset|nucleus|coda",
        "  check <word>        Check a word against every constraint",
        "  split-check <syll>  Check and score a syllabification",
        "  normalize <text>    Replace ä/ö with A/O",
        "  restore <text>      Replace A/O with ä/ö",
        "  <syll>              Profile a dotted syllabification",
        "  <word>              Same as check <word>",
    ]
    .join("\n")
}
