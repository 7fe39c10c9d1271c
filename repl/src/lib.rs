//! FinnSyll REPL library - Read-Eval-Print-Loop for Finnish phonotactics.
//!
//! - `repl`: Core REPL state and command execution
//! - `format`: Output formatting utilities

mod format;
mod repl;

pub use format::{format_report, format_split, format_violations, help_text, to_json};
pub use repl::Repl;
