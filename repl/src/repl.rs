//! Core REPL state and execution.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use finnsyll_constraint::{CheckerConfig, ConstraintChecker};
use finnsyll_core::{replace_umlauts, restore_umlauts, Word};
use finnsyll_syllable::{
    sonority_profile, split_syllable, word_weights, Syllabification, DELIMITER,
};

use crate::format::{format_report, format_split, format_violations, help_text, to_json};

/// REPL state.
pub struct Repl {
    checker: ConstraintChecker,
    verbose: bool,
    json: bool,
}

impl Repl {
    /// Create a new REPL instance with the default checker.
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            checker: ConstraintChecker::new(config),
            verbose: false,
            json: false,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Emit results as JSON objects.
    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    /// Replace the checker configuration with one read from a JSON file.
    pub fn load_config(&mut self, path: &Path) -> Result<String, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        let config = CheckerConfig::from_json(&content).map_err(|e| e.to_string())?;

        let enabled = config.enabled.len();
        self.checker = ConstraintChecker::new(config);

        Ok(format!("Config loaded: {} constraints enabled", enabled))
    }

    /// Execute a command or analyze a bare word.
    pub fn execute(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with("--") {
            return Ok(String::new());
        }

        let (command, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (trimmed, ""),
        };

        match command.to_lowercase().as_str() {
            "weights" => self.weights(required(command, arg)?),
            "sonority" => self.sonority(required(command, arg)?),
            "split" => self.split(required(command, arg)?),
            "check" => self.check(required(command, arg)?),
            "split-check" => self.split_check(required(command, arg)?),
            "normalize" => self.convert(required(command, arg)?, replace_umlauts),
            "restore" => self.convert(required(command, arg)?, restore_umlauts),
            "config" => self.checker.config().to_json().map_err(|e| e.to_string()),
            "help" | "\\h" => Ok(help_text()),
            "\\i" => self
                .run_file(Path::new(required(command, arg)?))
                .map(|()| String::new()),
            "verbose" => {
                self.verbose = !self.verbose;
                Ok(format!("Verbose mode: {}", self.verbose))
            }
            "json" => {
                self.json = !self.json;
                Ok(format!("JSON output: {}", self.json))
            }
            _ if arg.is_empty() && trimmed.contains(DELIMITER) => self.profile(trimmed),
            _ if arg.is_empty() => self.check(trimmed),
            _ => Err(format!("Unknown command: {}", command)),
        }
    }

    /// Run a file.
    pub fn run_file(&mut self, path: &Path) -> Result<(), String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

        if self.verbose {
            println!("Loading: {}", path.display());
        }

        self.run_script(&content)
    }

    /// Run a script, one command or word per line.
    ///
    /// A failing line is reported and the script continues; the error of
    /// the first failing line is returned at the end.
    pub fn run_script(&mut self, content: &str) -> Result<(), String> {
        let mut first_error = None;

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if matches!(trimmed, "quit" | "exit" | "\\q") {
                break;
            }

            match self.execute(trimmed) {
                Ok(output) if output.is_empty() => {}
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error at line {}: {}", idx + 1, e);
                    first_error.get_or_insert_with(|| format!("line {}: {}", idx + 1, e));
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Run the interactive REPL.
    pub fn interactive(&mut self) {
        println!("FinnSyll REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands, 'quit' to exit");
        println!();

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("finnsyll> ");
            if stdout.flush().is_err() {
                break;
            }

            // Read line
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break, // EOF
                Ok(_) => {}
            }

            let trimmed = line.trim();
            if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit" | "\\q") {
                break;
            }

            match self.execute(trimmed) {
                Ok(output) if output.is_empty() => {}
                Ok(output) => println!("{}", output),
                Err(e) => println!("Error: {}", e),
            }
        }

        println!("Goodbye!");
    }

    // ========== Commands ==========

    fn weights(&self, syllabification: &str) -> Result<String, String> {
        let weights = word_weights(syllabification);
        if self.json {
            return to_json(&json!({ "syllabification": syllabification, "weights": weights }));
        }
        Ok(weights)
    }

    fn sonority(&self, syllabification: &str) -> Result<String, String> {
        let sonority = sonority_profile(syllabification);
        if self.json {
            return to_json(&json!({ "syllabification": syllabification, "sonority": sonority }));
        }
        Ok(sonority)
    }

    fn split(&self, syllable: &str) -> Result<String, String> {
        let parts = split_syllable(syllable).map_err(|e| e.to_string())?;
        let weight = parts.weight();

        if self.json {
            return to_json(&json!({
                "onset": restore_umlauts(&parts.onset),
                "nucleus": restore_umlauts(&parts.nucleus),
                "coda": restore_umlauts(&parts.coda),
                "weight": weight.to_string(),
            }));
        }

        let split = format_split(&parts);
        if self.verbose {
            return Ok(format!("{}  weight: {}", split, weight));
        }
        Ok(split)
    }

    fn check(&self, raw: &str) -> Result<String, String> {
        let word = Word::parse(raw);
        let violations = self.checker.check_word(&word);

        if self.json {
            return to_json(&json!({ "word": word.restored(), "violations": violations }));
        }

        let report = format_violations(&violations);
        if self.verbose {
            return Ok(format!("normalized: {}\n{}", word, report));
        }
        Ok(report)
    }

    fn split_check(&self, syllabification: &str) -> Result<String, String> {
        let report = self
            .checker
            .check_syllabification(&Syllabification::parse(syllabification));

        if self.json {
            return to_json(&report);
        }
        Ok(format_report(&report))
    }

    /// Weights, sonority and constraint score of one syllabification.
    fn profile(&self, syllabification: &str) -> Result<String, String> {
        let weights = word_weights(syllabification);
        let sonority = sonority_profile(syllabification);
        let report = self
            .checker
            .check_syllabification(&Syllabification::parse(syllabification));

        if self.json {
            return to_json(&json!({
                "syllabification": syllabification,
                "weights": weights,
                "sonority": sonority,
                "report": report,
            }));
        }

        Ok(format!(
            "weights:  {}\nsonority: {}\n{}",
            weights,
            sonority,
            format_report(&report)
        ))
    }

    fn convert(&self, text: &str, f: fn(&str) -> String) -> Result<String, String> {
        let output = f(text);
        if self.json {
            return to_json(&json!({ "input": text, "output": output }));
        }
        Ok(output)
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn required<'a>(command: &str, arg: &'a str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("{} requires an argument", command))
    } else {
        Ok(arg)
    }
}
