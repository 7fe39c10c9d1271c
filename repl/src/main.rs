//! FinnSyll REPL - analyze Finnish words and syllabifications.
//!
//! This is the entry point for the `finnsyll` binary.

use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use finnsyll_repl::Repl;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut repl = Repl::new();
    let mut ran_files = false;

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => repl.set_verbose(true),
            "--json" => repl.set_json(true),
            "--config" => {
                let Some(path) = iter.next() else {
                    eprintln!("--config requires a file");
                    std::process::exit(2);
                };
                if let Err(e) = repl.load_config(Path::new(path)) {
                    eprintln!("Error loading config {}: {}", path, e);
                    std::process::exit(1);
                }
            }
            _ => {
                ran_files = true;
                if let Err(e) = repl.run_file(Path::new(arg)) {
                    eprintln!("Error loading {}: {}", arg, e);
                    std::process::exit(1);
                }
            }
        }
    }

    // Enter interactive mode if stdin is a terminal
    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl.interactive();
    } else if !ran_files {
        // Only read from stdin pipe if no files were passed
        let mut input = String::new();
        if let Err(e) = stdin.lock().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        if let Err(e) = repl.run_script(&input) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
