//! Subcommand handlers. Each mutation re-renders its whole widget.

pub mod config;
pub mod students;
pub mod todo;
pub mod user;

use listdeck_core::KeyValueStore;
use std::io::{self, BufRead, Write};

pub type Store = Box<dyn KeyValueStore>;

/// Asks `question` on stdout and reads a `y`/`yes` answer from stdin.
///
/// Anything else, including a read failure, declines.
pub fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
