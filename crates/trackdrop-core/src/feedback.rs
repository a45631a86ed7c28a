//! User-facing feedback channel.
//!
//! Feedback is distinct from diagnostic logging: these lines are the
//! product's output, printed unconditionally for the user. Three severities
//! exist; info and warning live here, fatal is an [`crate::Error`] printed
//! by the top-level handler.

use colored::Colorize;

/// Trait for user-facing feedback.
/// This trait allows for capturing output in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Print an informational key/value line.
    fn info(&self, key: &str, value: &str);

    /// Print a non-fatal warning.
    fn warning(&self, msg: &str);
}

/// Default reporter printing coloured lines to the terminal.
///
/// Info lines go to stdout, warnings to stderr, matching what a user piping
/// `trackdrop settings` into another tool would expect.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, key: &str, value: &str) {
        println!("{} {}", format!("{key}:").cyan(), value);
    }

    fn warning(&self, msg: &str) {
        eprintln!("{} {}", "Warning:".yellow().bold(), msg);
    }
}
