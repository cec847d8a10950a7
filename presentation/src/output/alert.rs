//! Visitor alerts rendered on the terminal

use colored::Colorize;
use std::sync::Mutex;
use toolbar_application::AlertPort;

/// [`AlertPort`] that prints alerts to stderr and keeps them for the report.
#[derive(Default)]
pub struct ConsoleAlert {
    quiet: bool,
    shown: Mutex<Vec<String>>,
}

impl ConsoleAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record alerts without printing them (for JSON output).
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }
}

impl AlertPort for ConsoleAlert {
    fn alert(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "Alert:".yellow().bold(), message);
        }
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(message.to_string());
        }
    }
}
