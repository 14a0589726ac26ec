//! Terminal styling helpers
//!
//! Styles are always applied; `anstream` strips them when stdout is not a
//! terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark
pub const CHECK: &str = "✓";

/// Cross mark
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Bold text
    fn emphasis(&self) -> String;
    /// Highlighted names and numbers
    fn accent(&self) -> String;
    /// Positive result
    fn success(&self) -> String;
    /// Something needs attention
    fn warn(&self) -> String;
    /// Fatal error
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Yellow cross mark
pub fn cross() -> String {
    CROSS.warn()
}

/// Arrow used for in-progress steps
pub fn arrow() -> String {
    "→".accent()
}
