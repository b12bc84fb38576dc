//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escapes when stdout is
//! not a terminal.

use owo_colors::OwoColorize;

/// Check mark for completed actions
pub const CHECK: &str = "✓";

/// Semantic colors for CLI output
pub trait Stylize: std::fmt::Display {
    /// De-emphasized text
    fn muted(&self) -> String {
        self.to_string().dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.to_string().bold().to_string()
    }

    /// Branch names, counts
    fn accent(&self) -> String {
        self.to_string().cyan().to_string()
    }

    /// Completed actions
    fn success(&self) -> String {
        self.to_string().green().to_string()
    }

    /// Recoverable problems
    fn warn(&self) -> String {
        self.to_string().yellow().to_string()
    }

    /// Fatal problems
    fn error(&self) -> String {
        self.to_string().red().bold().to_string()
    }
}

impl<T: std::fmt::Display + ?Sized> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// List bullet
pub fn arrow() -> String {
    "→".muted()
}

/// Spinner used while waiting on GitHub
pub fn spinner_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}
