//! Colored terminal output utilities.

use console::{Style, Term};
use henry_storage::SkippedFile;

/// Terminal output formatter.
///
/// Status messages go to stderr so stdout carries only document listings.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print the version banner (cyan bold).
    pub(crate) fn banner(&self, version: &str) {
        self.styled(&self.cyan_bold, &format!("henry v{version}"));
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a file dropped from the listing (yellow).
    pub(crate) fn skipped(&self, file: &SkippedFile) {
        self.styled(&self.yellow, &skipped_line(file));
    }

    /// Print the closing document and skip counts (green).
    pub(crate) fn summary(&self, documents: usize, skipped: usize) {
        self.styled(&self.green, &summary_line(documents, skipped));
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn skipped_line(file: &SkippedFile) -> String {
    format!("Skipped {}: {}", file.path.display(), file.reason)
}

fn summary_line(documents: usize, skipped: usize) -> String {
    let noun = if documents == 1 { "document" } else { "documents" };
    format!("Listed {documents} {noun}, {skipped} skipped")
}
