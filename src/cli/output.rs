//! Colored terminal output.

use console::{Style, Term};
use std::io;

/// Writes user-facing progress to the terminal, honoring verbose and quiet modes.
///
/// Errors and warnings go to stderr; everything else to stdout.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Plain informational line.
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stdout().write_line(message)
    }

    /// Line shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        Term::stdout().write_line(&Style::new().dim().apply_to(message).to_string())
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stdout().write_line(&format!("{} {}", Style::new().cyan().apply_to("→"), message))
    }

    /// Completed step.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stdout().write_line(&format!(
            "{} {}",
            Style::new().green().bold().apply_to("✓"),
            message
        ))
    }

    /// Warning, suppressed in quiet mode.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stderr().write_line(&format!(
            "{} {}",
            Style::new().yellow().bold().apply_to("warning:"),
            message
        ))
    }

    /// Error, always shown.
    pub fn error(&self, message: &str) -> io::Result<()> {
        Term::stderr().write_line(&format!(
            "{} {}",
            Style::new().red().bold().apply_to("error:"),
            message
        ))
    }

    /// Bold section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stdout().write_line(&Style::new().bold().apply_to(title).to_string())
    }

    /// Indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Term::stdout().write_line(&format!("   {}", message))
    }
}
