use owo_colors::OwoColorize;

use super::{Diagnostic, Severity};

/// Format a diagnostic as a single line for the terminal, severity coloured.
pub fn concise_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error"
            .bright_red()
            .to_string(),
        Severity::Warning => "warning"
            .bright_yellow()
            .to_string(),
    };

    format!(
        "{}: {}: {}",
        diagnostic
            .location
            .bright_blue(),
        severity,
        diagnostic
            .message
            .bold()
    )
}
