use std::fmt;
use tracing::debug;

/// Where in the source document a command came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub filename: String,
    pub line: usize,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Location {
        Location {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Append-only log of everything recoverable that went wrong during one
/// render session. Nothing is deduplicated.
#[derive(Debug, Default)]
pub struct Diagnostics {
    recorded: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    pub fn warn(&mut self, location: &Location, message: impl Into<String>) {
        self.record(Severity::Warning, location, message.into());
    }

    pub fn error(&mut self, location: &Location, message: impl Into<String>) {
        self.record(Severity::Error, location, message.into());
    }

    // Presenting diagnostics is the caller's job; the log only traces them.
    fn record(&mut self, severity: Severity, location: &Location, message: String) {
        debug!("{}: {}: {}", location, severity, message);
        self.recorded
            .push(Diagnostic {
                severity,
                location: location.clone(),
                message,
            });
    }

    /// Everything recorded, in the order it happened.
    pub fn recorded(&self) -> &[Diagnostic] {
        &self.recorded
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Warning)
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.recorded
            .iter()
            .filter(move |diagnostic| diagnostic.severity == severity)
    }

    /// Errors first, then warnings, each group in recording order.
    pub fn messages(&self) -> Vec<String> {
        self.errors()
            .chain(self.warnings())
            .map(ToString::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded
            .is_empty()
    }
}
