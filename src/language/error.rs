use std::{fmt, path::Path};

use crate::problem::Location;

/// Failure to read or decode a render job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Conditions that abort a render outright. Everything else is recorded as
/// a diagnostic and rendering carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    HeadingLevel(Location, u8),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::HeadingLevel(location, level) => write!(
                f,
                "{}: caption level too deep or unsupported: {}",
                location, level
            ),
        }
    }
}

impl std::error::Error for RenderError {}
