//! Error types for StackCheck core.

use std::{error::Error, fmt, io};

/// Error type for StackCheck core operations.
///
/// Missing artifacts and malformed dashboard JSON are scored, not raised; the
/// variants here are the conditions that abort a grading run.
#[derive(Debug)]
pub enum StackCheckError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A rubric broke one of its own invariants.
    Rubric(String),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for StackCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Rubric(message) => write!(f, "rubric invariant violated: {message}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StackCheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Rubric(_) | Self::Other(_) => None,
        }
    }
}

impl From<io::Error> for StackCheckError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for StackCheck core.
pub type Result<T> = std::result::Result<T, StackCheckError>;
