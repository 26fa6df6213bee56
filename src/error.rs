//! Error types for demanda operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;
use std::path::PathBuf;

/// Main error type for demanda operations.
///
/// Covers the demand store (missing file, malformed rows, failed
/// rewrites) and the recurrence engine (out-of-range days, degenerate
/// regression input).
///
/// # Examples
///
/// ```
/// use demanda::error::DemandaError;
///
/// let err = DemandaError::InvalidDay { day: 9, len: 4 };
/// assert!(err.to_string().contains("day 9"));
/// ```
#[derive(Debug)]
pub enum DemandaError {
    /// The backing demand file does not exist.
    StoreNotFound(PathBuf),

    /// Day index outside the stored 1..=len range.
    InvalidDay {
        /// Requested 1-indexed day
        day: usize,
        /// Number of stored days
        len: usize,
    },

    /// Too few historical rows for the requested computation.
    InsufficientData {
        /// Rows available
        rows: usize,
        /// Rows required
        required: usize,
    },

    /// A row in the backing file could not be parsed.
    Malformed {
        /// 1-based line number in the file
        line: usize,
        /// Parse failure description
        message: String,
    },

    /// Rewriting the backing file failed; the in-memory table kept the
    /// mutation and is now out of sync with disk.
    Persistence {
        /// Path of the backing file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// I/O error (permission denied, unexpected EOF, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DemandaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandaError::StoreNotFound(path) => {
                write!(f, "Demand file not found: {}", path.display())
            }
            DemandaError::InvalidDay { day, len } => {
                write!(f, "Invalid day {day}: store holds {len} day(s)")
            }
            DemandaError::InsufficientData { rows, required } => {
                write!(
                    f,
                    "Insufficient data: {rows} row(s) stored, {required} required"
                )
            }
            DemandaError::Malformed { line, message } => {
                write!(f, "Malformed demand file at line {line}: {message}")
            }
            DemandaError::Persistence { path, source } => {
                write!(
                    f,
                    "Failed to persist demand file {}: {source} (in-memory table kept the change)",
                    path.display()
                )
            }
            DemandaError::Io(e) => write!(f, "I/O error: {e}"),
            DemandaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DemandaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemandaError::Io(e) => Some(e),
            DemandaError::Persistence { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DemandaError {
    fn from(err: std::io::Error) -> Self {
        DemandaError::Io(err)
    }
}

impl From<&str> for DemandaError {
    fn from(msg: &str) -> Self {
        DemandaError::Other(msg.to_string())
    }
}

impl From<String> for DemandaError {
    fn from(msg: String) -> Self {
        DemandaError::Other(msg)
    }
}

impl DemandaError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::Other(format!(
            "dimension mismatch: {context} expected {expected}, got {actual}"
        ))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for DemandaError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<DemandaError> for &str {
    fn eq(&self, other: &DemandaError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DemandaError>;
