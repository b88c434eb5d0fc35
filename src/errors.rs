//! # Merge Error Types
//!
//! Structured errors for the two fatal failure classes of a merge run.
//! Per-cell data-quality problems are not errors: the tolerant numeric
//! parser absorbs them as 0.0 (see `csv_import::parse_value`).

/// Fatal errors raised by a merge run.
#[derive(Debug, Clone)]
pub enum MergeError {
    /// An input source is missing, unreadable, or structurally invalid.
    /// Raised before any output file is touched.
    Load(String),
    /// Writing the backup, store, or report failed. The message states
    /// whether the backup already exists as a recovery copy.
    Write(String),
}

impl std::fmt::Display for MergeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeError::Load(msg) => write!(f, "Load error: {msg}"),
            MergeError::Write(msg) => write!(f, "Write error: {msg}"),
        }
    }
}

impl std::error::Error for MergeError {}
