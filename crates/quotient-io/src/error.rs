//! Error types for the file boundary.

use thiserror::Error;

/// Result type for data loading and persistence.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or writing statement tables.
///
/// The pure analytics layers never fail on bad data; anything malformed
/// is caught here at the boundary instead.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level error (unreadable file, ragged rows).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record with values the data model cannot hold.
    #[error("Malformed record at line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the source file.
        line: u64,
        /// What was wrong with the record.
        reason: String,
    },

    /// Two records with the same `(Company, Year)` identity.
    #[error("Duplicate record for '{company}' ({year})")]
    DuplicateKey {
        /// The company of the colliding records.
        company: String,
        /// The fiscal year of the colliding records.
        year: i32,
    },
}

impl DataError {
    /// Create a malformed record error.
    #[must_use]
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Create a duplicate key error.
    #[must_use]
    pub fn duplicate_key(company: impl Into<String>, year: i32) -> Self {
        Self::DuplicateKey {
            company: company.into(),
            year,
        }
    }
}
