//! Error types for core record construction.
//!
//! This module defines the error types used throughout the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type QuotientResult<T> = Result<T, QuotientError>;

/// Errors that can occur while constructing or validating records.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum QuotientError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid record data.
    #[error("Invalid record '{company}' ({year}): {reason}")]
    InvalidRecord {
        /// The company the record belongs to.
        company: String,
        /// The fiscal year of the record.
        year: i32,
        /// The reason the record is invalid.
        reason: String,
    },
}

impl QuotientError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(
        company: impl Into<String>,
        year: i32,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            company: company.into(),
            year,
            reason: reason.into(),
        }
    }
}
