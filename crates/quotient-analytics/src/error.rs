//! Error types for table analytics.
//!
//! Missing data never surfaces here: absent fields and zero denominators
//! flow through as undefined values. These errors cover usage mistakes
//! only, and they fail the offending call fast.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during table analytics.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum AnalyticsError {
    /// A metric name outside the standard set was requested.
    #[error("Unknown metric: {name}")]
    UnknownMetric {
        /// The metric name as supplied by the caller.
        name: String,
    },

    /// A view requiring a non-empty selection was given an empty one.
    #[error("No {what} selected")]
    EmptySelection {
        /// What had to be selected.
        what: String,
    },
}

impl AnalyticsError {
    /// Create an unknown metric error.
    #[must_use]
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Self::UnknownMetric { name: name.into() }
    }

    /// Create an empty selection error.
    #[must_use]
    pub fn empty_selection(what: impl Into<String>) -> Self {
        Self::EmptySelection { what: what.into() }
    }
}
