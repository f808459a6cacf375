//! Row filtering by year, industry, and company.

use quotient_core::types::EnrichedRecord;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing a table.
///
/// Each criterion is optional: an unset criterion matches every row for
/// that dimension, and the provided criteria combine with AND semantics.
/// An empty result set is a valid outcome, not a failure.
///
/// # Examples
///
/// ```
/// use quotient_analytics::filter::RecordFilter;
///
/// let filter = RecordFilter::new()
///     .with_years([2023, 2024])
///     .with_industries(["Energy"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Years to keep. `None` keeps all years.
    pub years: Option<Vec<i32>>,

    /// Industries to keep. `None` keeps all industries.
    pub industries: Option<Vec<String>>,

    /// Companies to keep. `None` keeps all companies.
    pub companies: Option<Vec<String>>,
}

impl RecordFilter {
    /// Creates a filter that matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to the given years.
    #[must_use]
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = Some(years.into_iter().collect());
        self
    }

    /// Restricts the filter to the given industries.
    #[must_use]
    pub fn with_industries<I, S>(mut self, industries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industries = Some(industries.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the filter to the given companies.
    #[must_use]
    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = Some(companies.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.years.is_none() && self.industries.is_none() && self.companies.is_none()
    }

    /// Returns true if the record matches every provided criterion.
    #[must_use]
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if let Some(years) = &self.years {
            if !years.contains(&record.year()) {
                return false;
            }
        }

        if let Some(industries) = &self.industries {
            if !industries.iter().any(|industry| industry == record.industry()) {
                return false;
            }
        }

        if let Some(companies) = &self.companies {
            if !companies.iter().any(|company| company == record.company()) {
                return false;
            }
        }

        true
    }

    /// Returns the matching subset as a fresh table, preserving row order.
    #[must_use]
    pub fn apply(&self, records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
