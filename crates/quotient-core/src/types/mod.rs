//! Core types for financial statement analytics.
//!
//! This module provides the data model shared across the workspace:
//!
//! - [`FinancialRecord`]: one raw company-year statement row
//! - [`EnrichedRecord`]: a record plus its derived columns
//! - [`RatioSet`]: the derived ratio columns, each defined-or-undefined
//! - [`Metric`]: the standard set of requestable ratio metrics

mod enriched;
mod metric;
mod record;

// Re-export all types
pub use enriched::{EnrichedRecord, RatioSet};
pub use metric::Metric;
pub use record::{FinancialRecord, FinancialRecordBuilder};
