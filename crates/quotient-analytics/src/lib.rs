//! # Quotient Analytics
//!
//! Ratio derivation, filtering, and aggregation for financial statement
//! tables.
//!
//! This crate is the working layer of Quotient: it takes raw
//! [`FinancialRecord`](quotient_core::types::FinancialRecord) tables and
//! produces the enriched, filtered, and aggregated views that chart and
//! table renderers consume.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every operation takes its table explicitly and
//!   returns a fresh one; nothing is cached, nothing is mutated
//! - **Undefined over error**: missing data flows through as undefined
//!   values; only usage mistakes (unknown metric, empty mandatory
//!   selection) fail, and they fail fast
//! - **Deterministic output**: rankings and series carry documented,
//!   input-order-independent orderings
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient_analytics::prelude::*;
//!
//! let raw = vec![
//!     FinancialRecord::new("Acme Industrial", 2024, "Industrials")
//!         .with_revenue(dec!(1000))
//!         .with_cogs(dec!(400))
//!         .with_net_income(dec!(150)),
//! ];
//!
//! // Derive the ratio columns.
//! let table = enrich(&raw);
//! assert_eq!(table[0].record.gross_profit, Some(dec!(600)));
//! assert_eq!(table[0].metric(Metric::NetMargin), Some(0.15));
//!
//! // Narrow and rank.
//! let recent = RecordFilter::new().with_years([2024]).apply(&table);
//! let ranked = industry_comparison(&recent, Metric::NetMargin);
//! assert_eq!(ranked.top().unwrap().label, "Industrials");
//! ```
//!
//! ## Module Overview
//!
//! - [`enrich`] - Ratio enrichment (the derived columns of the data model)
//! - [`filter`] - Row filtering by year, industry, company
//! - [`aggregate`] - Grouped metric means ranked descending
//! - [`trends`] - Per-company metric series for trend renderers
//! - [`tables`] - Per-company ratio tables for tabular renderers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod aggregate;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod tables;
pub mod trends;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export main operations
pub use aggregate::{group_means, industry_comparison, resolve_metric, GroupMean, MetricComparison};
pub use enrich::{enrich, enrich_record};
pub use filter::RecordFilter;
pub use tables::{company_ratio_table, RatioRow};
pub use trends::{metric_trends, TrendPoint, TrendSeries};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use quotient_analytics::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Enrichment
    pub use crate::enrich::{enrich, enrich_record};

    // Filtering
    pub use crate::filter::RecordFilter;

    // Aggregation
    pub use crate::aggregate::{
        group_means, industry_comparison, resolve_metric, GroupMean, MetricComparison,
    };

    // Renderer views
    pub use crate::tables::{company_ratio_table, RatioRow};
    pub use crate::trends::{metric_trends, TrendPoint, TrendSeries};

    // Re-export commonly used types from quotient-core
    pub use quotient_core::types::{EnrichedRecord, FinancialRecord, Metric, RatioSet};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
