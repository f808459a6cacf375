//! # Quotient IO
//!
//! File-format support and synthetic fixtures for the Quotient
//! financial-ratio toolkit: loading and writing delimited statement
//! tables, and generating deterministic sample data.
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: files are checked once, on load.
//!   Malformed cells and duplicate `(Company, Year)` identities are
//!   rejected here so the analytics layers work on well-typed tables.
//! - **Absent, not zero**: an empty cell loads as an absent value and
//!   writes back out as an empty cell. No sentinel numbers.
//! - **Deterministic fixtures**: the generator is a pure function of
//!   its configuration and seed, so sample-driven results reproduce
//!   exactly across runs.
//!
//! ## Quick Start
//!
//! ```
//! use quotient_io::{generate_records, GeneratorConfig};
//!
//! let config = GeneratorConfig::new().with_years(2020, 2024);
//! let records = generate_records(&config, 42);
//!
//! assert_eq!(records.len(), config.record_count());
//! assert!(records.iter().all(|r| r.revenue.is_some()));
//! ```
//!
//! ## Module Overview
//!
//! - [`table`]: delimited-file loading and persistence for raw and
//!   enriched statement tables
//! - [`fixtures`]: synthetic statement tables from a seeded generator
//! - [`error`]: error types for file and format failures

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fixtures;
pub mod table;

// Error types
pub use error::{DataError, DataResult};

// Synthetic fixtures
pub use fixtures::{generate_records, GeneratorConfig};

// Table load and store
pub use table::{load_records, read_records, write_enriched, write_records};

/// Common imports for working with statement files and fixtures.
pub mod prelude {
    pub use crate::error::{DataError, DataResult};
    pub use crate::fixtures::{generate_records, GeneratorConfig};
    pub use crate::table::{load_records, read_records, write_enriched, write_records};

    pub use quotient_core::types::{EnrichedRecord, FinancialRecord};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let config = GeneratorConfig::new();
        assert_eq!(config.record_count(), 40);
        assert!(!generate_records(&config, 1).is_empty());
    }
}
