//! # Quotient Core
//!
//! Core types and safe arithmetic for the Quotient financial statement
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Quotient:
//!
//! - **Types**: `FinancialRecord`, `EnrichedRecord`, `RatioSet`, `Metric`
//! - **Safe division**: element-wise division where a missing operand or a
//!   zero denominator is an explicit undefined value, never an error
//!
//! ## Design Philosophy
//!
//! - **Explicit optionality**: "field absent" and "field present but zero"
//!   stay distinguishable everywhere
//! - **No sentinels**: undefined is `None`, never NaN or infinity
//! - **Pure functions**: transformations take their inputs explicitly and
//!   return fresh values; nothing ambient, nothing mutated
//!
//! ## Example
//!
//! ```rust
//! use quotient_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = FinancialRecord::new("Acme Industrial", 2024, "Industrials")
//!     .with_revenue(dec!(1000))
//!     .with_cogs(dec!(400));
//!
//! // Revenue over COGS: defined because both operands are present.
//! assert_eq!(safe_div(record.revenue, record.cogs), Some(2.5));
//!
//! // A missing operand is undefined, not an error.
//! assert_eq!(safe_div(record.net_income, record.revenue), None);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod divide;
pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{QuotientError, QuotientResult};

// Re-export main types
pub use types::{EnrichedRecord, FinancialRecord, FinancialRecordBuilder, Metric, RatioSet};

// Re-export safe division
pub use divide::{safe_div, safe_div_by, safe_div_series};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use quotient_core::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{QuotientError, QuotientResult};

    // Record types
    pub use crate::types::{
        EnrichedRecord, FinancialRecord, FinancialRecordBuilder, Metric, RatioSet,
    };

    // Safe division
    pub use crate::divide::{safe_div, safe_div_by, safe_div_series};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
