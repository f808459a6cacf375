//! Ratio enrichment: derives the standard ratio columns from raw records.
//!
//! Enrichment is pure and total. It never fails and never mutates its
//! input; a ratio whose operands are missing (or whose denominator is
//! zero) comes out undefined while every other ratio is still computed.

use quotient_core::divide::safe_div;
use quotient_core::types::{EnrichedRecord, FinancialRecord, RatioSet};
use rust_decimal::Decimal;

/// Enriches a single record with its derived columns.
///
/// Gross profit is derived (`revenue - cogs`) only when the input does not
/// already carry it and both operands are present; an existing value is
/// kept verbatim, so enriching an already-enriched record changes nothing.
///
/// Debt deliberately differs from the ratios: absent debt components count
/// as zero (a company reporting no debt has `debt = 0`), while a ratio
/// with a missing operand stays undefined rather than defaulting.
#[must_use]
pub fn enrich_record(record: &FinancialRecord) -> EnrichedRecord {
    let mut record = record.clone();

    if record.gross_profit.is_none() {
        if let (Some(revenue), Some(cogs)) = (record.revenue, record.cogs) {
            record.gross_profit = Some(revenue - cogs);
        }
    }

    // The component sum saturates at Decimal's ceiling rather than overflowing.
    let debt = record
        .short_term_debt
        .unwrap_or(Decimal::ZERO)
        .saturating_add(record.long_term_debt.unwrap_or(Decimal::ZERO));

    // Absent inventory counts as zero in the quick ratio numerator.
    let quick_assets = record
        .current_assets
        .map(|current| current - record.inventory.unwrap_or(Decimal::ZERO));

    let ratios = RatioSet {
        current_ratio: safe_div(record.current_assets, record.current_liabilities),
        quick_ratio: safe_div(quick_assets, record.current_liabilities),
        gross_margin: safe_div(record.gross_profit, record.revenue),
        operating_margin: safe_div(record.operating_income, record.revenue),
        net_margin: safe_div(record.net_income, record.revenue),
        return_on_assets: safe_div(record.net_income, record.total_assets),
        return_on_equity: safe_div(record.net_income, record.total_equity),
        debt_to_equity: safe_div(Some(debt), record.total_equity),
    };

    EnrichedRecord {
        record,
        debt,
        ratios,
    }
}

/// Enriches a whole table, preserving row order.
///
/// Returns a fresh table; the input is left untouched.
#[must_use]
pub fn enrich(records: &[FinancialRecord]) -> Vec<EnrichedRecord> {
    records.iter().map(enrich_record).collect()
}
