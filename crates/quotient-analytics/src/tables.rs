//! Per-company ratio tables, for tabular renderers.

use quotient_core::types::{EnrichedRecord, RatioSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One year of a company's table columns.
///
/// Carries the two headline raw lines next to the derived columns so
/// renderers can show scale alongside the ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioRow {
    /// Fiscal year.
    pub year: i32,

    /// Reported revenue, when present.
    pub revenue: Option<Decimal>,

    /// Reported net income, when present.
    pub net_income: Option<Decimal>,

    /// Total debt for the year.
    pub debt: Decimal,

    /// The derived ratio columns.
    pub ratios: RatioSet,
}

/// Returns the selected company's rows sorted by year ascending.
///
/// An unknown company yields an empty table, the same contract as a
/// filter with no matching rows.
#[must_use]
pub fn company_ratio_table(records: &[EnrichedRecord], company: &str) -> Vec<RatioRow> {
    let mut rows: Vec<RatioRow> = records
        .iter()
        .filter(|record| record.company() == company)
        .map(|record| RatioRow {
            year: record.year(),
            revenue: record.record.revenue,
            net_income: record.record.net_income,
            debt: record.debt,
            ratios: record.ratios,
        })
        .collect();
    rows.sort_by_key(|row| row.year);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use approx::assert_relative_eq;
    use quotient_core::types::FinancialRecord;
    use rust_decimal_macros::dec;

    fn create_test_table() -> Vec<EnrichedRecord> {
        enrich(&[
            FinancialRecord::new("Acme", 2024, "Industrials")
                .with_revenue(dec!(120))
                .with_net_income(dec!(30))
                .with_short_term_debt(dec!(5)),
            FinancialRecord::new("Borealis", 2023, "Energy").with_revenue(dec!(200)),
            FinancialRecord::new("Acme", 2022, "Industrials")
                .with_revenue(dec!(100))
                .with_net_income(dec!(10)),
        ])
    }

    #[test]
    fn test_rows_sorted_by_year() {
        let table = create_test_table();
        let rows = company_ratio_table(&table, "Acme");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2022);
        assert_eq!(rows[1].year, 2024);
        assert_relative_eq!(rows[0].ratios.net_margin.unwrap(), 0.1);
        assert_relative_eq!(rows[1].ratios.net_margin.unwrap(), 0.25);
        assert_eq!(rows[1].debt, dec!(5));
    }

    #[test]
    fn test_rows_include_revenue_and_net_income() {
        let table = create_test_table();
        let rows = company_ratio_table(&table, "Acme");

        assert_eq!(rows[0].revenue, Some(dec!(100)));
        assert_eq!(rows[0].net_income, Some(dec!(10)));
        assert_eq!(rows[1].revenue, Some(dec!(120)));
        assert_eq!(rows[1].net_income, Some(dec!(30)));

        // A missing raw line stays absent rather than defaulting.
        let rows = company_ratio_table(&table, "Borealis");
        assert_eq!(rows[0].revenue, Some(dec!(200)));
        assert_eq!(rows[0].net_income, None);
    }

    #[test]
    fn test_unknown_company_is_empty() {
        let table = create_test_table();
        assert!(company_ratio_table(&table, "Nimbus").is_empty());
    }
}
