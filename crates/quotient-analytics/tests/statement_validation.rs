//! Validation tests against hand-computed statement arithmetic.
//!
//! A single fiscal year is worked through on paper and every derived
//! column is pinned to its exact expected value. The reference
//! statements: revenue 100, COGS 40, operating income 30, net income
//! 20, total assets 200, current assets 50, inventory 10, current
//! liabilities 25, total equity 150. Expected derivations: gross profit
//! 60, current ratio 2.0, quick ratio 1.6, gross margin 0.6, operating
//! margin 0.3, net margin 0.2, ROA 0.1, ROE 0.1333.., debt 0, debt to
//! equity 0.0.

use approx::assert_relative_eq;
use quotient_analytics::prelude::*;
use rust_decimal_macros::dec;

// =============================================================================
// REFERENCE STATEMENTS
// =============================================================================

fn reference_statements() -> FinancialRecord {
    FinancialRecord::new("A", 2020, "Industrials")
        .with_revenue(dec!(100))
        .with_cogs(dec!(40))
        .with_operating_income(dec!(30))
        .with_net_income(dec!(20))
        .with_total_assets(dec!(200))
        .with_current_assets(dec!(50))
        .with_inventory(dec!(10))
        .with_current_liabilities(dec!(25))
        .with_total_equity(dec!(150))
}

// =============================================================================
// DERIVED COLUMN VALUES
// =============================================================================

#[test]
fn test_gross_profit_derivation() {
    let enriched = enrich_record(&reference_statements());
    assert_eq!(enriched.record.gross_profit, Some(dec!(60)));
}

#[test]
fn test_liquidity_ratios() {
    let ratios = enrich_record(&reference_statements()).ratios;

    // 50 / 25 and (50 - 10) / 25.
    assert_relative_eq!(ratios.current_ratio.unwrap(), 2.0);
    assert_relative_eq!(ratios.quick_ratio.unwrap(), 1.6, max_relative = 1e-12);
}

#[test]
fn test_margins() {
    let ratios = enrich_record(&reference_statements()).ratios;

    assert_relative_eq!(ratios.gross_margin.unwrap(), 0.6, max_relative = 1e-12);
    assert_relative_eq!(ratios.operating_margin.unwrap(), 0.3, max_relative = 1e-12);
    assert_relative_eq!(ratios.net_margin.unwrap(), 0.2, max_relative = 1e-12);
}

#[test]
fn test_returns() {
    let ratios = enrich_record(&reference_statements()).ratios;

    assert_relative_eq!(ratios.return_on_assets.unwrap(), 0.1, max_relative = 1e-12);
    // 20 / 150 repeats; compare against the rational value.
    assert_relative_eq!(
        ratios.return_on_equity.unwrap(),
        2.0 / 15.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_debt_free_leverage() {
    let enriched = enrich_record(&reference_statements());

    // No debt lines at all still means a defined, zero debt column.
    assert_eq!(enriched.debt, dec!(0));
    assert_eq!(enriched.ratios.debt_to_equity, Some(0.0));
}

#[test]
fn test_every_standard_metric_defined() {
    let enriched = enrich_record(&reference_statements());

    assert_eq!(enriched.ratios.defined_count(), Metric::all().len());
    for metric in Metric::all() {
        assert_eq!(enriched.metric(*metric), enriched.ratios.get(*metric));
    }
}

// =============================================================================
// VARIATIONS ON THE REFERENCE STATEMENTS
// =============================================================================

#[test]
fn test_zero_current_liabilities_undefines_liquidity_only() {
    let record = reference_statements().with_current_liabilities(dec!(0));
    let ratios = enrich_record(&record).ratios;

    assert!(ratios.current_ratio.is_none());
    assert!(ratios.quick_ratio.is_none());

    // Every other column is untouched.
    assert_relative_eq!(ratios.gross_margin.unwrap(), 0.6, max_relative = 1e-12);
    assert_relative_eq!(ratios.net_margin.unwrap(), 0.2, max_relative = 1e-12);
    assert_relative_eq!(ratios.return_on_assets.unwrap(), 0.1, max_relative = 1e-12);
    assert_eq!(ratios.debt_to_equity, Some(0.0));
}

#[test]
fn test_reported_gross_profit_wins_over_derivation() {
    let record = reference_statements().with_gross_profit(dec!(55));
    let enriched = enrich_record(&record);

    assert_eq!(enriched.record.gross_profit, Some(dec!(55)));
    assert_relative_eq!(enriched.ratios.gross_margin.unwrap(), 0.55, max_relative = 1e-12);
}

#[test]
fn test_debt_lines_sum_into_leverage() {
    let record = reference_statements()
        .with_short_term_debt(dec!(10))
        .with_long_term_debt(dec!(30));
    let enriched = enrich_record(&record);

    assert_eq!(enriched.debt, dec!(40));
    // 40 / 150 repeats; compare against the rational value.
    assert_relative_eq!(
        enriched.ratios.debt_to_equity.unwrap(),
        4.0 / 15.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_single_debt_line_still_counts() {
    let record = reference_statements().with_long_term_debt(dec!(30));
    let enriched = enrich_record(&record);

    assert_eq!(enriched.debt, dec!(30));
    assert_relative_eq!(
        enriched.ratios.debt_to_equity.unwrap(),
        0.2,
        max_relative = 1e-12
    );
}

#[test]
fn test_missing_revenue_undefines_margins_only() {
    let mut record = reference_statements();
    record.revenue = None;
    let ratios = enrich_record(&record).ratios;

    assert!(ratios.gross_margin.is_none());
    assert!(ratios.operating_margin.is_none());
    assert!(ratios.net_margin.is_none());

    assert_relative_eq!(ratios.current_ratio.unwrap(), 2.0);
    assert_relative_eq!(ratios.return_on_assets.unwrap(), 0.1, max_relative = 1e-12);
    assert_relative_eq!(
        ratios.return_on_equity.unwrap(),
        2.0 / 15.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_missing_equity_undefines_equity_ratios_only() {
    let mut record = reference_statements();
    record.total_equity = None;
    let ratios = enrich_record(&record).ratios;

    assert!(ratios.return_on_equity.is_none());
    assert!(ratios.debt_to_equity.is_none());

    assert_relative_eq!(ratios.return_on_assets.unwrap(), 0.1, max_relative = 1e-12);
    assert_relative_eq!(ratios.net_margin.unwrap(), 0.2, max_relative = 1e-12);
}

#[test]
fn test_ratios_are_scale_invariant() {
    let thousands = FinancialRecord::new("A", 2020, "Industrials")
        .with_revenue(dec!(100_000))
        .with_cogs(dec!(40_000))
        .with_operating_income(dec!(30_000))
        .with_net_income(dec!(20_000))
        .with_total_assets(dec!(200_000))
        .with_current_assets(dec!(50_000))
        .with_inventory(dec!(10_000))
        .with_current_liabilities(dec!(25_000))
        .with_total_equity(dec!(150_000));

    let reference = enrich_record(&reference_statements());
    let scaled = enrich_record(&thousands);

    assert_eq!(reference.ratios, scaled.ratios);
}
