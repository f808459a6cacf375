//! Enriched records carrying derived ratio columns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FinancialRecord, Metric};

/// The derived ratio columns for one record.
///
/// Every field is optional: `None` is the explicit "undefined" marker for
/// a ratio whose operands were missing or whose denominator was zero. A
/// NaN or infinity never appears here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,

    /// Current assets excluding inventory over current liabilities.
    pub quick_ratio: Option<f64>,

    /// Gross profit as a share of revenue.
    pub gross_margin: Option<f64>,

    /// Operating income as a share of revenue.
    pub operating_margin: Option<f64>,

    /// Net income as a share of revenue.
    pub net_margin: Option<f64>,

    /// Net income relative to total assets.
    pub return_on_assets: Option<f64>,

    /// Net income relative to total equity.
    pub return_on_equity: Option<f64>,

    /// Total debt over total equity.
    pub debt_to_equity: Option<f64>,
}

impl RatioSet {
    /// Creates an empty ratio set with every value undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the given metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::NetMargin => self.net_margin,
            Metric::GrossMargin => self.gross_margin,
            Metric::OperatingMargin => self.operating_margin,
            Metric::ReturnOnAssets => self.return_on_assets,
            Metric::ReturnOnEquity => self.return_on_equity,
            Metric::CurrentRatio => self.current_ratio,
            Metric::QuickRatio => self.quick_ratio,
            Metric::DebtToEquity => self.debt_to_equity,
        }
    }

    /// Returns the number of defined ratios.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        Metric::all()
            .iter()
            .filter(|metric| self.get(**metric).is_some())
            .count()
    }
}

/// A financial record together with its derived columns.
///
/// Produced by the enrichment step. The embedded record is a copy of the
/// input with `gross_profit` filled in where it was derivable, so feeding
/// embedded records through enrichment again reproduces the same output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The underlying raw record (with `gross_profit` resolved).
    pub record: FinancialRecord,

    /// Total debt: short-term plus long-term, absent components counted
    /// as zero. Always defined, unlike the ratios.
    pub debt: Decimal,

    /// The derived ratio columns.
    pub ratios: RatioSet,
}

impl EnrichedRecord {
    /// Returns the company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.record.company
    }

    /// Returns the fiscal year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.record.year
    }

    /// Returns the industry.
    #[must_use]
    pub fn industry(&self) -> &str {
        &self.record.industry
    }

    /// Returns the `(company, year)` identity of this record.
    #[must_use]
    pub fn key(&self) -> (&str, i32) {
        self.record.key()
    }

    /// Returns the value of the given metric for this record.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.ratios.get(metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_enriched() -> EnrichedRecord {
        EnrichedRecord {
            record: FinancialRecord::new("Acme", 2024, "Industrials")
                .with_revenue(dec!(100))
                .with_net_income(dec!(20)),
            debt: Decimal::ZERO,
            ratios: RatioSet {
                net_margin: Some(0.2),
                debt_to_equity: Some(0.0),
                ..RatioSet::default()
            },
        }
    }

    #[test]
    fn test_ratio_set_get() {
        let ratios = RatioSet {
            current_ratio: Some(2.0),
            net_margin: Some(0.2),
            ..RatioSet::default()
        };
        assert_eq!(ratios.get(Metric::CurrentRatio), Some(2.0));
        assert_eq!(ratios.get(Metric::NetMargin), Some(0.2));
        assert_eq!(ratios.get(Metric::QuickRatio), None);
    }

    #[test]
    fn test_ratio_set_defined_count() {
        assert_eq!(RatioSet::new().defined_count(), 0);

        let ratios = RatioSet {
            current_ratio: Some(2.0),
            quick_ratio: Some(1.6),
            ..RatioSet::default()
        };
        assert_eq!(ratios.defined_count(), 2);
    }

    #[test]
    fn test_enriched_accessors() {
        let enriched = create_test_enriched();
        assert_eq!(enriched.company(), "Acme");
        assert_eq!(enriched.year(), 2024);
        assert_eq!(enriched.industry(), "Industrials");
        assert_eq!(enriched.key(), ("Acme", 2024));
        assert_eq!(enriched.metric(Metric::NetMargin), Some(0.2));
        assert_eq!(enriched.metric(Metric::ReturnOnEquity), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let enriched = create_test_enriched();
        let json = serde_json::to_string(&enriched).unwrap();
        let parsed: EnrichedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, enriched);
    }
}
