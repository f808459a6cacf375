//! Per-company metric series over time, for trend renderers.

use quotient_core::types::{EnrichedRecord, Metric};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// One year's observation in a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Fiscal year.
    pub year: i32,

    /// Metric value for that year; `None` where it was undefined.
    pub value: Option<f64>,
}

/// A company's values for one metric, ordered by year ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Company the series belongs to.
    pub company: String,

    /// The metric plotted.
    pub metric: Metric,

    /// Observations sorted by year ascending.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Returns true if the company had no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points with a defined value.
    #[must_use]
    pub fn defined_points(&self) -> usize {
        self.points.iter().filter(|point| point.value.is_some()).count()
    }
}

/// Builds one trend series per requested company.
///
/// Series come back in the requested company order. A company with no
/// rows in the table yields an empty series; that is a plottable "no
/// data" outcome, not an error.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptySelection`] when `companies` is empty:
/// a trend view with nothing selected is a usage mistake, not an empty
/// chart.
pub fn metric_trends(
    records: &[EnrichedRecord],
    companies: &[String],
    metric: Metric,
) -> AnalyticsResult<Vec<TrendSeries>> {
    if companies.is_empty() {
        return Err(AnalyticsError::empty_selection("companies"));
    }

    Ok(companies
        .iter()
        .map(|company| {
            let mut points: Vec<TrendPoint> = records
                .iter()
                .filter(|record| record.company() == company)
                .map(|record| TrendPoint {
                    year: record.year(),
                    value: record.metric(metric),
                })
                .collect();
            points.sort_by_key(|point| point.year);

            TrendSeries {
                company: company.clone(),
                metric,
                points,
            }
        })
        .collect())
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
            FinancialRecord::new("Acme", 2023, "Industrials")
                .with_revenue(dec!(100))
                .with_net_income(dec!(10)),
            FinancialRecord::new("Borealis", 2022, "Energy")
                .with_revenue(dec!(200))
                .with_net_income(dec!(50)),
            // Deliberately out of year order.
            FinancialRecord::new("Acme", 2021, "Industrials")
                .with_revenue(dec!(100))
                .with_net_income(dec!(20)),
            FinancialRecord::new("Acme", 2022, "Industrials").with_net_income(dec!(15)),
        ])
    }

    #[test]
    fn test_series_sorted_by_year() {
        let table = create_test_table();
        let series =
            metric_trends(&table, &["Acme".to_string()], Metric::NetMargin).unwrap();

        assert_eq!(series.len(), 1);
        let years: Vec<i32> = series[0].points.iter().map(|point| point.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);

        assert_relative_eq!(series[0].points[0].value.unwrap(), 0.2);
        // 2022 is missing revenue, so the point exists but is undefined.
        assert!(series[0].points[1].value.is_none());
        assert_relative_eq!(series[0].points[2].value.unwrap(), 0.1);
        assert_eq!(series[0].defined_points(), 2);
    }

    #[test]
    fn test_requested_order_preserved() {
        let table = create_test_table();
        let companies = vec!["Borealis".to_string(), "Acme".to_string()];
        let series = metric_trends(&table, &companies, Metric::NetMargin).unwrap();

        assert_eq!(series[0].company, "Borealis");
        assert_eq!(series[1].company, "Acme");
    }

    #[test]
    fn test_unknown_company_yields_empty_series() {
        let table = create_test_table();
        let series =
            metric_trends(&table, &["Nimbus".to_string()], Metric::NetMargin).unwrap();

        assert_eq!(series.len(), 1);
        assert!(series[0].is_empty());
        assert_eq!(series[0].defined_points(), 0);
    }

    #[test]
    fn test_empty_selection_fails_fast() {
        let table = create_test_table();
        let err = metric_trends(&table, &[], Metric::NetMargin).unwrap_err();
        assert_eq!(err.to_string(), "No companies selected");
    }

    #[test]
    fn test_series_serde_roundtrip() {
        let table = create_test_table();
        let series = metric_trends(&table, &["Acme".to_string()], Metric::NetMargin).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let parsed: Vec<TrendSeries> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, series);
    }
}
