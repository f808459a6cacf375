//! The standard ratio metric set.
//!
//! This module provides the fixed vocabulary of derived metrics:
//!
//! - [`Metric`]: the eight standard ratio columns renderers may request

use serde::{Deserialize, Serialize};

/// A derived ratio metric from the standard set.
///
/// Renderers and aggregation callers name metrics from this set; the
/// enrichment step guarantees each of them is present on every enriched
/// record as a defined-or-undefined value.
///
/// # Examples
///
/// ```
/// use quotient_core::types::Metric;
///
/// let metric = Metric::NetMargin;
/// assert!(metric.is_percentage());
/// assert_eq!(metric.column(), "NetMargin");
///
/// assert_eq!(Metric::parse(" roa "), Some(Metric::ReturnOnAssets));
/// assert_eq!(Metric::parse("Turnover"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Net income as a share of revenue
    NetMargin,
    /// Gross profit as a share of revenue
    GrossMargin,
    /// Operating income as a share of revenue
    OperatingMargin,
    /// Net income relative to total assets
    ReturnOnAssets,
    /// Net income relative to total equity
    ReturnOnEquity,
    /// Current assets over current liabilities
    CurrentRatio,
    /// Current assets excluding inventory over current liabilities
    QuickRatio,
    /// Total debt over total equity
    DebtToEquity,
}

impl Metric {
    /// Returns all metrics in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::NetMargin,
            Self::GrossMargin,
            Self::OperatingMargin,
            Self::ReturnOnAssets,
            Self::ReturnOnEquity,
            Self::CurrentRatio,
            Self::QuickRatio,
            Self::DebtToEquity,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NetMargin => "Net Margin",
            Self::GrossMargin => "Gross Margin",
            Self::OperatingMargin => "Operating Margin",
            Self::ReturnOnAssets => "Return on Assets",
            Self::ReturnOnEquity => "Return on Equity",
            Self::CurrentRatio => "Current Ratio",
            Self::QuickRatio => "Quick Ratio",
            Self::DebtToEquity => "Debt to Equity",
        }
    }

    /// Returns the column header spelling used in tabular files.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::NetMargin => "NetMargin",
            Self::GrossMargin => "GrossMargin",
            Self::OperatingMargin => "OperatingMargin",
            Self::ReturnOnAssets => "ROA",
            Self::ReturnOnEquity => "ROE",
            Self::CurrentRatio => "CurrentRatio",
            Self::QuickRatio => "QuickRatio",
            Self::DebtToEquity => "DebtToEquity",
        }
    }

    /// Parses a metric from its column or human-readable spelling.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for anything outside the standard set.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::all().iter().copied().find(|metric| {
            needle.eq_ignore_ascii_case(metric.column())
                || needle.eq_ignore_ascii_case(metric.name())
        })
    }

    /// Returns true if this metric is conventionally rendered as a percentage.
    ///
    /// Margins and returns are percentages; the liquidity and leverage
    /// ratios are plain multiples.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::NetMargin
                | Self::GrossMargin
                | Self::OperatingMargin
                | Self::ReturnOnAssets
                | Self::ReturnOnEquity
        )
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_basics() {
        assert_eq!(Metric::NetMargin.name(), "Net Margin");
        assert_eq!(Metric::NetMargin.column(), "NetMargin");
        assert_eq!(Metric::ReturnOnAssets.column(), "ROA");
        assert_eq!(Metric::ReturnOnEquity.column(), "ROE");
    }

    #[test]
    fn test_metric_all() {
        let all = Metric::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Metric::NetMargin);
        assert_eq!(all[7], Metric::DebtToEquity);
    }

    #[test]
    fn test_metric_parse_column_spelling() {
        assert_eq!(Metric::parse("NetMargin"), Some(Metric::NetMargin));
        assert_eq!(Metric::parse("ROA"), Some(Metric::ReturnOnAssets));
        assert_eq!(Metric::parse("roe"), Some(Metric::ReturnOnEquity));
        assert_eq!(Metric::parse("  CurrentRatio  "), Some(Metric::CurrentRatio));
    }

    #[test]
    fn test_metric_parse_display_spelling() {
        assert_eq!(Metric::parse("Net Margin"), Some(Metric::NetMargin));
        assert_eq!(Metric::parse("return on equity"), Some(Metric::ReturnOnEquity));
    }

    #[test]
    fn test_metric_parse_rejects_unknown() {
        assert_eq!(Metric::parse("Turnover"), None);
        assert_eq!(Metric::parse(""), None);
        assert_eq!(Metric::parse("Debt"), None);
    }

    #[test]
    fn test_metric_percentage_classification() {
        assert!(Metric::NetMargin.is_percentage());
        assert!(Metric::ReturnOnAssets.is_percentage());
        assert!(!Metric::CurrentRatio.is_percentage());
        assert!(!Metric::DebtToEquity.is_percentage());
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(format!("{}", Metric::QuickRatio), "Quick Ratio");
        assert_eq!(format!("{}", Metric::ReturnOnAssets), "Return on Assets");
    }

    #[test]
    fn test_serde() {
        let metric = Metric::DebtToEquity;
        let json = serde_json::to_string(&metric).unwrap();
        let parsed: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metric);
    }
}
