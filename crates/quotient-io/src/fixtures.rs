//! Synthetic statement tables for demos, tests, and benchmarks.
//!
//! Generation is deterministic: the same configuration and seed always
//! produce the same table, so downstream results are reproducible across
//! runs and machines. The generated magnitudes follow plausible
//! accounting shape (costs below revenue, operating income below gross
//! profit, equity as assets net of current liabilities) so every
//! standard ratio is defined on generated data.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quotient_core::types::FinancialRecord;

/// Configuration for the synthetic table generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Companies to generate, as `(name, industry)` pairs.
    pub companies: Vec<(String, String)>,
    /// First fiscal year, inclusive.
    pub start_year: i32,
    /// Last fiscal year, inclusive.
    pub end_year: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            companies: vec![
                ("Northwind Traders".to_string(), "Retail".to_string()),
                ("Borealis Energy".to_string(), "Energy".to_string()),
                ("Cobalt Systems".to_string(), "Technology".to_string()),
                ("Meridian Apparel".to_string(), "Retail".to_string()),
            ],
            start_year: 2015,
            end_year: 2024,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration: four companies across three
    /// industries, fiscal years 2015 through 2024.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fiscal year range, both ends inclusive.
    #[must_use]
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Replaces the company list with the given `(name, industry)` pairs.
    #[must_use]
    pub fn with_companies(mut self, companies: Vec<(String, String)>) -> Self {
        self.companies = companies;
        self
    }

    /// Appends one company to the list.
    #[must_use]
    pub fn add_company(mut self, name: impl Into<String>, industry: impl Into<String>) -> Self {
        self.companies.push((name.into(), industry.into()));
        self
    }

    /// Number of fiscal years in the configured range.
    #[must_use]
    pub fn year_count(&self) -> usize {
        if self.end_year < self.start_year {
            0
        } else {
            (self.end_year - self.start_year + 1) as usize
        }
    }

    /// Number of records a generation run will produce.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.companies.len() * self.year_count()
    }
}

/// Generates a synthetic raw statement table.
///
/// Each company-year draws an integer revenue in `40_000..150_000` and
/// derives the remaining magnitudes as randomized fractions of it:
/// costs at 55-75% of revenue, operating income at 50-90% of gross
/// profit, net income at 60-85% of operating income, total assets at
/// 1.1-1.5x revenue, with current assets, inventory, and current
/// liabilities as nested fractions and equity as assets net of current
/// liabilities. All amounts are rounded to two decimal places. Gross
/// profit and the debt columns are left absent.
#[must_use]
pub fn generate_records(config: &GeneratorConfig, seed: u64) -> Vec<FinancialRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(config.record_count());

    for (company, industry) in &config.companies {
        for year in config.start_year..=config.end_year {
            let revenue = rng.gen_range(40_000i64..150_000) as f64;
            let cogs = revenue * rng.gen_range(0.55..0.75);
            let operating_income = (revenue - cogs) * rng.gen_range(0.5..0.9);
            let net_income = operating_income * rng.gen_range(0.6..0.85);
            let total_assets = revenue * rng.gen_range(1.1..1.5);
            let current_assets = total_assets * rng.gen_range(0.25..0.4);
            let inventory = current_assets * rng.gen_range(0.15..0.3);
            let current_liabilities = total_assets * rng.gen_range(0.1..0.25);
            let total_equity = total_assets - current_liabilities;

            records.push(
                FinancialRecord::new(company.clone(), year, industry.clone())
                    .with_revenue(amount(revenue))
                    .with_cogs(amount(cogs))
                    .with_operating_income(amount(operating_income))
                    .with_net_income(amount(net_income))
                    .with_total_assets(amount(total_assets))
                    .with_current_assets(amount(current_assets))
                    .with_inventory(amount(inventory))
                    .with_current_liabilities(amount(current_liabilities))
                    .with_total_equity(amount(total_equity)),
            );
        }
    }

    debug!("generated {} records with seed {}", records.len(), seed);
    records
}

fn amount(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}
