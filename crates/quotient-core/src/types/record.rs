//! Raw financial statement records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{QuotientError, QuotientResult};

/// One row of a financial statement table: a single company-year observation.
///
/// Identity fields are always present; every magnitude is optional so that
/// "field absent" and "field present but zero" stay distinguishable. All
/// magnitudes are currency amounts in the reporting currency of the source
/// table.
///
/// A table is a collection of records uniquely keyed by `(company, year)`;
/// the uniqueness invariant is enforced at the loading boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Company name.
    pub company: String,

    /// Fiscal year of the statement.
    pub year: i32,

    /// Industry the company belongs to.
    pub industry: String,

    /// Total revenue.
    pub revenue: Option<Decimal>,

    /// Cost of goods sold.
    pub cogs: Option<Decimal>,

    /// Gross profit. Usually derived (`revenue - cogs`) but kept here
    /// because source tables may already carry the column; enrichment
    /// preserves an existing value untouched.
    pub gross_profit: Option<Decimal>,

    /// Operating income.
    pub operating_income: Option<Decimal>,

    /// Net income.
    pub net_income: Option<Decimal>,

    /// Total assets.
    pub total_assets: Option<Decimal>,

    /// Current assets.
    pub current_assets: Option<Decimal>,

    /// Inventory.
    pub inventory: Option<Decimal>,

    /// Current liabilities.
    pub current_liabilities: Option<Decimal>,

    /// Total shareholder equity.
    pub total_equity: Option<Decimal>,

    /// Short-term debt.
    pub short_term_debt: Option<Decimal>,

    /// Long-term debt.
    pub long_term_debt: Option<Decimal>,
}

impl FinancialRecord {
    /// Creates a new record with the given identity and no magnitudes.
    #[must_use]
    pub fn new(company: impl Into<String>, year: i32, industry: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            year,
            industry: industry.into(),
            revenue: None,
            cogs: None,
            gross_profit: None,
            operating_income: None,
            net_income: None,
            total_assets: None,
            current_assets: None,
            inventory: None,
            current_liabilities: None,
            total_equity: None,
            short_term_debt: None,
            long_term_debt: None,
        }
    }

    /// Creates a new record builder.
    #[must_use]
    pub fn builder() -> FinancialRecordBuilder {
        FinancialRecordBuilder::new()
    }

    /// Returns the `(company, year)` identity of this record.
    #[must_use]
    pub fn key(&self) -> (&str, i32) {
        (&self.company, self.year)
    }

    /// Sets the revenue.
    #[must_use]
    pub fn with_revenue(mut self, revenue: Decimal) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Sets the cost of goods sold.
    #[must_use]
    pub fn with_cogs(mut self, cogs: Decimal) -> Self {
        self.cogs = Some(cogs);
        self
    }

    /// Sets the gross profit.
    #[must_use]
    pub fn with_gross_profit(mut self, gross_profit: Decimal) -> Self {
        self.gross_profit = Some(gross_profit);
        self
    }

    /// Sets the operating income.
    #[must_use]
    pub fn with_operating_income(mut self, operating_income: Decimal) -> Self {
        self.operating_income = Some(operating_income);
        self
    }

    /// Sets the net income.
    #[must_use]
    pub fn with_net_income(mut self, net_income: Decimal) -> Self {
        self.net_income = Some(net_income);
        self
    }

    /// Sets the total assets.
    #[must_use]
    pub fn with_total_assets(mut self, total_assets: Decimal) -> Self {
        self.total_assets = Some(total_assets);
        self
    }

    /// Sets the current assets.
    #[must_use]
    pub fn with_current_assets(mut self, current_assets: Decimal) -> Self {
        self.current_assets = Some(current_assets);
        self
    }

    /// Sets the inventory.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Decimal) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Sets the current liabilities.
    #[must_use]
    pub fn with_current_liabilities(mut self, current_liabilities: Decimal) -> Self {
        self.current_liabilities = Some(current_liabilities);
        self
    }

    /// Sets the total equity.
    #[must_use]
    pub fn with_total_equity(mut self, total_equity: Decimal) -> Self {
        self.total_equity = Some(total_equity);
        self
    }

    /// Sets the short-term debt.
    #[must_use]
    pub fn with_short_term_debt(mut self, short_term_debt: Decimal) -> Self {
        self.short_term_debt = Some(short_term_debt);
        self
    }

    /// Sets the long-term debt.
    #[must_use]
    pub fn with_long_term_debt(mut self, long_term_debt: Decimal) -> Self {
        self.long_term_debt = Some(long_term_debt);
        self
    }
}

/// Builder for constructing a validated [`FinancialRecord`].
#[derive(Debug, Clone, Default)]
pub struct FinancialRecordBuilder {
    company: Option<String>,
    year: Option<i32>,
    industry: Option<String>,
    revenue: Option<Decimal>,
    cogs: Option<Decimal>,
    gross_profit: Option<Decimal>,
    operating_income: Option<Decimal>,
    net_income: Option<Decimal>,
    total_assets: Option<Decimal>,
    current_assets: Option<Decimal>,
    inventory: Option<Decimal>,
    current_liabilities: Option<Decimal>,
    total_equity: Option<Decimal>,
    short_term_debt: Option<Decimal>,
    long_term_debt: Option<Decimal>,
}

impl FinancialRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the fiscal year.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the industry.
    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sets the revenue.
    #[must_use]
    pub fn revenue(mut self, revenue: Decimal) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Sets the cost of goods sold.
    #[must_use]
    pub fn cogs(mut self, cogs: Decimal) -> Self {
        self.cogs = Some(cogs);
        self
    }

    /// Sets the gross profit.
    #[must_use]
    pub fn gross_profit(mut self, gross_profit: Decimal) -> Self {
        self.gross_profit = Some(gross_profit);
        self
    }

    /// Sets the operating income.
    #[must_use]
    pub fn operating_income(mut self, operating_income: Decimal) -> Self {
        self.operating_income = Some(operating_income);
        self
    }

    /// Sets the net income.
    #[must_use]
    pub fn net_income(mut self, net_income: Decimal) -> Self {
        self.net_income = Some(net_income);
        self
    }

    /// Sets the total assets.
    #[must_use]
    pub fn total_assets(mut self, total_assets: Decimal) -> Self {
        self.total_assets = Some(total_assets);
        self
    }

    /// Sets the current assets.
    #[must_use]
    pub fn current_assets(mut self, current_assets: Decimal) -> Self {
        self.current_assets = Some(current_assets);
        self
    }

    /// Sets the inventory.
    #[must_use]
    pub fn inventory(mut self, inventory: Decimal) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Sets the current liabilities.
    #[must_use]
    pub fn current_liabilities(mut self, current_liabilities: Decimal) -> Self {
        self.current_liabilities = Some(current_liabilities);
        self
    }

    /// Sets the total equity.
    #[must_use]
    pub fn total_equity(mut self, total_equity: Decimal) -> Self {
        self.total_equity = Some(total_equity);
        self
    }

    /// Sets the short-term debt.
    #[must_use]
    pub fn short_term_debt(mut self, short_term_debt: Decimal) -> Self {
        self.short_term_debt = Some(short_term_debt);
        self
    }

    /// Sets the long-term debt.
    #[must_use]
    pub fn long_term_debt(mut self, long_term_debt: Decimal) -> Self {
        self.long_term_debt = Some(long_term_debt);
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    ///
    /// Returns an error if an identity field is missing or empty, or if a
    /// raw magnitude is negative. Gross profit is exempt from the
    /// non-negativity check: a company can sell below cost.
    pub fn build(self) -> QuotientResult<FinancialRecord> {
        let company = self
            .company
            .ok_or_else(|| QuotientError::missing_field("company"))?;

        let year = self
            .year
            .ok_or_else(|| QuotientError::missing_field("year"))?;

        let industry = self
            .industry
            .ok_or_else(|| QuotientError::missing_field("industry"))?;

        if company.trim().is_empty() {
            return Err(QuotientError::missing_field("company"));
        }

        if industry.trim().is_empty() {
            return Err(QuotientError::missing_field("industry"));
        }

        let magnitudes = [
            ("Revenue", self.revenue),
            ("COGS", self.cogs),
            ("OperatingIncome", self.operating_income),
            ("NetIncome", self.net_income),
            ("TotalAssets", self.total_assets),
            ("CurrentAssets", self.current_assets),
            ("Inventory", self.inventory),
            ("CurrentLiabilities", self.current_liabilities),
            ("TotalEquity", self.total_equity),
            ("ShortTermDebt", self.short_term_debt),
            ("LongTermDebt", self.long_term_debt),
        ];

        for (field, value) in magnitudes {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(QuotientError::invalid_record(
                        &company,
                        year,
                        format!("{field} cannot be negative"),
                    ));
                }
            }
        }

        Ok(FinancialRecord {
            company,
            year,
            industry,
            revenue: self.revenue,
            cogs: self.cogs,
            gross_profit: self.gross_profit,
            operating_income: self.operating_income,
            net_income: self.net_income,
            total_assets: self.total_assets,
            current_assets: self.current_assets,
            inventory: self.inventory,
            current_liabilities: self.current_liabilities,
            total_equity: self.total_equity,
            short_term_debt: self.short_term_debt,
            long_term_debt: self.long_term_debt,
        })
    }
}
