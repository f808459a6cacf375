//! Delimited-file loading and persistence for statement tables.
//!
//! The input format is a header row plus one row per company-year.
//! Headers and fields are trimmed of surrounding whitespace, `Year` is
//! coerced to an integer, and empty numeric cells load as absent values.
//! The `(Company, Year)` uniqueness invariant of the data model is
//! enforced here; past this point tables are well-typed and the analytics
//! layers never have to defend against corruption.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quotient_core::types::{EnrichedRecord, FinancialRecord};

use crate::error::{DataError, DataResult};

/// CSV row for a raw statement table.
#[derive(Debug, Serialize, Deserialize)]
struct RawRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Revenue")]
    revenue: Option<Decimal>,
    #[serde(rename = "COGS")]
    cogs: Option<Decimal>,
    #[serde(rename = "GrossProfit")]
    gross_profit: Option<Decimal>,
    #[serde(rename = "OperatingIncome")]
    operating_income: Option<Decimal>,
    #[serde(rename = "NetIncome")]
    net_income: Option<Decimal>,
    #[serde(rename = "TotalAssets")]
    total_assets: Option<Decimal>,
    #[serde(rename = "CurrentAssets")]
    current_assets: Option<Decimal>,
    #[serde(rename = "Inventory")]
    inventory: Option<Decimal>,
    #[serde(rename = "CurrentLiabilities")]
    current_liabilities: Option<Decimal>,
    #[serde(rename = "TotalEquity")]
    total_equity: Option<Decimal>,
    #[serde(rename = "ShortTermDebt")]
    short_term_debt: Option<Decimal>,
    #[serde(rename = "LongTermDebt")]
    long_term_debt: Option<Decimal>,
}

impl From<RawRow> for FinancialRecord {
    fn from(row: RawRow) -> Self {
        Self {
            company: row.company,
            year: row.year,
            industry: row.industry,
            revenue: row.revenue,
            cogs: row.cogs,
            gross_profit: row.gross_profit,
            operating_income: row.operating_income,
            net_income: row.net_income,
            total_assets: row.total_assets,
            current_assets: row.current_assets,
            inventory: row.inventory,
            current_liabilities: row.current_liabilities,
            total_equity: row.total_equity,
            short_term_debt: row.short_term_debt,
            long_term_debt: row.long_term_debt,
        }
    }
}

impl From<&FinancialRecord> for RawRow {
    fn from(record: &FinancialRecord) -> Self {
        Self {
            company: record.company.clone(),
            year: record.year,
            industry: record.industry.clone(),
            revenue: record.revenue,
            cogs: record.cogs,
            gross_profit: record.gross_profit,
            operating_income: record.operating_income,
            net_income: record.net_income,
            total_assets: record.total_assets,
            current_assets: record.current_assets,
            inventory: record.inventory,
            current_liabilities: record.current_liabilities,
            total_equity: record.total_equity,
            short_term_debt: record.short_term_debt,
            long_term_debt: record.long_term_debt,
        }
    }
}

/// CSV row for an enriched table: every raw column plus the derived ones.
/// Undefined ratios serialize as empty cells.
#[derive(Debug, Serialize)]
struct EnrichedRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Revenue")]
    revenue: Option<Decimal>,
    #[serde(rename = "COGS")]
    cogs: Option<Decimal>,
    #[serde(rename = "GrossProfit")]
    gross_profit: Option<Decimal>,
    #[serde(rename = "OperatingIncome")]
    operating_income: Option<Decimal>,
    #[serde(rename = "NetIncome")]
    net_income: Option<Decimal>,
    #[serde(rename = "TotalAssets")]
    total_assets: Option<Decimal>,
    #[serde(rename = "CurrentAssets")]
    current_assets: Option<Decimal>,
    #[serde(rename = "Inventory")]
    inventory: Option<Decimal>,
    #[serde(rename = "CurrentLiabilities")]
    current_liabilities: Option<Decimal>,
    #[serde(rename = "TotalEquity")]
    total_equity: Option<Decimal>,
    #[serde(rename = "ShortTermDebt")]
    short_term_debt: Option<Decimal>,
    #[serde(rename = "LongTermDebt")]
    long_term_debt: Option<Decimal>,
    #[serde(rename = "Debt")]
    debt: Decimal,
    #[serde(rename = "CurrentRatio")]
    current_ratio: Option<f64>,
    #[serde(rename = "QuickRatio")]
    quick_ratio: Option<f64>,
    #[serde(rename = "GrossMargin")]
    gross_margin: Option<f64>,
    #[serde(rename = "OperatingMargin")]
    operating_margin: Option<f64>,
    #[serde(rename = "NetMargin")]
    net_margin: Option<f64>,
    #[serde(rename = "ROA")]
    return_on_assets: Option<f64>,
    #[serde(rename = "ROE")]
    return_on_equity: Option<f64>,
    #[serde(rename = "DebtToEquity")]
    debt_to_equity: Option<f64>,
}

impl From<&EnrichedRecord> for EnrichedRow {
    fn from(enriched: &EnrichedRecord) -> Self {
        let record = &enriched.record;
        Self {
            company: record.company.clone(),
            year: record.year,
            industry: record.industry.clone(),
            revenue: record.revenue,
            cogs: record.cogs,
            gross_profit: record.gross_profit,
            operating_income: record.operating_income,
            net_income: record.net_income,
            total_assets: record.total_assets,
            current_assets: record.current_assets,
            inventory: record.inventory,
            current_liabilities: record.current_liabilities,
            total_equity: record.total_equity,
            short_term_debt: record.short_term_debt,
            long_term_debt: record.long_term_debt,
            debt: enriched.debt,
            current_ratio: enriched.ratios.current_ratio,
            quick_ratio: enriched.ratios.quick_ratio,
            gross_margin: enriched.ratios.gross_margin,
            operating_margin: enriched.ratios.operating_margin,
            net_margin: enriched.ratios.net_margin,
            return_on_assets: enriched.ratios.return_on_assets,
            return_on_equity: enriched.ratios.return_on_equity,
            debt_to_equity: enriched.ratios.debt_to_equity,
        }
    }
}

/// Loads a raw statement table from a delimited file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record cannot be
/// parsed into the data model, or two records share a `(Company, Year)`
/// identity.
pub fn load_records(path: impl AsRef<Path>) -> DataResult<Vec<FinancialRecord>> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let records = collect_records(reader)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads a raw statement table from any reader.
///
/// Same contract as [`load_records`]; useful for in-memory sources.
///
/// # Errors
///
/// See [`load_records`].
pub fn read_records<R: Read>(source: R) -> DataResult<Vec<FinancialRecord>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    collect_records(reader)
}

/// Writes a raw statement table with the standard header spellings.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_records(path: impl AsRef<Path>, records: &[FinancialRecord]) -> DataResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(RawRow::from(record))?;
    }
    writer.flush()?;

    debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Writes an enriched table: every raw column plus `Debt` and the
/// standard ratio columns, with undefined ratios as empty cells.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_enriched(path: impl AsRef<Path>, records: &[EnrichedRecord]) -> DataResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(EnrichedRow::from(record))?;
    }
    writer.flush()?;

    debug!("wrote {} enriched records to {}", records.len(), path.display());
    Ok(())
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> DataResult<Vec<FinancialRecord>> {
    let mut records = Vec::new();
    let mut seen: HashSet<(String, i32)> = HashSet::new();

    for result in reader.deserialize() {
        let row: RawRow = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            DataError::malformed(line, e.to_string())
        })?;
        let record = FinancialRecord::from(row);

        if !seen.insert((record.company.clone(), record.year)) {
            return Err(DataError::duplicate_key(&record.company, record.year));
        }

        records.push(record);
    }

    Ok(records)
}
