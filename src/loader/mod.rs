//! Dataset loading: format-specific readers plus the temporal merge that
//! collapses duplicate (company, year) rows down to the latest observation.

use std::collections::HashMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::store::types::{CompanyYearKey, DatasetTable, FieldMap};

pub mod csv;
pub mod json;

pub use self::csv::CsvLoader;
pub use self::json::JsonLoader;

/// A reader for one on-disk dataset format.
///
/// Implementations consume a whole file and return the merged table; a
/// returned error is fatal for the surrounding run (row-scoped problems
/// are handled inside the loader and never surface here).
pub trait DatasetLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<DatasetTable, LoadError>;
}

/// Fatal loading failures. Row-scoped problems (bad dates, non-numeric
/// cells) are skipped with a warning instead of being reported here.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read data directory: {0}")]
    ReadDir(#[source] std::io::Error),
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed delimited input: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required columns (company_id, date)")]
    MissingColumns,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid year {0:?}")]
    InvalidYear(String),
}

/// Parses either a full calendar date (`YYYY-MM-DD`) or a bare year.
///
/// A bare year is normalized to January 1st so that later rows carrying a
/// real date for the same year always win the merge.
pub fn parse_date_or_year(raw: &str) -> Result<NaiveDate, DateParseError> {
    if raw.contains('-') {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| DateParseError::InvalidDate(raw.to_string()));
    }

    let year: i32 = raw
        .parse()
        .map_err(|_| DateParseError::InvalidYear(raw.to_string()))?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| DateParseError::InvalidYear(raw.to_string()))
}

/// Accumulator for the temporal merge.
///
/// Keyed by (company, year of the row's date); keeps the row with the
/// latest full date. On an exact date tie the first row seen wins, which
/// makes the outcome depend on input order — callers that care must
/// pre-sort their input.
#[derive(Debug, Default)]
pub struct MergeTable {
    rows: HashMap<CompanyYearKey, (NaiveDate, FieldMap)>,
}

impl MergeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a row to the merge; it survives only if it is the first for
    /// its key or strictly later than the current survivor.
    pub fn insert(&mut self, company_id: &str, date: NaiveDate, fields: FieldMap) {
        let key = CompanyYearKey::new(company_id, date.year());
        match self.rows.get(&key) {
            Some((existing, _)) if date <= *existing => {}
            _ => {
                self.rows.insert(key, (date, fields));
            }
        }
    }

    /// Drops the tie-breaking dates and yields the final table.
    pub fn into_table(self) -> DatasetTable {
        self.rows
            .into_iter()
            .map(|(key, (_, fields))| (key, fields))
            .collect()
    }
}
