//! Delimited dataset loader.
//!
//! Expects a header row containing `company_id` and `date`; every other
//! column is treated as an optional numeric field. Empty and non-numeric
//! cells are simply absent from the merged row.

use std::path::Path;

use tracing::warn;

use super::{parse_date_or_year, DatasetLoader, LoadError, MergeTable};
use crate::store::types::{DatasetTable, FieldMap};

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvLoader;

impl DatasetLoader for CsvLoader {
    fn load(&self, path: &Path) -> Result<DatasetTable, LoadError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let idx_company = headers.iter().position(|h| h == "company_id");
        let idx_date = headers.iter().position(|h| h == "date");
        let (idx_company, idx_date) = match (idx_company, idx_date) {
            (Some(c), Some(d)) => (c, d),
            _ => return Err(LoadError::MissingColumns),
        };

        let mut merge = MergeTable::new();

        for record in reader.records() {
            // A malformed record is a reader failure, not a row skip.
            let record = record?;

            let company_id = record.get(idx_company).unwrap_or_default();
            let raw_date = record.get(idx_date).unwrap_or_default();

            let date = match parse_date_or_year(raw_date) {
                Ok(date) => date,
                Err(err) => {
                    warn!(company_id, raw_date, error = %err, "skipping row with unparsable date");
                    continue;
                }
            };

            let mut fields = FieldMap::new();
            for (i, column) in headers.iter().enumerate() {
                if i == idx_company || i == idx_date {
                    continue;
                }
                let cell = record.get(i).unwrap_or_default();
                if cell.is_empty() {
                    continue;
                }
                if let Ok(value) = cell.parse::<f64>() {
                    fields.insert(column.to_string(), value);
                }
            }

            merge.insert(company_id, date, fields);
        }

        Ok(merge.into_table())
    }
}
