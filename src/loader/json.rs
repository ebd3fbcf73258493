//! JSON dataset loader.
//!
//! Consumes an array of row objects with `company_id`, `date` and a fixed
//! set of optional numeric fields. An absent field and an explicit `null`
//! are equivalent: neither contributes to the merged row.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::{parse_date_or_year, DatasetLoader, LoadError, MergeTable};
use crate::store::types::{DatasetTable, FieldMap};

#[derive(Debug, Deserialize)]
struct RawRow {
    company_id: String,
    date: String,
    #[serde(default)]
    dis_1: Option<f64>,
    #[serde(default)]
    dis_2: Option<f64>,
    #[serde(default)]
    dis_3: Option<f64>,
    #[serde(default)]
    dis_4: Option<f64>,
}

impl RawRow {
    fn fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        let columns = [
            ("dis_1", self.dis_1),
            ("dis_2", self.dis_2),
            ("dis_3", self.dis_3),
            ("dis_4", self.dis_4),
        ];
        for (name, value) in columns {
            if let Some(value) = value {
                fields.insert(name.to_string(), value);
            }
        }
        fields
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

impl DatasetLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<DatasetTable, LoadError> {
        let file = File::open(path)?;
        let rows: Vec<RawRow> = serde_json::from_reader(BufReader::new(file))?;

        let mut merge = MergeTable::new();

        for row in &rows {
            let date = match parse_date_or_year(&row.date) {
                Ok(date) => date,
                Err(err) => {
                    warn!(
                        company_id = %row.company_id,
                        raw_date = %row.date,
                        error = %err,
                        "skipping row with unparsable date"
                    );
                    continue;
                }
            };

            merge.insert(&row.company_id, date, row.fields());
        }

        Ok(merge.into_table())
    }
}
