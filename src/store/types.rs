use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Identity of one merged row: a company observed in a calendar year.
///
/// The `Ord` derive (company first, then year) is what gives the final
/// result its reproducible enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanyYearKey {
    pub company_id: String,
    pub year: i32,
}

impl CompanyYearKey {
    pub fn new(company_id: impl Into<String>, year: i32) -> Self {
        Self {
            company_id: company_id.into(),
            year,
        }
    }
}

impl fmt::Display for CompanyYearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.company_id, self.year)
    }
}

/// Sparse numeric fields of a single surviving row.
pub type FieldMap = HashMap<String, f64>;

/// One dataset after temporal deduplication: exactly one row per key.
pub type DatasetTable = HashMap<CompanyYearKey, FieldMap>;

/// All loaded datasets by name. Built once per run, read-only afterwards.
pub type Datasets = HashMap<String, DatasetTable>;

/// Computed metric values for a single key.
pub type ResultSet = HashMap<String, f64>;

/// The output of a scoring run, sorted by company then year.
pub type FinalResult = BTreeMap<CompanyYearKey, ResultSet>;
