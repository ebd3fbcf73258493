pub mod registry;
pub mod types;

pub use registry::LoaderRegistry;
pub use types::{CompanyYearKey, DatasetTable, Datasets, FieldMap, FinalResult, ResultSet};
