//! Maps file extensions to dataset loaders and drives whole-directory loads.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::loader::{CsvLoader, DatasetLoader, JsonLoader, LoadError};
use crate::store::types::Datasets;

/// Registry of dataset loaders keyed by file extension (without the dot).
///
/// The default registry understands `csv` and `json`; additional formats
/// can be plugged in with [`LoaderRegistry::register`] without touching
/// the directory-loading logic.
pub struct LoaderRegistry {
    loaders: HashMap<String, Box<dyn DatasetLoader>>,
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        let mut registry = Self {
            loaders: HashMap::new(),
        };
        registry.register("csv", Box::new(CsvLoader));
        registry.register("json", Box::new(JsonLoader));
        registry
    }
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overwrites the loader for an extension.
    pub fn register(&mut self, extension: &str, loader: Box<dyn DatasetLoader>) {
        self.loaders.insert(extension.to_string(), loader);
    }

    pub fn get(&self, extension: &str) -> Option<&dyn DatasetLoader> {
        self.loaders.get(extension).map(|l| l.as_ref())
    }

    /// Loads every recognized file in `dir` into a named dataset.
    ///
    /// Sub-directories and unsupported extensions are skipped; a loader
    /// failure or an unreadable directory aborts the whole batch. The
    /// dataset name is the file name with its extension stripped.
    pub fn load_dir(&self, dir: &Path) -> Result<Datasets, LoadError> {
        let entries = std::fs::read_dir(dir).map_err(LoadError::ReadDir)?;

        let mut datasets = Datasets::new();

        for entry in entries {
            let entry = entry.map_err(LoadError::ReadDir)?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            let Some(loader) = self.get(extension) else {
                warn!(file = %path.display(), extension, "skipping file with unsupported extension");
                continue;
            };

            let table = loader.load(&path)?;

            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            debug!(dataset = %name, rows = table.len(), "loaded dataset");
            datasets.insert(name, table);
        }

        Ok(datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::CompanyYearKey;
    use std::fs;

    #[test]
    fn test_load_dir_dispatches_by_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            dir.path().join("disclosure_data.csv"),
            "company_id,date,dis_1\n1000,2023-06-01,12.34\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("emissions_data.json"),
            r#"[{"company_id":"1000","date":"2023-06-01","dis_1":7.5}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a dataset").unwrap();
        fs::create_dir(dir.path().join("archive")).unwrap();

        let datasets = LoaderRegistry::new().load_dir(dir.path()).expect("load dir");

        assert_eq!(datasets.len(), 2);
        let key = CompanyYearKey::new("1000", 2023);
        assert_eq!(datasets["disclosure_data"][&key]["dis_1"], 12.34);
        assert_eq!(datasets["emissions_data"][&key]["dis_1"], 7.5);
    }

    #[test]
    fn test_load_dir_fails_on_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("does_not_exist");
        let err = LoaderRegistry::new().load_dir(&missing).unwrap_err();
        assert!(matches!(err, LoadError::ReadDir(_)));
    }

    #[test]
    fn test_load_dir_escalates_loader_failure() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let err = LoaderRegistry::new().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
