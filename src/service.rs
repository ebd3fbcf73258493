//! Orchestration of a full scoring run: config + data directory in,
//! final per-key metric values out.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::computation::scorer::{score_all, DEFAULT_WORKERS};
use crate::config::ScoreConfig;
use crate::error::ScoreError;
use crate::store::registry::LoaderRegistry;
use crate::store::types::{CompanyYearKey, Datasets, FinalResult};

/// Runs a full load-and-score pass with the default worker count.
///
/// Returns the parsed config (whose metric order defines the output
/// column order) together with the scored results. A returned error means
/// the whole run failed; a successful run may still contain null metrics.
pub fn calculate_score(
    config_path: impl AsRef<Path>,
    data_dir: impl AsRef<Path>,
) -> Result<(ScoreConfig, FinalResult), ScoreError> {
    calculate_score_with_workers(config_path, data_dir, DEFAULT_WORKERS)
}

pub fn calculate_score_with_workers(
    config_path: impl AsRef<Path>,
    data_dir: impl AsRef<Path>,
    workers: usize,
) -> Result<(ScoreConfig, FinalResult), ScoreError> {
    let config = ScoreConfig::from_file(config_path)?;
    info!(score = %config.name, metrics = config.metrics.len(), "loaded score config");

    let datasets = LoaderRegistry::new().load_dir(data_dir.as_ref())?;
    debug!(datasets = datasets.len(), "loaded datasets");

    let keys = collect_keys(&datasets);
    let results = score_all(&keys, &config, &datasets, workers)?;

    Ok((config, results))
}

/// The union of keys across all datasets, in sorted order.
fn collect_keys(datasets: &Datasets) -> Vec<CompanyYearKey> {
    let mut keys = BTreeSet::new();
    for table in datasets.values() {
        keys.extend(table.keys().cloned());
    }
    keys.into_iter().collect()
}
