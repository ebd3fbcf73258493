//! Parallel fan-out of metric evaluation across all keys.

use rayon::prelude::*;

use crate::computation::engine::evaluate_metric;
use crate::computation::ledger::Ledger;
use crate::config::ScoreConfig;
use crate::store::types::{CompanyYearKey, Datasets, FinalResult, ResultSet};

/// Worker count used when the caller does not specify one.
pub const DEFAULT_WORKERS: usize = 4;

/// Scores every key against the full ordered metric list.
///
/// Runs on a fixed-size pool of `workers` threads. Each key gets a fresh
/// private ledger while the datasets are shared read-only, so no locking
/// is involved and the produced values are independent of the worker
/// count.
pub fn score_all(
    keys: &[CompanyYearKey],
    config: &ScoreConfig,
    datasets: &Datasets,
    workers: usize,
) -> Result<FinalResult, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let results = pool.install(|| {
        keys.par_iter()
            .map(|key| (key.clone(), score_key(key, config, datasets)))
            .collect::<FinalResult>()
    });

    Ok(results)
}

/// Evaluates the configured metrics, in order, for a single key.
fn score_key(key: &CompanyYearKey, config: &ScoreConfig, datasets: &Datasets) -> ResultSet {
    let mut ledger = Ledger::new();
    for metric in &config.metrics {
        evaluate_metric(metric, key, &mut ledger, datasets);
    }
    ledger.into_values()
}
