//! Metric evaluation for a single (company, year) key.
//!
//! Metrics run in their declared order against a per-key [`Ledger`];
//! each non-null result is written back before the next metric runs, so
//! later metrics can reference earlier ones through `self.<name>`. There
//! is no recursive triggering: a forward reference simply reads as null.

use tracing::{error, warn};

use crate::computation::ledger::Ledger;
use crate::computation::operations;
use crate::config::Metric;
use crate::store::types::{CompanyYearKey, Datasets};

/// Evaluates one metric for one key, returning its value or `None` for null.
///
/// Already-computed metrics are returned from the ledger without
/// re-invoking their operation. Unknown operation types and operation
/// errors degrade to null and are logged; they never propagate.
pub fn evaluate_metric(
    metric: &Metric,
    key: &CompanyYearKey,
    ledger: &mut Ledger,
    datasets: &Datasets,
) -> Option<f64> {
    if let Some(value) = ledger.get(&metric.name) {
        return Some(value);
    }

    let Some(op) = operations::lookup(&metric.operation.kind) else {
        warn!(
            metric = %metric.name,
            operation = %metric.operation.kind,
            "unknown operation type"
        );
        return None;
    };

    let value = match op(&metric.operation.parameters, key, ledger, datasets) {
        Ok(value) => value,
        Err(err) => {
            error!(
                metric = %metric.name,
                operation = %metric.operation.kind,
                %key,
                error = %err,
                "metric operation failed"
            );
            return None;
        }
    };

    if let Some(value) = value {
        ledger.insert(&metric.name, value);
    }
    value
}

/// Resolves a parameter source to a value, or `None` when it is null.
///
/// `self.<name>` reads the ledger; `<dataset>.<field>` walks the loaded
/// datasets. A missing metric, dataset, key or field — or a source that
/// matches neither shape — all read as null.
pub fn resolve(
    source: &str,
    key: &CompanyYearKey,
    ledger: &Ledger,
    datasets: &Datasets,
) -> Option<f64> {
    if let Some(metric_name) = source.strip_prefix("self.") {
        return ledger.get(metric_name);
    }

    let mut parts = source.split('.');
    let dataset_name = parts.next()?;
    let field = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    datasets.get(dataset_name)?.get(key)?.get(field).copied()
}
