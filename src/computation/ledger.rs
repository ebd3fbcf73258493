//! Per-key accumulator of computed metric values.

use crate::store::types::ResultSet;

pub use self::error::ComputationError;
mod error {
    use thiserror::Error;

    /// Metric-scoped evaluation failures. These are logged and degrade the
    /// metric to null; they never abort a scoring run.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ComputationError {
        #[error("division by zero in metric operation")]
        DivisionByZero,
        #[error("operation '{op}' needs at least {expected} parameters, got {actual}")]
        NotEnoughParameters {
            op: &'static str,
            expected: usize,
            actual: usize,
        },
    }
}

/// Holds the metrics already computed for one (company, year) key.
///
/// Owned exclusively by the worker evaluating that key, so it needs no
/// synchronization. A value is only recorded once the metric resolved to
/// non-null, which is what makes later `self.<name>` references work.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    values: ResultSet,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    pub fn insert(&mut self, metric: &str, value: f64) {
        self.values.insert(metric.to_string(), value);
    }

    pub fn into_values(self) -> ResultSet {
        self.values
    }
}
