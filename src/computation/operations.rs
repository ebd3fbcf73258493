//! The closed catalogue of metric operations.
//!
//! Every operation is a pure function from resolved parameters to a
//! value-or-null. `Ok(None)` means null; `Err` is a reported failure that
//! the evaluator degrades to null. Adding an operation means adding one
//! entry to [`OPERATIONS`] — the evaluator dispatches through the table
//! and never names an operation directly.

use crate::computation::engine::resolve;
use crate::computation::ledger::{ComputationError, Ledger};
use crate::config::Parameter;
use crate::store::types::{CompanyYearKey, Datasets};

pub type OperationFn = fn(
    params: &[Parameter],
    key: &CompanyYearKey,
    ledger: &Ledger,
    datasets: &Datasets,
) -> Result<Option<f64>, ComputationError>;

static OPERATIONS: &[(&str, OperationFn)] = &[
    ("sum", eval_sum),
    ("or", eval_or),
    ("divide", eval_divide),
];

/// Looks up an operation by its configured type name.
pub fn lookup(kind: &str) -> Option<OperationFn> {
    OPERATIONS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, f)| *f)
}

/// Adds all non-null parameters. All-null is null, not zero.
fn eval_sum(
    params: &[Parameter],
    key: &CompanyYearKey,
    ledger: &Ledger,
    datasets: &Datasets,
) -> Result<Option<f64>, ComputationError> {
    let mut total = 0.0;
    let mut any_non_null = false;

    for param in params {
        if let Some(value) = resolve(&param.source, key, ledger, datasets) {
            total += value;
            any_non_null = true;
        }
    }

    if !any_non_null {
        return Ok(None);
    }
    Ok(Some(total))
}

/// First non-null of the first two parameters; both null is null.
fn eval_or(
    params: &[Parameter],
    key: &CompanyYearKey,
    ledger: &Ledger,
    datasets: &Datasets,
) -> Result<Option<f64>, ComputationError> {
    if params.len() < 2 {
        return Err(ComputationError::NotEnoughParameters {
            op: "or",
            expected: 2,
            actual: params.len(),
        });
    }

    if let Some(value) = resolve(&params[0].source, key, ledger, datasets) {
        return Ok(Some(value));
    }
    Ok(resolve(&params[1].source, key, ledger, datasets))
}

/// Numerator over denominator. A null on either side is null; a zero
/// denominator is a reported error, distinct from null.
fn eval_divide(
    params: &[Parameter],
    key: &CompanyYearKey,
    ledger: &Ledger,
    datasets: &Datasets,
) -> Result<Option<f64>, ComputationError> {
    if params.len() < 2 {
        return Err(ComputationError::NotEnoughParameters {
            op: "divide",
            expected: 2,
            actual: params.len(),
        });
    }

    let numerator = resolve(&params[0].source, key, ledger, datasets);
    let denominator = resolve(&params[1].source, key, ledger, datasets);

    let (Some(numerator), Some(denominator)) = (numerator, denominator) else {
        return Ok(None);
    };
    if denominator == 0.0 {
        return Err(ComputationError::DivisionByZero);
    }

    Ok(Some(numerator / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{DatasetTable, FieldMap};

    fn params(sources: &[&str]) -> Vec<Parameter> {
        sources
            .iter()
            .map(|s| Parameter {
                source: s.to_string(),
            })
            .collect()
    }

    fn sample_datasets() -> Datasets {
        let key = CompanyYearKey::new("1000", 2023);
        let mut fields = FieldMap::new();
        fields.insert("dis_1".to_string(), 5.0);
        fields.insert("dis_2".to_string(), 2.0);
        fields.insert("zero".to_string(), 0.0);

        let mut table = DatasetTable::new();
        table.insert(key, fields);

        let mut datasets = Datasets::new();
        datasets.insert("disclosure".to_string(), table);
        datasets
    }

    fn key() -> CompanyYearKey {
        CompanyYearKey::new("1000", 2023)
    }

    #[test]
    fn test_sum_skips_null_parameters() {
        let datasets = sample_datasets();
        let result = eval_sum(
            &params(&["disclosure.dis_1", "disclosure.missing"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Ok(Some(5.0)));
    }

    #[test]
    fn test_sum_of_all_nulls_is_null() {
        let datasets = sample_datasets();
        let result = eval_sum(
            &params(&["disclosure.missing", "absent.dis_1"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_or_returns_first_non_null() {
        let datasets = sample_datasets();
        let result = eval_or(
            &params(&["disclosure.missing", "disclosure.dis_2"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Ok(Some(2.0)));
    }

    #[test]
    fn test_or_of_two_nulls_is_null() {
        let datasets = sample_datasets();
        let result = eval_or(
            &params(&["disclosure.missing", "disclosure.also_missing"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_or_requires_two_parameters() {
        let datasets = sample_datasets();
        let result = eval_or(
            &params(&["disclosure.dis_1"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert!(matches!(
            result,
            Err(ComputationError::NotEnoughParameters { op: "or", .. })
        ));
    }

    #[test]
    fn test_divide_quotient() {
        let datasets = sample_datasets();
        let result = eval_divide(
            &params(&["disclosure.dis_1", "disclosure.dis_2"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Ok(Some(2.5)));
    }

    #[test]
    fn test_divide_with_null_side_is_null() {
        let datasets = sample_datasets();
        for sources in [
            ["disclosure.missing", "disclosure.dis_2"],
            ["disclosure.dis_1", "disclosure.missing"],
        ] {
            let result = eval_divide(&params(&sources), &key(), &Ledger::new(), &datasets);
            assert_eq!(result, Ok(None));
        }
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        let datasets = sample_datasets();
        let result = eval_divide(
            &params(&["disclosure.dis_1", "disclosure.zero"]),
            &key(),
            &Ledger::new(),
            &datasets,
        );
        assert_eq!(result, Err(ComputationError::DivisionByZero));
    }

    #[test]
    fn test_lookup_known_and_unknown_operations() {
        assert!(lookup("sum").is_some());
        assert!(lookup("or").is_some());
        assert!(lookup("divide").is_some());
        assert!(lookup("median").is_none());
    }
}
