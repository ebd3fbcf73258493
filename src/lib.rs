//! Declarative metric scoring over heterogeneous tabular datasets.
//!
//! Input files (one dataset per file) are merged into a single row per
//! (company, year) key, keeping the most recently dated observation.
//! A YAML config then declares metrics — named operations over raw
//! dataset fields or previously computed metrics — which are evaluated
//! for every key in parallel, with null propagating through operations
//! instead of aborting the run.
//!
//! The typical entry point is [`service::calculate_score`]; the result
//! can be rendered for the calling boundary with [`report::write_csv`].

pub mod computation;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod service;
pub mod store;

pub use computation::{ComputationError, Ledger};
pub use config::{Metric, OperationSpec, Parameter, ScoreConfig};
pub use error::ScoreError;
pub use loader::{DatasetLoader, LoadError};
pub use service::{calculate_score, calculate_score_with_workers};
pub use store::{CompanyYearKey, DatasetTable, Datasets, FinalResult, ResultSet};
