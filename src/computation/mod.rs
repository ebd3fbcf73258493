pub mod engine;
pub mod ledger;
pub mod operations;
pub mod scorer;

pub use engine::evaluate_metric;
pub use ledger::{ComputationError, Ledger};
pub use scorer::score_all;
