//! Run-level error type: only fatal failures surface here. Row- and
//! metric-scoped problems degrade to null inside the core and are logged.

use thiserror::Error;

use crate::config::ConfigError;
use crate::loader::LoadError;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
