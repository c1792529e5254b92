use ordo_core::{ListError, SortError};
use thiserror::Error;

use crate::config::ConfigError;

/// Everything the `ordo` driver can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot parse '{value}' as {kind}")]
    Parse { value: String, kind: &'static str },
    #[error("'{value}' has no JSON representation")]
    NotJson { value: String },
    #[error("max depth {requested} exceeds the supported ceiling of {ceiling}")]
    DepthCeiling { requested: usize, ceiling: usize },
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
