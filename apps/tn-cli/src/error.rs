//! Error types for the command-line front end.

use tn_core::TnError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Network(#[from] TnError),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
