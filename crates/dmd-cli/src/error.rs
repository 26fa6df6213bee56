//! Error types for dmd-cli.

use demanda::error::DemandaError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// The demand file does not exist
    #[error("Demand file not found: {0} (use `dmd add` to start a new table)")]
    StoreNotFound(PathBuf),

    /// Library error
    #[error("{0}")]
    Demanda(DemandaError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::StoreNotFound(_) => ExitCode::from(3),
            Self::Demanda(DemandaError::InvalidDay { .. }) => ExitCode::from(4),
            Self::Demanda(DemandaError::InsufficientData { .. }) => ExitCode::from(5),
            Self::Demanda(DemandaError::Persistence { .. }) => ExitCode::from(6),
            Self::Demanda(DemandaError::Io(_)) | Self::Io(_) => ExitCode::from(7),
            Self::Demanda(_) | Self::Json(_) => ExitCode::from(1),
        }
    }
}

impl From<DemandaError> for CliError {
    fn from(e: DemandaError) -> Self {
        match e {
            DemandaError::StoreNotFound(path) => Self::StoreNotFound(path),
            other => Self::Demanda(other),
        }
    }
}
