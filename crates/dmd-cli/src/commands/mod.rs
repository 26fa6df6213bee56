//! One module per subcommand; each exposes a single
//! `run(...) -> Result<(), CliError>` taking everything it needs
//! explicitly. No ambient state.

pub(crate) mod add;
pub(crate) mod current;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod forecast;
pub(crate) mod query;

use crate::error::CliError;
use crate::output;
use demanda::error::DemandaError;
use demanda::primitives::TowerVector;
use serde::Serialize;

/// JSON report for the bandwidth queries.
#[derive(Serialize)]
pub(crate) struct BandwidthReport {
    pub day: usize,
    pub bandwidth: TowerVector,
}

/// Unwraps a mutation result, turning a persistence failure into a
/// deferred error so the command can still report the in-memory
/// outcome before exiting non-zero.
pub(crate) fn apply_mutation<T>(
    result: demanda::error::Result<T>,
) -> Result<(Option<T>, Option<DemandaError>), CliError> {
    match result {
        Ok(value) => Ok((Some(value), None)),
        Err(e @ DemandaError::Persistence { .. }) => {
            output::warning(&e.to_string());
            Ok((None, Some(e)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Ends a mutating command: clean exit, or the deferred persistence
/// error after the result has been shown.
pub(crate) fn finish(persist_err: Option<DemandaError>) -> Result<(), CliError> {
    match persist_err {
        None => Ok(()),
        Some(e) => Err(e.into()),
    }
}
