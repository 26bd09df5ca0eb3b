//! CLI-level errors (wraps chain errors)

use thiserror::Error;

use crate::errors::ChainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Chain(#[from] ChainError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Chain(ChainError::AllocationFailure { .. }) => crate::exitcode::OSERR,
        }
    }
}
