//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(DomainError::Format { .. }) => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::Domain(DomainError::InputExhausted { .. }) => {
                        crate::exitcode::NOINPUT
                    }
                    ApplicationError::Domain(DomainError::InvalidMode(_)) => {
                        crate::exitcode::USAGE
                    }
                    ApplicationError::TeamFileNotFound(_) => crate::exitcode::NOINPUT,
                    ApplicationError::CannotWrite { .. } => crate::exitcode::CANTCREAT,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_follow_sysexits() {
        let format: CliError = ApplicationError::from(DomainError::format("bad")).into();
        assert_eq!(format.exit_code(), crate::exitcode::DATAERR);

        let missing: CliError = ApplicationError::TeamFileNotFound(PathBuf::from("x")).into();
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        let mode: CliError =
            ApplicationError::from(DomainError::InvalidMode("x".to_string())).into();
        assert_eq!(mode.exit_code(), crate::exitcode::USAGE);

        assert_eq!(
            CliError::Usage("no file".to_string()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
