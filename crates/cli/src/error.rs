//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ModelError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use quicksight_client::ModelError;

/// Structured exit codes for quicksight-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - unknown operation or enum domain.
    ///
    /// Scripts should check the name against `quicksight-cli operations`.
    NotFound = 4,

    /// Validation error - the request document breaks a constraint or cannot be parsed.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ModelError> for ExitCode {
    fn from(err: &ModelError) -> Self {
        match err {
            ModelError::UnknownOperation(_) => ExitCode::NotFound,

            ModelError::Validation(_)
            | ModelError::MissingPathParameter { .. }
            | ModelError::UnknownEnumValue { .. }
            | ModelError::InvalidUnion { .. }
            | ModelError::DuplicateKey { .. }
            | ModelError::Serialization(_) => ExitCode::ValidationError,

            ModelError::InvalidUrl(_) => ExitCode::GeneralError,
        }
    }
}

/// Raised by the CLI itself when a lookup by name finds nothing.
#[derive(Debug, thiserror::Error)]
#[error("Unknown enum domain: {0}")]
pub struct UnknownDomain(pub String);

/// Raised when a request document cannot be read as JSON or YAML.
#[derive(Debug, thiserror::Error)]
#[error("Cannot parse {source_name} as JSON or YAML: {message}")]
pub struct InvalidDocument {
    pub source_name: String,
    pub message: String,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(model_err) = cause.downcast_ref::<ModelError>() {
                return ExitCode::from(model_err);
            }
            if cause.downcast_ref::<UnknownDomain>().is_some() {
                return ExitCode::NotFound;
            }
            if cause.downcast_ref::<InvalidDocument>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use quicksight_client::ValidationReport;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_unknown_operation_is_not_found() {
        let err = ModelError::UnknownOperation("DescribeEverything".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_validation_failure_is_validation_error() {
        let err = ModelError::Validation(ValidationReport::default());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = ModelError::MissingPathParameter {
            operation: "DescribeUser",
            parameter: "UserName".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::new(ModelError::UnknownOperation("X".to_string()))
            .context("while validating");
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        let err: anyhow::Result<()> =
            Err(UnknownDomain("Colour".to_string())).context("looking up enums");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
