//! Process exit codes

use nl_core::Error;

/// Exit status of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The operation succeeded
    Success = 0,
    /// The archive operation ran and failed
    OperationFailed = 1,
    /// The command line was rejected; nothing was attempted
    UsageError = 2,
    /// A defect in the front end itself
    InternalError = 3,
}

impl ExitCode {
    /// Classify a failure
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Parse(_) => ExitCode::UsageError,
            e if e.is_internal() => ExitCode::InternalError,
            _ => ExitCode::OperationFailed,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::{Command, ParseError};

    #[test]
    fn test_classification() {
        assert_eq!(
            ExitCode::from_error(&Error::from(ParseError::Usage)),
            ExitCode::UsageError
        );
        assert_eq!(
            ExitCode::from_error(&Error::MissingCapability(Command::Add)),
            ExitCode::InternalError
        );
        assert_eq!(
            ExitCode::from_error(&Error::Unsupported("add".to_string())),
            ExitCode::OperationFailed
        );
        assert_eq!(ExitCode::UsageError.code(), 2);
    }
}
