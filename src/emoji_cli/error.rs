use thiserror::Error;

/// Errors raised by the lookup layer.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Emoji dataset is empty")]
    EmptyDataset,

    #[error("Emoji dataset error: {0}")]
    Dataset(String),
}

/// Errors that end a CLI invocation.
///
/// Lookup failures inside a handler are reported and swallowed there; only
/// resolution, arity and unexpected failures reach the runner as a `CliError`.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown command: {0}. Use --help for available commands.")]
    UnknownCommand(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Unexpected error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        CliError::Unexpected(err.to_string())
    }
}

impl CliError {
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Process exit code associated with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => crate::cli::exitcode::USAGE,
            CliError::UnknownCommand(_) | CliError::Unexpected(_) | CliError::Io(_) => {
                crate::cli::exitcode::FAILURE
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CliError::Validation(_))
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(CliError::validation("missing").exit_code(), 2);
        assert_eq!(CliError::UnknownCommand("--bogus".into()).exit_code(), 1);
        assert_eq!(CliError::Unexpected("boom".into()).exit_code(), 1);
        assert_eq!(CliError::from(LookupError::EmptyDataset).exit_code(), 1);
    }

    #[test]
    fn unknown_command_message_points_at_help() {
        let err = CliError::UnknownCommand("--bogus".into());
        assert_eq!(
            err.to_string(),
            "Unknown command: --bogus. Use --help for available commands."
        );
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = CliError::validation(r#"Command "get" requires arguments"#);
        assert_eq!(err.to_string(), r#"Command "get" requires arguments"#);
        assert!(err.is_validation());
    }
}
