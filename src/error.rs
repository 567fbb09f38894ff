//! Error types for hostlock.
//!
//! Lock contention is not an error: the registry reports `Denied`,
//! `Forbidden` and `NotLocked` as outcomes. The variants here cover
//! process-level faults that end a CLI invocation.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hostlock operations.
#[derive(Error, Debug)]
pub enum HostlockError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Reading commands or writing replies failed.
    #[error("I/O failure: {0}")]
    IoError(#[from] std::io::Error),

    /// A bug in hostlock itself, such as a reply that cannot be encoded.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HostlockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HostlockError::UserError(_) => exit_codes::USER_ERROR,
            HostlockError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            HostlockError::IoError(_) => exit_codes::IO_FAILURE,
            HostlockError::Internal(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for hostlock operations.
pub type Result<T> = std::result::Result<T, HostlockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = HostlockError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = HostlockError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn io_error_converts_and_has_correct_exit_code() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HostlockError = io.into();
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn internal_error_is_not_a_user_error() {
        let err = HostlockError::Internal("failed to serialize reply: oops".to_string());
        assert_eq!(err.exit_code(), exit_codes::INTERNAL_ERROR);
        assert_ne!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "Internal error: failed to serialize reply: oops");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = HostlockError::ConfigError("default_duration_minutes must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: default_duration_minutes must be greater than 0"
        );

        let err = HostlockError::UserError("no such file".to_string());
        assert_eq!(err.to_string(), "no such file");
    }
}
