//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
///
/// Every variant is recoverable: the dispatcher turns it into a message for
/// the user and the session carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Input failed a domain format rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact not found.")]
    NotFound(String),

    /// The handler needed an argument at a position the user did not supply
    #[error("Incomplete command. Please check and try again.")]
    IncompleteCommand { command: &'static str, index: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
