//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    ///
    /// The rejected value is kept for logging; the message shown to the
    /// user is fixed.
    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone(String),
}
