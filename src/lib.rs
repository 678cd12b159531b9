//! Address Book Bot - an interactive command-line address book assistant.
//!
//! The assistant reads one command per line, applies it to an in-memory
//! address book of contacts with validated phone numbers, and prints a reply.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) behind the `Field` trait
//! - **models**: The `Record` holding one contact's phones
//! - **repositories**: The `AddressBook` keyed by contact name
//! - **commands**: Input parsing, command handlers and the error-adapting dispatcher
//! - **session**: The read-evaluate-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{dispatch, parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
pub use repositories::AddressBook;
pub use session::{evaluate, Reply, Session, SessionState};
