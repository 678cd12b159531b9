//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two fields a contact
//! carries: its name and its phone numbers. These value objects provide
//! validation at construction time and prevent invalid data from being
//! represented in the address book.

pub mod errors;
pub mod field;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, Name};
pub use phone::Phone;
