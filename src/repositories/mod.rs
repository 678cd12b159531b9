//! Contact storage.
//!
//! The address book is the only mutable state in a session. It is owned by
//! the caller and lent to each command handler.

pub mod address_book;

pub use address_book::AddressBook;
