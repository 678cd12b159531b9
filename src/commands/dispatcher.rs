//! Error-adapting dispatch.
//!
//! Handlers report failures as `CommandError`; `dispatch` is the single place
//! those become user-facing text, using each variant's `Display` message.
//! Panics are programming errors and are not caught here.

use crate::error::CommandResult;
use crate::repositories::AddressBook;
use tracing::warn;

/// Signature shared by every command handler.
pub type Handler = fn(&[&str], &mut AddressBook) -> CommandResult<String>;

/// Run `handler` and always produce a line to show the user.
pub fn dispatch(handler: Handler, args: &[&str], book: &mut AddressBook) -> String {
    match handler(args, book) {
        Ok(message) => message,
        Err(err) => {
            warn!(error = ?err, "command rejected");
            err.to_string()
        }
    }
}
