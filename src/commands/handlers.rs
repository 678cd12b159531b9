//! Command handlers.
//!
//! Each handler checks the shape of its arguments, reads or mutates the
//! address book, and returns the line to print. Failures are returned as
//! `CommandError` and turned into messages by the dispatcher.

use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repositories::AddressBook;
use tracing::debug;

/// Fetch the argument at `index`, or fail as an incomplete command.
fn arg<'a>(args: &[&'a str], index: usize, command: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::IncompleteCommand { command, index })
}

/// `hello`
pub fn hello(_args: &[&str], _book: &mut AddressBook) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
///
/// A rejected phone never leaves a new, empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Ok(
            "You need to provide both a name and a phone number to add a contact.".to_string(),
        );
    };

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(Name::new(*name)?);
            record.add_phone(phone)?;
            debug!(name = %name, "creating contact");
            book.add_record(record);
        }
    }

    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Ok(
            "Please provide a name, old phone, and new phone for changing contact details."
                .to_string(),
        );
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `delete <name>`: always reports success, even for unknown names.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "delete")?;
    book.delete(name);
    Ok(format!("Deleted record for {}.", name))
}

/// `find <name or phone>`: name lookup first, then phone lookup.
pub fn find_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let query = arg(args, 0, "find")?;
    let record = book
        .find(query)
        .or_else(|| book.find_by_phone(query))
        .ok_or_else(|| CommandError::NotFound(query.to_string()))?;

    Ok(record.to_string())
}

/// `phone <name>`: the contact's phones.
pub fn show_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "phone")?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(record.phones_display())
}

/// `all`: every contact, one per line.
pub fn show_all(_args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    Ok(book
        .all_records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
