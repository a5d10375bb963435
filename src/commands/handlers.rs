//! Command handlers.
//!
//! Each handler turns an argument list into address book operations and
//! returns either the success message or a [`CommandError`] whose text is
//! the failure message. Nothing here prints; rendering happens in
//! [`super::execute`].

use crate::error::{CommandError, CommandResult, RecordError};
use crate::matching::{ContactMatcher, SearchSettings};
use crate::models::{AddressBook, Record, UPCOMING_WINDOW_DAYS};
use chrono::NaiveDate;

pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub const HELP: &str = "Commands: hello, add <name> <phone>, change <name> <new phone>, \
phone <name>, all, add_birthday <name> <DD.MM.YYYY>, show_birthday <name>, birthdays, \
delete <name>, remove_phone <name> <phone>, search <query>, close, exit";

/// `add <name> <phone>`: create the contact if needed, then append the phone.
///
/// A new contact is stored before the phone is validated, so an invalid
/// phone still leaves the (phone-less) contact in the book.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::NotEnoughArguments("both name and phone number"));
    };

    let message = if book.find_record(name).is_some() {
        "Contact updated."
    } else {
        let record = Record::with_name(name.as_str()).map_err(RecordError::from)?;
        book.add_record(record);
        "Contact added."
    };

    book.find_record_mut(name)
        .ok_or(CommandError::RecordNotFound)?
        .add_phone(phone)
        .map_err(CommandError::InvalidPhone)?;

    Ok(message.to_string())
}

/// `change <name> <new phone>`: replace the contact's first phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone, ..] = args else {
        return Err(CommandError::NotEnoughArguments(
            "both name and new phone number",
        ));
    };

    let record = book
        .find_record_mut(name)
        .ok_or(CommandError::RecordNotFound)?;

    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| CommandError::NoPhones(name.clone()))?;

    record.edit_phone(&first, new_phone)?;

    Ok(format!("Phone number updated for {}.", name))
}

/// `phone <name>`: list the contact's phones.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::NotEnoughArguments("a name"));
    };

    let record = book
        .find_record(name)
        .ok_or_else(|| CommandError::NamedRecordNotFound(name.clone()))?;

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("Phones for {}: {}", name, phones))
}

/// `all`: one line per contact in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    Ok(book
        .list_all()
        .into_iter()
        .map(|(name, record)| format!("{}: {}", name, record))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add_birthday <name> <DD.MM.YYYY>`: set a birthday, refusing to overwrite.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::NotEnoughArguments(
            "both name and birthday (DD.MM.YYYY)",
        ));
    };

    let record = book
        .find_record_mut(name)
        .ok_or(CommandError::RecordNotFound)?;

    if record.birthday().is_some() {
        return Err(CommandError::BirthdayExists(name.clone()));
    }

    record
        .add_birthday(birthday)
        .map_err(CommandError::InvalidBirthday)?;

    Ok(format!("Birthday added successfully for {}.", name))
}

/// `show_birthday <name>`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::NotEnoughArguments("a name"));
    };

    let record = book.find_record(name).ok_or(CommandError::RecordNotFound)?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday),
        None => format!("{} has no birthday information.", name),
    })
}

/// `birthdays`: everyone to congratulate within the upcoming window.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today);

    if upcoming.is_empty() {
        return Ok(format!(
            "No upcoming birthdays in the next {} days.",
            UPCOMING_WINDOW_DAYS
        ));
    }

    let lines = upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("Upcoming birthdays:\n{}", lines))
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::NotEnoughArguments("a name"));
    };

    book.delete_record(name)
        .map(|_| "Record removed successfully.".to_string())
        .ok_or(CommandError::RecordNotFound)
}

/// `remove_phone <name> <phone>`: drop the first matching phone.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::NotEnoughArguments("both name and phone number"));
    };

    book.find_record_mut(name)
        .ok_or(CommandError::RecordNotFound)?
        .remove_phone(phone)?;

    Ok(format!("Phone {} removed from {}.", phone, name))
}

/// `search <query>`: fuzzy name or exact phone lookup.
pub fn search_contacts(
    args: &[String],
    book: &AddressBook,
    settings: SearchSettings,
) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::NotEnoughArguments("a name or phone to search for"));
    }
    let query = args.join(" ");

    let matches = ContactMatcher::new().find_matches(&query, book, settings);
    tracing::debug!(query = %query, result_count = matches.len(), "Search completed");

    if matches.is_empty() {
        return Ok(format!("No contacts match '{}'.", query));
    }

    let lines = matches
        .iter()
        .map(|m| format!("{}: {}", m.record.name(), m.record))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("Found {} contact(s):\n{}", matches.len(), lines))
}
