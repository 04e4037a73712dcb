use std::io::{BufRead, Write};

use log::error;

use crate::prelude::{AppError, Command, Console, Contact, ContactStore, find_by_personal_id};

/// Menu loop. Every action is a full load of the backing file, an
/// in-memory mutation, and a full rewrite; nothing is cached between
/// choices. Returns when the operator picks Exit.
pub fn run_app<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(console)?;
        let choice = console.prompt("Enter your choice: ")?;

        match Command::from_menu_choice(&choice) {
            Ok(Command::CreateContact) => create_contact(store, console)?,
            Ok(Command::ReadContacts) => read_contacts(store, console)?,
            Ok(Command::UpdateContact) => update_contact(store, console)?,
            Ok(Command::DeleteContact) => delete_contact(store, console)?,
            Ok(Command::Exit) => {
                console.write_line("Exiting the program.")?;
                return Ok(());
            }
            Err(_) => {
                console.write_line("Invalid choice. Please enter a number between 1 and 5.")?;
            }
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    console.write_line("1. Create Contact")?;
    console.write_line("2. Read Contacts")?;
    console.write_line("3. Update Contact")?;
    console.write_line("4. Delete Contact")?;
    console.write_line("5. Exit")?;
    Ok(())
}

/// Collect the six fields of one contact, in file column order.
fn prompt_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Contact, AppError> {
    let personal_id = console.prompt("Type your personal id: ")?;
    let first_name = console.prompt("Type your first name: ")?;
    let last_name = console.prompt("Type your last name: ")?;
    let phone_number = console.prompt("Type your phone number: ")?;
    let address = console.prompt("Type your address: ")?;
    let email = console.prompt("Type your email: ")?;

    Ok(Contact::new(
        personal_id,
        first_name,
        last_name,
        phone_number,
        address,
        email,
    ))
}

/// Write the sequence back, reporting the outcome to the operator. A
/// failed save is not fatal: the in-memory copy is simply lost when the
/// process exits, and the operator is told so.
fn persist<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    contacts: &[Contact],
) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    match store.save(contacts) {
        Ok(()) => console.write_line("Contacts saved successfully."),
        Err(e) => {
            error!("failed to persist contacts: {}", e);
            console.write_line(&format!("Error saving contacts to file: {}", e))
        }
    }
}

fn create_contact<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let mut contacts = store.load()?;

    loop {
        let new_contact = prompt_contact(console)?;
        contacts.push(new_contact);

        let again =
            console.prompt_lowercase("Do you want to create another contact? (yes/no): ")?;
        if again != "yes" {
            break;
        }
    }

    persist(store, console, &contacts)
}

fn read_contacts<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let contacts = store.load()?;

    if contacts.is_empty() {
        console.write_line("No contacts found.")?;
        return Ok(());
    }

    console.write_line("Contacts:")?;
    for contact in &contacts {
        console.write_line(&contact.to_string())?;
    }

    Ok(())
}

fn update_contact<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let mut contacts = store.load()?;

    if contacts.is_empty() {
        console.write_line("No contacts found.")?;
        return Ok(());
    }

    console.write_line("Contacts:")?;
    for (index, contact) in contacts.iter().enumerate() {
        console.write_line(&format!("{}. {}", index, contact))?;
    }

    let index = prompt_contact_index(console, contacts.len())?;
    let replacement = prompt_contact(console)?;

    // Identity is positional: the replacement may carry a different
    // personal id than the record it displaces.
    contacts[index] = replacement;

    persist(store, console, &contacts)?;
    console.write_line("Contact updated successfully.")?;
    Ok(())
}

/// Re-prompt until the reply parses as an index inside the sequence.
/// Invalid input never mutates anything and never falls through.
fn prompt_contact_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    len: usize,
) -> Result<usize, AppError> {
    loop {
        let input = console.prompt("Enter the index of the contact to update: ")?;

        match input.parse::<usize>() {
            Ok(index) if index < len => return Ok(index),
            Ok(_) => console.write_line("Index out of range. Try again.")?,
            Err(_) => console.write_line("Enter a valid index number.")?,
        }
    }
}

fn delete_contact<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let id = console.prompt("Enter the Personal ID to delete: ")?;
    let contacts = store.load()?;

    let Some(found) = find_by_personal_id(&contacts, &id) else {
        console.write_line("Contact not found.")?;
        return Ok(());
    };

    console.write_line("Contact to delete:")?;
    console.write_line(&found.to_string())?;

    let confirmation =
        console.prompt_lowercase("Are you sure you want to delete this contact? (yes/no): ")?;
    if confirmation != "yes" {
        console.write_line("Deletion canceled.")?;
        return Ok(());
    }

    // Reload so the rewrite starts from what is on disk right now, then
    // drop every record carrying the id, not just the displayed one.
    let mut contacts = store.load()?;
    contacts.retain(|cont| cont.personal_id != id);

    persist(store, console, &contacts)?;
    console.write_line("Contact deleted successfully.")?;
    Ok(())
}
