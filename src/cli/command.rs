use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Console contact book")]
pub struct Cli {
    /// Path to the backing contacts file
    #[arg(long, env = "CONTACTS_PATH", default_value = "contacts.csv")]
    pub file: PathBuf,
}

/// One menu action. Parsed from the operator's numbered choice; anything
/// that is not 1-5 is rejected and re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateContact,
    ReadContacts,
    UpdateContact,
    DeleteContact,
    Exit,
}

impl Command {
    pub fn from_menu_choice(choice: &str) -> Result<Self, AppError> {
        match choice {
            "1" => Ok(Command::CreateContact),
            "2" => Ok(Command::ReadContacts),
            "3" => Ok(Command::UpdateContact),
            "4" => Ok(Command::DeleteContact),
            "5" => Ok(Command::Exit),
            _ => Err(AppError::ParseCommand(choice.to_string())),
        }
    }
}
