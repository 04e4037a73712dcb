pub use crate::cli::command::{Cli, Command};
pub use crate::console::Console;
pub use crate::domain::contact::{Contact, find_by_personal_id};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, file::FileStore};
