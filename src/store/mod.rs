pub mod file;
#[cfg(test)]
pub mod memory;

use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// The two primitives every CRUD operation funnels through: full-file read
/// and full-file overwrite. Any record left out of `save` is gone.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    // A bare filename has an empty parent; nothing to create then.
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
