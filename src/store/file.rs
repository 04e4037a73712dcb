use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use log::warn;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Flat-file store: one contact per line, six comma-separated columns in
/// `Contact` field order, no header row.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: &Path) -> Result<Self, AppError> {
        create_file_parent(path)?;

        Ok(FileStore {
            path: path.to_path_buf(),
        })
    }
}

impl ContactStore for FileStore {
    /// A missing or unreadable file is not an error here: the caller gets
    /// an empty list and the session carries on. Rows that do not decode
    /// into six fields are skipped, not fatal.
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            warn!("contacts file {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = match ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        let mut contacts = Vec::new();

        for result in reader.deserialize() {
            match result {
                Ok(record) => contacts.push(record),
                Err(e) => warn!("skipping malformed contact line: {}", e),
            }
        }

        Ok(contacts)
    }

    /// Full rewrite: truncates the file and writes every contact back in
    /// sequence order. Creates the file if absent.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        Ok(())
    }
}
