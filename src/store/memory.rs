use std::cell::RefCell;

use super::ContactStore;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-memory store. `save` goes through `&self` like every store, so the
/// data sits behind a `RefCell`.
pub struct MemStore {
    data: RefCell<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            data: RefCell::new(Vec::new()),
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        MemStore {
            data: RefCell::new(contacts),
        }
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
