use core::fmt;

use serde::{Deserialize, Serialize};

/// One contact record. Field order here is the column order in the backing
/// file, so reordering fields changes the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub personal_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        personal_id: String,
        first_name: String,
        last_name: String,
        phone_number: String,
        address: String,
        email: String,
    ) -> Self {
        Contact {
            personal_id,
            first_name,
            last_name,
            phone_number,
            address,
            email,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Personal ID: {}, Name: {} {}, Phone: {}, Address: {}, Email: {}",
            self.personal_id,
            self.first_name,
            self.last_name,
            self.phone_number,
            self.address,
            self.email
        )
    }
}

/// First contact whose `personal_id` equals `id`. The id is an unenforced
/// key, so duplicates may exist; callers that need every match filter the
/// list themselves.
pub fn find_by_personal_id<'a>(contacts: &'a [Contact], id: &str) -> Option<&'a Contact> {
    contacts.iter().find(|cont| cont.personal_id == id)
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    fn sample(id: &str, first: &str) -> Contact {
        Contact::new(
            id.to_string(),
            first.to_string(),
            "Saarinen".to_string(),
            "0401234567".to_string(),
            "Mannerheimintie 1".to_string(),
            "toni@example.com".to_string(),
        )
    }

    #[test]
    fn display_renders_operator_line() {
        let contact = sample("1234", "Toni");

        assert_eq!(
            format!("{}", contact),
            "Personal ID: 1234, Name: Toni Saarinen, Phone: 0401234567, \
             Address: Mannerheimintie 1, Email: toni@example.com"
        );
    }

    #[test]
    fn lookup_returns_first_match_only() {
        let contacts = vec![sample("77", "Anna"), sample("88", "Ben"), sample("77", "Cleo")];

        let found = find_by_personal_id(&contacts, "77").unwrap();
        assert_eq!(found.first_name, "Anna");
    }

    #[test]
    fn lookup_misses_unknown_id() {
        let contacts = vec![sample("77", "Anna")];

        assert!(find_by_personal_id(&contacts, "99").is_none());
    }
}
