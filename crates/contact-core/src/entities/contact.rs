//! Contact entity - a person in a user's contact book

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    /// Owning user, immutable after creation
    pub user_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(
        id: Uuid,
        user_id: String,
        first_name: String,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            first_name,
            last_name,
            email,
            phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user owns this contact
    #[inline]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Overwrite every mutable field
    pub fn apply(
        &mut self,
        first_name: String,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.phone = phone;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_fields() {
        let mut contact = Contact::new(
            Uuid::new_v4(),
            "khannedy".to_string(),
            "Eko".to_string(),
            Some("Khannedy".to_string()),
            None,
            None,
        );
        contact.apply("Budi".to_string(), None, Some("budi@example.com".into()), None);

        assert_eq!(contact.first_name, "Budi");
        assert_eq!(contact.last_name, None);
        assert_eq!(contact.email.as_deref(), Some("budi@example.com"));
        assert!(contact.is_owned_by("khannedy"));
        assert!(!contact.is_owned_by("someone"));
    }
}
