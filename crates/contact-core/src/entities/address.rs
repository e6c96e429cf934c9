//! Address entity - a postal address attached to a contact

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    /// Owning contact, immutable after creation
    pub contact_id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    pub fn new(id: Uuid, contact_id: Uuid, country: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            contact_id,
            street: None,
            city: None,
            province: None,
            postal_code: None,
            country,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style setters for the optional parts
    pub fn with_street(mut self, street: Option<String>) -> Self {
        self.street = street;
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    pub fn with_province(mut self, province: Option<String>) -> Self {
        self.province = province;
        self
    }

    pub fn with_postal_code(mut self, postal_code: Option<String>) -> Self {
        self.postal_code = postal_code;
        self
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
