//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method runs inside the unit of work
//! that handed out the repository, hence `&mut self`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Address, Contact, User};
use crate::error::DomainError;
use crate::value_objects::PageRequest;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send {
    /// Find user by ID
    async fn find_by_id(&mut self, id: &str) -> RepoResult<Option<User>>;

    /// Find the user currently holding a session token
    async fn find_by_token(&mut self, token: &str) -> RepoResult<Option<User>>;

    /// Check if an ID is already taken
    async fn exists(&mut self, id: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&mut self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update name and timestamps of an existing user
    async fn update(&mut self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&mut self, id: &str) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&mut self, id: &str, password_hash: &str) -> RepoResult<()>;

    /// Replace (`Some`) or clear (`None`) the session token
    async fn set_token(&mut self, id: &str, token: Option<&str>) -> RepoResult<()>;
}

// ============================================================================
// Contact Repository
// ============================================================================

/// Search criteria for a user's contacts
#[derive(Debug, Clone, Default)]
pub struct ContactSearch {
    pub user_id: String,
    /// Substring of first or last name
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: PageRequest,
}

impl ContactSearch {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

#[async_trait]
pub trait ContactRepository: Send {
    /// Find a contact scoped to its owner
    async fn find_by_id_and_user(&mut self, id: Uuid, user_id: &str)
        -> RepoResult<Option<Contact>>;

    /// Same as `find_by_id_and_user`, locking the row until the unit of work ends
    async fn find_for_update(&mut self, id: Uuid, user_id: &str) -> RepoResult<Option<Contact>>;

    /// Create a new contact
    async fn create(&mut self, contact: &Contact) -> RepoResult<()>;

    /// Overwrite the mutable fields of an existing contact
    async fn update(&mut self, contact: &Contact) -> RepoResult<()>;

    /// Delete a contact owned by `user_id`
    async fn delete(&mut self, id: Uuid, user_id: &str) -> RepoResult<()>;

    /// One page of contacts matching the criteria
    async fn search(&mut self, query: &ContactSearch) -> RepoResult<Vec<Contact>>;

    /// Total number of contacts matching the criteria, ignoring paging
    async fn count(&mut self, query: &ContactSearch) -> RepoResult<i64>;
}

// ============================================================================
// Address Repository
// ============================================================================

#[async_trait]
pub trait AddressRepository: Send {
    /// Find an address scoped to its contact
    async fn find_by_id_and_contact(
        &mut self,
        id: Uuid,
        contact_id: Uuid,
    ) -> RepoResult<Option<Address>>;

    /// All addresses of a contact, oldest first
    async fn find_by_contact(&mut self, contact_id: Uuid) -> RepoResult<Vec<Address>>;

    /// Create a new address
    async fn create(&mut self, address: &Address) -> RepoResult<()>;

    /// Overwrite the mutable fields of an existing address
    async fn update(&mut self, address: &Address) -> RepoResult<()>;

    /// Delete an address belonging to `contact_id`
    async fn delete(&mut self, id: Uuid, contact_id: Uuid) -> RepoResult<()>;
}
