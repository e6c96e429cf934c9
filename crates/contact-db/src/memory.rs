//! In-process transactional store (for testing)
//!
//! Holds every table in a `HashMap` behind one async mutex. A unit of work
//! owns the lock for its whole lifetime and mutates a private copy of the
//! state; `commit` swaps the copy in, dropping discards it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use contact_core::entities::{Address, Contact, User};
use contact_core::error::DomainError;
use contact_core::traits::{
    AddressRepository, ContactRepository, ContactSearch, RepoResult, TransactionManager,
    UnitOfWork, UserRepository,
};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
    token: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct MemoryState {
    users: HashMap<String, StoredUser>,
    contacts: HashMap<Uuid, Contact>,
    addresses: HashMap<Uuid, Address>,
}

/// In-memory store implementing `TransactionManager`
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed users
    pub async fn user_count(&self) -> usize {
        self.state.lock().await.users.len()
    }

    /// Number of committed contacts
    pub async fn contact_count(&self) -> usize {
        self.state.lock().await.contacts.len()
    }

    /// Number of committed addresses
    pub async fn address_count(&self) -> usize {
        self.state.lock().await.addresses.len()
    }

    /// Committed token of a user, if any
    pub async fn token_of(&self, user_id: &str) -> Option<String> {
        self.state
            .lock()
            .await
            .users
            .get(user_id)
            .and_then(|stored| stored.token.clone())
    }
}

#[async_trait]
impl TransactionManager for MemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryUnitOfWork { guard, working }))
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Unit of work over a `MemoryStore`
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn contacts(&mut self) -> &mut dyn ContactRepository {
        self
    }

    fn addresses(&mut self) -> &mut dyn AddressRepository {
        self
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let MemoryUnitOfWork { mut guard, working } = *self;
        *guard = working;
        debug!("Memory transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        debug!("Memory transaction rolled back");
        Ok(())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_search(contact: &Contact, query: &ContactSearch) -> bool {
    if contact.user_id != query.user_id {
        return false;
    }
    if let Some(name) = &query.name {
        let first = contains_ci(&contact.first_name, name);
        let last = contact
            .last_name
            .as_deref()
            .is_some_and(|last| contains_ci(last, name));
        if !first && !last {
            return false;
        }
    }
    let field_matches = |field: Option<&str>, filter: Option<&String>| match filter {
        Some(filter) => field.is_some_and(|value| contains_ci(value, filter)),
        None => true,
    };
    field_matches(contact.email.as_deref(), query.email.as_ref())
        && field_matches(contact.phone.as_deref(), query.phone.as_ref())
}

#[async_trait]
impl UserRepository for MemoryUnitOfWork {
    async fn find_by_id(&mut self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.working.users.get(id).map(|stored| stored.user.clone()))
    }

    async fn find_by_token(&mut self, token: &str) -> RepoResult<Option<User>> {
        Ok(self
            .working
            .users
            .values()
            .find(|stored| stored.token.as_deref() == Some(token))
            .map(|stored| stored.user.clone()))
    }

    async fn exists(&mut self, id: &str) -> RepoResult<bool> {
        Ok(self.working.users.contains_key(id))
    }

    async fn create(&mut self, user: &User, password_hash: &str) -> RepoResult<()> {
        if self.working.users.contains_key(&user.id) {
            return Err(DomainError::UserAlreadyExists(user.id.clone()));
        }
        self.working.users.insert(
            user.id.clone(),
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
                token: None,
            },
        );
        Ok(())
    }

    async fn update(&mut self, user: &User) -> RepoResult<()> {
        let stored = self
            .working
            .users
            .get_mut(&user.id)
            .ok_or_else(|| DomainError::UserNotFound(user.id.clone()))?;
        stored.user.name.clone_from(&user.name);
        stored.user.updated_at = user.updated_at;
        Ok(())
    }

    async fn get_password_hash(&mut self, id: &str) -> RepoResult<Option<String>> {
        Ok(self
            .working
            .users
            .get(id)
            .map(|stored| stored.password_hash.clone()))
    }

    async fn update_password(&mut self, id: &str, password_hash: &str) -> RepoResult<()> {
        let stored = self
            .working
            .users
            .get_mut(id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;
        stored.password_hash = password_hash.to_string();
        stored.user.touch();
        Ok(())
    }

    async fn set_token(&mut self, id: &str, token: Option<&str>) -> RepoResult<()> {
        let stored = self
            .working
            .users
            .get_mut(id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;
        stored.token = token.map(str::to_string);
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MemoryUnitOfWork {
    async fn find_by_id_and_user(
        &mut self,
        id: Uuid,
        user_id: &str,
    ) -> RepoResult<Option<Contact>> {
        Ok(self
            .working
            .contacts
            .get(&id)
            .filter(|contact| contact.is_owned_by(user_id))
            .cloned())
    }

    async fn find_for_update(&mut self, id: Uuid, user_id: &str) -> RepoResult<Option<Contact>> {
        // The whole store is already locked by this unit of work
        self.find_by_id_and_user(id, user_id).await
    }

    async fn create(&mut self, contact: &Contact) -> RepoResult<()> {
        if !self.working.users.contains_key(&contact.user_id) {
            return Err(DomainError::DatabaseError(format!(
                "contact {} references unknown user {}",
                contact.id, contact.user_id
            )));
        }
        if self.working.contacts.contains_key(&contact.id) {
            return Err(DomainError::Duplicate(contact.id.to_string()));
        }
        self.working.contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    async fn update(&mut self, contact: &Contact) -> RepoResult<()> {
        match self.working.contacts.get_mut(&contact.id) {
            Some(existing) if existing.is_owned_by(&contact.user_id) => {
                existing.first_name.clone_from(&contact.first_name);
                existing.last_name.clone_from(&contact.last_name);
                existing.email.clone_from(&contact.email);
                existing.phone.clone_from(&contact.phone);
                existing.updated_at = contact.updated_at;
                Ok(())
            }
            _ => Err(DomainError::ContactNotFound(contact.id)),
        }
    }

    async fn delete(&mut self, id: Uuid, user_id: &str) -> RepoResult<()> {
        let owned = self
            .working
            .contacts
            .get(&id)
            .is_some_and(|contact| contact.is_owned_by(user_id));
        if !owned {
            return Err(DomainError::ContactNotFound(id));
        }
        self.working.contacts.remove(&id);
        Ok(())
    }

    async fn search(&mut self, query: &ContactSearch) -> RepoResult<Vec<Contact>> {
        let mut matched: Vec<&Contact> = self
            .working
            .contacts
            .values()
            .filter(|contact| matches_search(contact, query))
            .collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(query.page.size()).unwrap_or(0);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect())
    }

    async fn count(&mut self, query: &ContactSearch) -> RepoResult<i64> {
        let total = self
            .working
            .contacts
            .values()
            .filter(|contact| matches_search(contact, query))
            .count();
        Ok(i64::try_from(total).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl AddressRepository for MemoryUnitOfWork {
    async fn find_by_id_and_contact(
        &mut self,
        id: Uuid,
        contact_id: Uuid,
    ) -> RepoResult<Option<Address>> {
        Ok(self
            .working
            .addresses
            .get(&id)
            .filter(|address| address.contact_id == contact_id)
            .cloned())
    }

    async fn find_by_contact(&mut self, contact_id: Uuid) -> RepoResult<Vec<Address>> {
        let mut addresses: Vec<Address> = self
            .working
            .addresses
            .values()
            .filter(|address| address.contact_id == contact_id)
            .cloned()
            .collect();
        addresses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(addresses)
    }

    async fn create(&mut self, address: &Address) -> RepoResult<()> {
        if self.working.addresses.contains_key(&address.id) {
            return Err(DomainError::Duplicate(address.id.to_string()));
        }
        self.working.addresses.insert(address.id, address.clone());
        Ok(())
    }

    async fn update(&mut self, address: &Address) -> RepoResult<()> {
        match self.working.addresses.get_mut(&address.id) {
            Some(existing) if existing.contact_id == address.contact_id => {
                let created_at = existing.created_at;
                *existing = address.clone();
                existing.created_at = created_at;
                Ok(())
            }
            _ => Err(DomainError::AddressNotFound(address.id)),
        }
    }

    async fn delete(&mut self, id: Uuid, contact_id: Uuid) -> RepoResult<()> {
        let belongs = self
            .working
            .addresses
            .get(&id)
            .is_some_and(|address| address.contact_id == contact_id);
        if !belongs {
            return Err(DomainError::AddressNotFound(id));
        }
        self.working.addresses.remove(&id);
        Ok(())
    }
}
