//! Unit of work - the transaction every use case runs inside

use async_trait::async_trait;

use super::repositories::{AddressRepository, ContactRepository, RepoResult, UserRepository};

/// An open transaction exposing the repositories bound to it.
///
/// `commit` consumes the unit of work, so it can be released at most once.
/// Dropping it without committing rolls every change back.
#[async_trait]
pub trait UnitOfWork: Send {
    fn users(&mut self) -> &mut dyn UserRepository;

    fn contacts(&mut self) -> &mut dyn ContactRepository;

    fn addresses(&mut self) -> &mut dyn AddressRepository;

    /// Make every change visible atomically
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard every change explicitly
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}

/// Factory for units of work, shared by all requests
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
