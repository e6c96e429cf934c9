//! # contact-core
//!
//! Domain layer containing entities, the error taxonomy, repository traits, and
//! the unit-of-work contract every use case runs inside.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Address, AuthenticatedIdentity, Contact, User};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    AddressRepository, ContactRepository, ContactSearch, RepoResult, TransactionManager,
    UnitOfWork, UserRepository,
};
pub use value_objects::PageRequest;
