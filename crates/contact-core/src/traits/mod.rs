//! Ports implemented by the infrastructure layer

mod repositories;
mod transaction;

pub use repositories::{
    AddressRepository, ContactRepository, ContactSearch, RepoResult, UserRepository,
};
pub use transaction::{TransactionManager, UnitOfWork};
