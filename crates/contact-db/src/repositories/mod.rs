//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in contact-core.
//! All three repositories are implemented on `PgUnitOfWork`, so every query
//! runs on the connection of one open transaction.

mod address;
mod contact;
mod error;
mod transaction;
mod user;

pub use contact::like_pattern;
pub use transaction::{PgTransactionManager, PgUnitOfWork};
