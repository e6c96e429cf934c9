//! Business logic services
//!
//! Every public operation validates its input, opens exactly one unit of
//! work, re-verifies ownership, and commits only on success. Early returns
//! drop the unit of work, which rolls it back.

pub mod address;
pub mod auth;
pub mod contact;
pub mod context;
pub mod error;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use address::AddressService;
pub use auth::AuthService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
