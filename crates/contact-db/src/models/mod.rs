//! Database models - SQLx-compatible structs for PostgreSQL tables

mod address;
mod contact;
mod user;

pub use address::AddressModel;
pub use contact::ContactModel;
pub use user::UserModel;
