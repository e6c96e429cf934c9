//! Domain entities - core business objects

mod address;
mod contact;
mod identity;
mod user;

pub use address::Address;
pub use contact::Contact;
pub use identity::AuthenticatedIdentity;
pub use user::User;
