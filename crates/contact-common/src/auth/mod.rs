//! Credentials: password hashing and opaque session tokens

mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordService};
pub use token::{generate_token, TOKEN_BYTES};
