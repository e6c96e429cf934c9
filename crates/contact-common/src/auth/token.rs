//! Opaque session tokens

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Number of random bytes behind every token
pub const TOKEN_BYTES: usize = 32;

/// Generate a fresh session token.
///
/// The token carries no meaning; it is only ever compared for equality
/// against the value stored for a user.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
