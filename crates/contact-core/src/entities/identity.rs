//! Identity resolved from a bearer token

/// The caller of an authenticated request.
///
/// Only exists for the duration of a request; carries nothing but the
/// resolved user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: String,
}

impl AuthenticatedIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
