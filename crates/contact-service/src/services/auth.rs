//! Authentication gate
//!
//! Resolves a bearer token to the identity of the user holding it.

use tracing::{instrument, warn};

use contact_core::entities::AuthenticatedIdentity;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up the user whose current session token equals `token`.
    ///
    /// Fails closed: an empty, unknown, or revoked token is `Unauthorized`.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<AuthenticatedIdentity> {
        if token.is_empty() {
            return Err(ServiceError::Unauthorized);
        }

        let mut uow = self.ctx.begin().await?;
        let user = uow.users().find_by_token(token).await?;
        uow.commit().await?;

        match user {
            Some(user) => Ok(AuthenticatedIdentity::new(user.id)),
            None => {
                warn!("Rejected unknown session token");
                Err(ServiceError::Unauthorized)
            }
        }
    }
}
