//! User service
//!
//! Registration, login, profile, and logout.

use tracing::{info, instrument, warn};
use validator::Validate;

use contact_common::{generate_token, AppError};
use contact_core::entities::{AuthenticatedIdentity, User};

use crate::dto::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(user_id = %request.id))]
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let password_hash = self.hash_password(request.password).await?;

        let mut uow = self.ctx.begin().await?;

        if uow.users().exists(&request.id).await? {
            warn!("Registration rejected: id already taken");
            return Err(ServiceError::conflict("User already exists"));
        }

        let user = User::new(request.id, request.name);

        uow.users().create(&user, &password_hash).await?;
        uow.commit().await?;

        info!("User registered");

        Ok(UserResponse::from(user))
    }

    /// Exchange credentials for a new session token
    #[instrument(skip(self, request), fields(user_id = %request.id))]
    pub async fn login(&self, request: LoginUserRequest) -> ServiceResult<TokenResponse> {
        request.validate()?;

        let mut uow = self.ctx.begin().await?;

        let Some(password_hash) = uow.users().get_password_hash(&request.id).await? else {
            warn!("Login failed: unknown user");
            return Err(AppError::InvalidCredentials.into());
        };

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!("Login failed: password mismatch");
            return Err(e.into());
        }

        let token = generate_token();
        uow.users().set_token(&request.id, Some(&token)).await?;
        uow.commit().await?;

        info!("User logged in");

        Ok(TokenResponse { token })
    }

    /// Profile of the caller
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn current(&self, identity: &AuthenticatedIdentity) -> ServiceResult<UserResponse> {
        let mut uow = self.ctx.begin().await?;
        let user = uow
            .users()
            .find_by_id(&identity.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", &identity.user_id))?;
        uow.commit().await?;

        Ok(UserResponse::from(user))
    }

    /// Change name and/or password of the caller
    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn update(
        &self,
        identity: &AuthenticatedIdentity,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let request = request.normalize();
        request.validate()?;

        let password_hash = match request.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let mut uow = self.ctx.begin().await?;
        let mut user = uow
            .users()
            .find_by_id(&identity.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", &identity.user_id))?;

        if let Some(name) = request.name {
            user.set_name(name);
            uow.users().update(&user).await?;
        }

        if let Some(password_hash) = password_hash {
            uow.users().update_password(&user.id, &password_hash).await?;
            user.touch();
        }

        uow.commit().await?;

        info!("User updated");

        Ok(UserResponse::from(user))
    }

    /// Clear the caller's session token
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn logout(&self, identity: &AuthenticatedIdentity) -> ServiceResult<bool> {
        let mut uow = self.ctx.begin().await?;
        uow.users().set_token(&identity.user_id, None).await?;
        uow.commit().await?;

        info!("User logged out");

        Ok(true)
    }

    /// Argon2 on the blocking pool, outside any unit of work
    async fn hash_password(&self, password: String) -> ServiceResult<String> {
        let passwords = self.ctx.password_service().clone();
        let hash = tokio::task::spawn_blocking(move || passwords.hash(&password))
            .await
            .map_err(AppError::internal)??;
        Ok(hash)
    }
}
