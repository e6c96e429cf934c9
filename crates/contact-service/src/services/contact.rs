//! Contact service
//!
//! CRUD and search over the caller's own contacts.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use contact_core::entities::{AuthenticatedIdentity, Contact};
use contact_core::traits::{ContactSearch, UnitOfWork};
use contact_core::value_objects::PageRequest;

use crate::dto::{
    ContactResponse, CreateContactRequest, PageMetadata, Paged, SearchContactRequest,
    UpdateContactRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fetch a contact owned by `user_id`, or NotFound.
///
/// With `lock` the row stays locked until the unit of work ends.
pub(crate) async fn owned_contact(
    uow: &mut dyn UnitOfWork,
    contact_id: Uuid,
    user_id: &str,
    lock: bool,
) -> ServiceResult<Contact> {
    let contact = if lock {
        uow.contacts().find_for_update(contact_id, user_id).await?
    } else {
        uow.contacts().find_by_id_and_user(contact_id, user_id).await?
    };
    contact.ok_or_else(|| ServiceError::not_found("Contact", contact_id))
}

/// Contact service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a contact owned by the caller
    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn create(
        &self,
        identity: &AuthenticatedIdentity,
        request: CreateContactRequest,
    ) -> ServiceResult<ContactResponse> {
        let request = request.normalize();
        request.validate()?;

        let contact = Contact::new(
            self.ctx.generate_id(),
            identity.user_id.clone(),
            request.first_name,
            request.last_name,
            request.email,
            request.phone,
        );

        let mut uow = self.ctx.begin().await?;
        uow.contacts().create(&contact).await?;
        uow.commit().await?;

        info!(contact_id = %contact.id, "Contact created");

        Ok(ContactResponse::from(contact))
    }

    /// Get one of the caller's contacts
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn get(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
    ) -> ServiceResult<ContactResponse> {
        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, false).await?;
        uow.commit().await?;

        Ok(ContactResponse::from(contact))
    }

    /// Overwrite every mutable field of one of the caller's contacts
    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn update(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
        request: UpdateContactRequest,
    ) -> ServiceResult<ContactResponse> {
        let request = request.normalize();
        request.validate()?;

        let mut uow = self.ctx.begin().await?;
        let mut contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, true).await?;

        contact.apply(
            request.first_name,
            request.last_name,
            request.email,
            request.phone,
        );
        uow.contacts().update(&contact).await?;
        uow.commit().await?;

        info!(contact_id = %contact.id, "Contact updated");

        Ok(ContactResponse::from(contact))
    }

    /// Delete one of the caller's contacts. Its addresses are left in place.
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn delete(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
    ) -> ServiceResult<bool> {
        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, true).await?;

        uow.contacts().delete(contact.id, &identity.user_id).await?;
        uow.commit().await?;

        info!(contact_id = %contact.id, "Contact deleted");

        Ok(true)
    }

    /// Search the caller's contacts
    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn search(
        &self,
        identity: &AuthenticatedIdentity,
        request: SearchContactRequest,
    ) -> ServiceResult<Paged<ContactResponse>> {
        let request = request.normalize();
        let page = PageRequest::new(request.page, request.size);

        let query = ContactSearch {
            user_id: identity.user_id.clone(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            page,
        };

        let mut uow = self.ctx.begin().await?;
        let contacts = uow.contacts().search(&query).await?;
        let total = uow.contacts().count(&query).await?;
        uow.commit().await?;

        Ok(Paged {
            items: contacts.into_iter().map(ContactResponse::from).collect(),
            paging: PageMetadata::new(page, total),
        })
    }
}
