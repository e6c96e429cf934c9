//! Address service
//!
//! Every operation resolves the parent contact through the caller first,
//! then the address through that contact.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use contact_core::entities::{Address, AuthenticatedIdentity};
use contact_core::traits::UnitOfWork;

use crate::dto::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};

use super::contact::owned_contact;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

async fn owned_address(
    uow: &mut dyn UnitOfWork,
    contact_id: Uuid,
    address_id: Uuid,
) -> ServiceResult<Address> {
    uow.addresses()
        .find_by_id_and_contact(address_id, contact_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Address", address_id))
}

/// Address service
pub struct AddressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddressService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add an address to one of the caller's contacts
    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn create(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
        request: CreateAddressRequest,
    ) -> ServiceResult<AddressResponse> {
        let request = request.normalize();
        request.validate()?;

        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, true).await?;

        let address = Address::new(self.ctx.generate_id(), contact.id, request.country)
            .with_street(request.street)
            .with_city(request.city)
            .with_province(request.province)
            .with_postal_code(request.postal_code);

        uow.addresses().create(&address).await?;
        uow.commit().await?;

        info!(address_id = %address.id, "Address created");

        Ok(AddressResponse::from(address))
    }

    /// All addresses of one of the caller's contacts
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn list(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
    ) -> ServiceResult<Vec<AddressResponse>> {
        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, false).await?;
        let addresses = uow.addresses().find_by_contact(contact.id).await?;
        uow.commit().await?;

        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn get(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
        address_id: Uuid,
    ) -> ServiceResult<AddressResponse> {
        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, false).await?;
        let address = owned_address(uow.as_mut(), contact.id, address_id).await?;
        uow.commit().await?;

        Ok(AddressResponse::from(address))
    }

    #[instrument(skip(self, identity, request), fields(user_id = %identity.user_id))]
    pub async fn update(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
        address_id: Uuid,
        request: UpdateAddressRequest,
    ) -> ServiceResult<AddressResponse> {
        let request = request.normalize();
        request.validate()?;

        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, true).await?;
        let mut address = owned_address(uow.as_mut(), contact.id, address_id).await?;

        address.street = request.street;
        address.city = request.city;
        address.province = request.province;
        address.postal_code = request.postal_code;
        address.country = request.country;
        address.touch();

        uow.addresses().update(&address).await?;
        uow.commit().await?;

        info!(address_id = %address.id, "Address updated");

        Ok(AddressResponse::from(address))
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub async fn delete(
        &self,
        identity: &AuthenticatedIdentity,
        contact_id: Uuid,
        address_id: Uuid,
    ) -> ServiceResult<bool> {
        let mut uow = self.ctx.begin().await?;
        let contact = owned_contact(uow.as_mut(), contact_id, &identity.user_id, true).await?;
        let address = owned_address(uow.as_mut(), contact.id, address_id).await?;

        uow.addresses().delete(address.id, contact.id).await?;
        uow.commit().await?;

        info!(address_id = %address.id, "Address deleted");

        Ok(true)
    }
}
