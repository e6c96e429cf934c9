//! Address model -> entity mapper

use contact_core::entities::Address;

use crate::models::AddressModel;

impl From<AddressModel> for Address {
    fn from(model: AddressModel) -> Self {
        Address {
            id: model.id,
            contact_id: model.contact_id,
            street: model.street,
            city: model.city,
            province: model.province,
            postal_code: model.postal_code,
            country: model.country,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
