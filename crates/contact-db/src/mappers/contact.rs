//! Contact model -> entity mapper

use contact_core::entities::Contact;

use crate::models::ContactModel;

impl From<ContactModel> for Contact {
    fn from(model: ContactModel) -> Self {
        Contact {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
