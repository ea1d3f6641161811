use serde::Deserialize;
use validator::Validate;

use crate::domain::inquiry::NewInquiry;
use crate::domain::types::{PropertyId, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Request body for submitting a contact inquiry.
pub struct CreateInquiryForm {
    /// Optional listing the inquiry is about; not checked for existence.
    pub property_id: Option<PropertyId>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

impl TryFrom<CreateInquiryForm> for NewInquiry {
    type Error = TypeConstraintError;

    fn try_from(form: CreateInquiryForm) -> Result<Self, Self::Error> {
        NewInquiry::new(
            form.property_id,
            form.name,
            form.email,
            form.phone,
            form.message,
        )
    }
}
