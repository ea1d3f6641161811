use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{InquiryId, NonEmptyString, PropertyId, TypeConstraintError, normalize_email};

/// A contact request, optionally tied to a listing.
///
/// Create-only: inquiries are never updated or deleted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: InquiryId,
    /// Weak reference; the listing is not required to exist.
    pub property_id: Option<PropertyId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Inquiry`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewInquiry {
    pub property_id: Option<PropertyId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl NewInquiry {
    /// Normalizes the sender fields and sanitizes the message body.
    ///
    /// The message is stripped of HTML before the non-empty check, so a
    /// payload that is nothing but markup is rejected.
    pub fn new(
        property_id: Option<PropertyId>,
        name: String,
        email: String,
        phone: Option<String>,
        message: String,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            property_id,
            name: NonEmptyString::new(name)?.into_inner(),
            email: normalize_email(email)?,
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: NonEmptyString::new(ammonia::clean(&message))?.into_inner(),
        })
    }
}
