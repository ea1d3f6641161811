use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::repository::InquiryWriter;
use crate::services::{ServiceError, ServiceResult};

/// Persists a new contact inquiry.
///
/// A `property_id` pointing at a listing that no longer exists is accepted;
/// the reference is deliberately weak.
pub fn create_inquiry<R>(repo: &R, new_inquiry: &NewInquiry) -> ServiceResult<Inquiry>
where
    R: InquiryWriter + ?Sized,
{
    repo.create_inquiry(new_inquiry).map_err(ServiceError::from)
}
