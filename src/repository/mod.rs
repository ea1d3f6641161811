use rust_decimal::Decimal;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::{PropertyId, UserId};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Structured narrowing applied by [`PropertyReader::list_properties`].
///
/// Every populated field must hold for a listing to be returned; an absent
/// field places no constraint on that dimension. The status and type matches
/// are exact string comparisons, so an unknown label matches nothing.
#[derive(Debug, Clone, Default)]
pub struct PropertyListQuery {
    pub status: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl PropertyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

pub trait PropertyReader {
    /// Exact-match lookup; returns inactive records too.
    fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>>;
    /// Active listings narrowed by the query, in insertion order.
    fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<Vec<Property>>;
}

pub trait PropertyWriter {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
    /// Merges the provided fields over the record; `None` for an unknown id.
    fn update_property(
        &self,
        id: PropertyId,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Option<Property>>;
    /// Hard delete; reports whether a record existed and was removed.
    fn delete_property(&self, id: PropertyId) -> RepositoryResult<bool>;
}

pub trait InquiryWriter {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    /// Assigns a new id; performs no username-uniqueness check (callers
    /// pre-check via [`UserReader::get_user_by_username`]).
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
