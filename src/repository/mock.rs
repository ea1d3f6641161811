//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::{PropertyId, UserId};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    InquiryWriter, PropertyListQuery, PropertyReader, PropertyWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl PropertyReader for Repository {
        fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>>;
        fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<Vec<Property>>;
    }

    impl PropertyWriter for Repository {
        fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
        fn update_property(
            &self,
            id: PropertyId,
            updates: &UpdateProperty,
        ) -> RepositoryResult<Option<Property>>;
        fn delete_property(&self, id: PropertyId) -> RepositoryResult<bool>;
    }

    impl InquiryWriter for Repository {
        fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}
