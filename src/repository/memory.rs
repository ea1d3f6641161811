//! In-memory repository backing the listing service.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::{InquiryId, PropertyId, UserId};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    InquiryWriter, PropertyListQuery, PropertyReader, PropertyWriter, UserReader, UserWriter,
};

/// Process-lifetime store shared by all request handlers.
///
/// Entities are kept in insertion order; lookups and filters are linear
/// scans, sufficient for the few thousand records this service holds. Each
/// operation takes the store mutex once, so every create/update/delete is
/// atomic with respect to itself. Construct one instance at startup (or per
/// test) and hand clones to whoever needs access; clones share the same
/// store.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    store: Arc<Mutex<MemoryStore>>,
}

#[derive(Debug, Default)]
struct MemoryStore {
    users: Vec<User>,
    properties: Vec<Property>,
    inquiries: Vec<Inquiry>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> RepositoryResult<MutexGuard<'_, MemoryStore>> {
        Ok(self.store.lock()?)
    }
}

impl PropertyReader for MemoryRepository {
    fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>> {
        let store = self.store()?;
        Ok(store.properties.iter().find(|p| p.id == id).cloned())
    }

    fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<Vec<Property>> {
        let store = self.store()?;
        let properties = store
            .properties
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|status| p.status.as_str() == status)
            })
            .filter(|p| {
                query
                    .property_type
                    .as_deref()
                    .is_none_or(|property_type| p.property_type == property_type)
            })
            .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect();
        Ok(properties)
    }
}

impl PropertyWriter for MemoryRepository {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property> {
        let mut store = self.store()?;
        let now = Utc::now().naive_utc();
        let property = Property {
            id: PropertyId::new(),
            title: new_property.title.clone(),
            description: new_property.description.clone(),
            price: new_property.price,
            address: new_property.address.clone(),
            city: new_property.city.clone(),
            state: new_property.state.clone(),
            zip_code: new_property.zip_code.clone(),
            property_type: new_property.property_type.clone(),
            status: new_property.status.unwrap_or_default(),
            bedrooms: new_property.bedrooms,
            bathrooms: new_property.bathrooms,
            square_footage: new_property.square_footage,
            lot_size: new_property.lot_size,
            year_built: new_property.year_built,
            images: new_property.images.clone(),
            amenities: new_property.amenities.clone(),
            features: new_property.features.clone(),
            is_active: new_property.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        store.properties.push(property.clone());
        Ok(property)
    }

    fn update_property(
        &self,
        id: PropertyId,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Option<Property>> {
        let mut store = self.store()?;
        let Some(property) = store.properties.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &updates.title {
            property.title = title.clone();
        }
        if let Some(description) = &updates.description {
            property.description = description.clone();
        }
        if let Some(price) = updates.price {
            property.price = price;
        }
        if let Some(address) = &updates.address {
            property.address = address.clone();
        }
        if let Some(city) = &updates.city {
            property.city = city.clone();
        }
        if let Some(state) = &updates.state {
            property.state = state.clone();
        }
        if let Some(zip_code) = &updates.zip_code {
            property.zip_code = zip_code.clone();
        }
        if let Some(property_type) = &updates.property_type {
            property.property_type = property_type.clone();
        }
        if let Some(status) = updates.status {
            property.status = status;
        }
        if let Some(bedrooms) = updates.bedrooms {
            property.bedrooms = Some(bedrooms);
        }
        if let Some(bathrooms) = updates.bathrooms {
            property.bathrooms = Some(bathrooms);
        }
        if let Some(square_footage) = updates.square_footage {
            property.square_footage = Some(square_footage);
        }
        if let Some(lot_size) = updates.lot_size {
            property.lot_size = Some(lot_size);
        }
        if let Some(year_built) = updates.year_built {
            property.year_built = Some(year_built);
        }
        if let Some(images) = &updates.images {
            property.images = images.clone();
        }
        if let Some(amenities) = &updates.amenities {
            property.amenities = amenities.clone();
        }
        if let Some(features) = &updates.features {
            property.features = features.clone();
        }
        if let Some(is_active) = updates.is_active {
            property.is_active = is_active;
        }
        property.updated_at = Utc::now().naive_utc();

        Ok(Some(property.clone()))
    }

    fn delete_property(&self, id: PropertyId) -> RepositoryResult<bool> {
        let mut store = self.store()?;
        let before = store.properties.len();
        store.properties.retain(|p| p.id != id);
        Ok(store.properties.len() < before)
    }
}

impl InquiryWriter for MemoryRepository {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry> {
        let mut store = self.store()?;
        let inquiry = Inquiry {
            id: InquiryId::new(),
            property_id: new_inquiry.property_id,
            name: new_inquiry.name.clone(),
            email: new_inquiry.email.clone(),
            phone: new_inquiry.phone.clone(),
            message: new_inquiry.message.clone(),
            created_at: Utc::now().naive_utc(),
        };
        store.inquiries.push(inquiry.clone());
        Ok(inquiry)
    }
}

impl UserReader for MemoryRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let store = self.store()?;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let store = self.store()?;
        Ok(store.users.iter().find(|u| u.username == username).cloned())
    }
}

impl UserWriter for MemoryRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        let mut store = self.store()?;
        let user = User {
            id: UserId::new(),
            username: new_user.username.clone(),
            password: new_user.password.clone(),
        };
        store.users.push(user.clone());
        Ok(user)
    }
}
