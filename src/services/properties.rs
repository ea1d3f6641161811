use rust_decimal::Decimal;

use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::PropertyId;
use crate::repository::{PropertyListQuery, PropertyReader, PropertyWriter};
use crate::search::narrow_listings;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the `/api/properties` listing service.
///
/// All fields arrive as raw request text; coercion happens here. Price
/// bounds that do not parse as integers degrade to "no constraint", matching
/// the listing contract.
#[derive(Debug, Default)]
pub struct PropertiesQuery {
    pub status: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Optional free-text term applied after the structured filters.
    pub search: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_price_bound(value: Option<String>) -> Option<Decimal> {
    non_blank(value)
        .and_then(|s| s.parse::<i64>().ok())
        .map(Decimal::from)
}

/// Returns the filtered list of active listings.
///
/// Structured filters are pushed down to the repository; the free-text term
/// narrows the returned page afterwards.
pub fn list_properties<R>(repo: &R, params: PropertiesQuery) -> ServiceResult<Vec<Property>>
where
    R: PropertyReader + ?Sized,
{
    let mut query = PropertyListQuery::new();
    if let Some(status) = non_blank(params.status) {
        query = query.status(status);
    }
    if let Some(property_type) = non_blank(params.property_type) {
        query = query.property_type(property_type);
    }
    if let Some(min_price) = parse_price_bound(params.min_price) {
        query = query.min_price(min_price);
    }
    if let Some(max_price) = parse_price_bound(params.max_price) {
        query = query.max_price(max_price);
    }

    let properties = repo.list_properties(query).map_err(ServiceError::from)?;

    Ok(match non_blank(params.search) {
        Some(term) => narrow_listings(&term, properties),
        None => properties,
    })
}

/// Fetches a listing by its identifier, active or not.
pub fn get_property<R>(repo: &R, id: PropertyId) -> ServiceResult<Option<Property>>
where
    R: PropertyReader + ?Sized,
{
    repo.get_property_by_id(id).map_err(ServiceError::from)
}

/// Persists a new listing.
pub fn create_property<R>(repo: &R, new_property: &NewProperty) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    repo.create_property(new_property).map_err(ServiceError::from)
}

/// Applies a partial update; `None` when the id is unknown.
pub fn update_property<R>(
    repo: &R,
    id: PropertyId,
    updates: &UpdateProperty,
) -> ServiceResult<Option<Property>>
where
    R: PropertyWriter + ?Sized,
{
    repo.update_property(id, updates).map_err(ServiceError::from)
}

/// Removes a listing; reports whether anything was deleted.
pub fn delete_property<R>(repo: &R, id: PropertyId) -> ServiceResult<bool>
where
    R: PropertyWriter + ?Sized,
{
    repo.delete_property(id).map_err(ServiceError::from)
}
