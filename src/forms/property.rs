use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::property::{NewProperty, PropertyStatus, UpdateProperty};
use crate::domain::types::{NonEmptyString, TypeConstraintError};

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, TypeConstraintError> {
    if value < Decimal::ZERO {
        return Err(TypeConstraintError::InvalidValue(format!(
            "{field} must not be negative"
        )));
    }
    Ok(value)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Request body for creating a listing.
pub struct CreatePropertyForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub price: Decimal,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub zip_code: String,
    #[validate(length(min = 1))]
    pub property_type: String,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub square_footage: Option<u32>,
    pub lot_size: Option<Decimal>,
    pub year_built: Option<i32>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl TryFrom<CreatePropertyForm> for NewProperty {
    type Error = TypeConstraintError;

    /// Trims text fields and enforces the non-negative amount invariants.
    fn try_from(form: CreatePropertyForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: NonEmptyString::new(form.title)?.into_inner(),
            description: NonEmptyString::new(form.description)?.into_inner(),
            price: non_negative("price", form.price)?,
            address: NonEmptyString::new(form.address)?.into_inner(),
            city: NonEmptyString::new(form.city)?.into_inner(),
            state: NonEmptyString::new(form.state)?.into_inner(),
            zip_code: NonEmptyString::new(form.zip_code)?.into_inner(),
            property_type: NonEmptyString::new(form.property_type)?.into_inner(),
            status: form.status,
            bedrooms: form.bedrooms,
            bathrooms: form
                .bathrooms
                .map(|v| non_negative("bathrooms", v))
                .transpose()?,
            square_footage: form.square_footage,
            lot_size: form
                .lot_size
                .map(|v| non_negative("lotSize", v))
                .transpose()?,
            year_built: form.year_built,
            images: form.images.unwrap_or_default(),
            amenities: form.amenities.unwrap_or_default(),
            features: form.features.unwrap_or_default(),
            is_active: form.is_active,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Request body for partially updating a listing. Any subset of fields.
pub struct UpdatePropertyForm {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    #[validate(length(min = 1))]
    pub zip_code: Option<String>,
    #[validate(length(min = 1))]
    pub property_type: Option<String>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub square_footage: Option<u32>,
    pub lot_size: Option<Decimal>,
    pub year_built: Option<i32>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdatePropertyForm> for UpdateProperty {
    type Error = TypeConstraintError;

    /// Each provided field is checked individually; absent fields stay
    /// untouched, so an invalid payload changes nothing.
    fn try_from(form: UpdatePropertyForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: form
                .title
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            description: form
                .description
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            price: form.price.map(|v| non_negative("price", v)).transpose()?,
            address: form
                .address
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            city: form
                .city
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            state: form
                .state
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            zip_code: form
                .zip_code
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            property_type: form
                .property_type
                .map(|v| NonEmptyString::new(v).map(NonEmptyString::into_inner))
                .transpose()?,
            status: form.status,
            bedrooms: form.bedrooms,
            bathrooms: form
                .bathrooms
                .map(|v| non_negative("bathrooms", v))
                .transpose()?,
            square_footage: form.square_footage,
            lot_size: form
                .lot_size
                .map(|v| non_negative("lotSize", v))
                .transpose()?,
            year_built: form.year_built,
            images: form.images,
            amenities: form.amenities,
            features: form.features,
            is_active: form.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form() -> CreatePropertyForm {
        CreatePropertyForm {
            title: "  Modern Family Home  ".to_string(),
            description: "Open floor plan".to_string(),
            price: Decimal::new(750_000, 0),
            address: "123 Maple Ridge Drive".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            property_type: "house".to_string(),
            status: None,
            bedrooms: Some(4),
            bathrooms: Some(Decimal::new(30, 1)),
            square_footage: Some(2_800),
            lot_size: None,
            year_built: Some(2_018),
            images: None,
            amenities: None,
            features: None,
            is_active: None,
        }
    }

    #[test]
    fn create_conversion_trims_and_defaults_lists() {
        let new_property = NewProperty::try_from(create_form()).expect("valid form");
        assert_eq!(new_property.title, "Modern Family Home");
        assert!(new_property.images.is_empty());
        assert!(new_property.amenities.is_empty());
        assert_eq!(new_property.status, None);
    }

    #[test]
    fn create_conversion_rejects_negative_price() {
        let mut form = create_form();
        form.price = Decimal::new(-1, 0);
        assert!(NewProperty::try_from(form).is_err());
    }

    #[test]
    fn create_conversion_rejects_blank_title() {
        let mut form = create_form();
        form.title = "   ".to_string();
        assert_eq!(
            NewProperty::try_from(form).unwrap_err(),
            TypeConstraintError::EmptyString
        );
    }

    #[test]
    fn update_conversion_checks_only_provided_fields() {
        let form = UpdatePropertyForm {
            price: Some(Decimal::new(600_000, 0)),
            ..Default::default()
        };
        let updates = UpdateProperty::try_from(form).expect("valid form");
        assert_eq!(updates.price, Some(Decimal::new(600_000, 0)));
        assert_eq!(updates.title, None);

        let form = UpdatePropertyForm {
            lot_size: Some(Decimal::new(-25, 2)),
            ..Default::default()
        };
        assert!(UpdateProperty::try_from(form).is_err());
    }
}
