//! Showcase listings inserted into a fresh store at startup.

use rust_decimal::Decimal;

use crate::domain::property::{NewProperty, PropertyStatus};
use crate::repository::PropertyWriter;
use crate::repository::errors::RepositoryResult;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn sample_listings() -> Vec<NewProperty> {
    vec![
        NewProperty {
            title: "Modern Family Home".to_string(),
            description: "Stunning modern home with gourmet kitchen, open floor plan, and \
                          premium finishes throughout. Perfect for entertaining with spacious \
                          living areas and a beautiful backyard oasis."
                .to_string(),
            price: Decimal::new(750_000, 0),
            address: "123 Maple Ridge Drive".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            property_type: "house".to_string(),
            status: Some(PropertyStatus::ForSale),
            bedrooms: Some(4),
            bathrooms: Some(Decimal::new(30, 1)),
            square_footage: Some(2_800),
            lot_size: Some(Decimal::new(25, 2)),
            year_built: Some(2_018),
            images: strings(&["/assets/a.png"]),
            amenities: strings(&[
                "Central Air",
                "Hardwood Floors",
                "Granite Countertops",
                "Walk-in Closet",
            ]),
            features: strings(&[
                "Open Floor Plan",
                "Gourmet Kitchen",
                "Master Suite",
                "Two-Car Garage",
            ]),
            is_active: Some(true),
        },
        NewProperty {
            title: "Luxury Townhome".to_string(),
            description: "Elegant townhome featuring spacious living areas, fireplace, and \
                          abundant natural light in desirable Heritage District location."
                .to_string(),
            price: Decimal::new(425_000, 0),
            address: "456 Heritage Lane".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90211".to_string(),
            property_type: "townhouse".to_string(),
            status: Some(PropertyStatus::ForSale),
            bedrooms: Some(3),
            bathrooms: Some(Decimal::new(20, 1)),
            square_footage: Some(1_950),
            lot_size: Some(Decimal::new(10, 2)),
            year_built: Some(2_015),
            images: strings(&["/assets/b.png"]),
            amenities: strings(&["Fireplace", "Patio", "Storage", "Laundry Room"]),
            features: strings(&[
                "Living Room Fireplace",
                "Private Patio",
                "Updated Kitchen",
            ]),
            is_active: Some(true),
        },
        NewProperty {
            title: "Executive Condo".to_string(),
            description: "Sophisticated downtown condo with luxurious master suite, modern \
                          amenities, and city views."
                .to_string(),
            price: Decimal::new(650_000, 0),
            address: "789 Downtown Plaza".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90212".to_string(),
            property_type: "condo".to_string(),
            status: Some(PropertyStatus::Pending),
            bedrooms: Some(2),
            bathrooms: Some(Decimal::new(20, 1)),
            square_footage: Some(1_400),
            lot_size: None,
            year_built: Some(2_020),
            images: strings(&["/assets/c.png"]),
            amenities: strings(&["City Views", "Balcony", "Gym Access", "Concierge"]),
            features: strings(&[
                "Floor-to-Ceiling Windows",
                "Modern Appliances",
                "Master Suite",
            ]),
            is_active: Some(true),
        },
        NewProperty {
            title: "Suburban Retreat".to_string(),
            description: "Charming family home on quiet street with large yard, updated \
                          interior, and move-in ready condition."
                .to_string(),
            price: Decimal::new(595_000, 0),
            address: "321 Greenwood Estate".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90213".to_string(),
            property_type: "house".to_string(),
            status: Some(PropertyStatus::ForSale),
            bedrooms: Some(5),
            bathrooms: Some(Decimal::new(30, 1)),
            square_footage: Some(3_200),
            lot_size: Some(Decimal::new(50, 2)),
            year_built: Some(2_010),
            images: strings(&["/assets/d.png"]),
            amenities: strings(&[
                "Large Yard",
                "Updated Kitchen",
                "Hardwood Floors",
                "Three-Car Garage",
            ]),
            features: strings(&[
                "Spacious Layout",
                "Family Room",
                "Formal Dining",
                "Home Office",
            ]),
            is_active: Some(true),
        },
        NewProperty {
            title: "Historic Townhouse".to_string(),
            description: "Beautifully restored historic townhouse with original character, \
                          modern updates, and prime Old Town location."
                .to_string(),
            price: Decimal::new(485_000, 0),
            address: "654 Old Town Square".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90214".to_string(),
            property_type: "townhouse".to_string(),
            status: Some(PropertyStatus::ForSale),
            bedrooms: Some(3),
            bathrooms: Some(Decimal::new(20, 1)),
            square_footage: Some(2_100),
            lot_size: Some(Decimal::new(8, 2)),
            year_built: Some(1_925),
            images: strings(&["/assets/e.png"]),
            amenities: strings(&[
                "Historic Character",
                "Updated Systems",
                "Original Details",
                "Courtyard",
            ]),
            features: strings(&[
                "Restored Original Features",
                "Modern Kitchen",
                "Exposed Brick",
            ]),
            is_active: Some(true),
        },
        NewProperty {
            title: "Contemporary Villa".to_string(),
            description: "Stunning contemporary home with panoramic views, premium materials, \
                          and resort-style backyard."
                .to_string(),
            price: Decimal::new(950_000, 0),
            address: "987 Hillside Heights".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip_code: "90215".to_string(),
            property_type: "house".to_string(),
            status: Some(PropertyStatus::Sold),
            bedrooms: Some(4),
            bathrooms: Some(Decimal::new(40, 1)),
            square_footage: Some(3_500),
            lot_size: Some(Decimal::new(75, 2)),
            year_built: Some(2_021),
            images: strings(&["/assets/b.png"]),
            amenities: strings(&["Panoramic Views", "Pool", "Spa", "Wine Cellar"]),
            features: strings(&[
                "Gourmet Kitchen",
                "Master Suite",
                "Home Theater",
                "Guest House",
            ]),
            is_active: Some(true),
        },
    ]
}

/// Inserts the showcase listings through the ordinary creation path.
///
/// Returns the number of listings created.
pub fn seed_sample_properties<R>(repo: &R) -> RepositoryResult<usize>
where
    R: PropertyWriter + ?Sized,
{
    let listings = sample_listings();
    let count = listings.len();
    for listing in &listings {
        repo.create_property(listing)?;
    }
    Ok(count)
}
