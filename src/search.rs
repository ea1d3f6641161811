//! Free-text narrowing applied on top of the structured listing filters.

use crate::domain::property::Property;

/// Keeps only listings whose title, address, city, or description contains
/// the term, case-insensitively.
///
/// A blank term keeps the input unchanged. Pure and deterministic in
/// (term, listings); callers re-apply it whenever either input changes
/// rather than caching the result.
pub fn narrow_listings(term: &str, properties: Vec<Property>) -> Vec<Property> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return properties;
    }
    properties
        .into_iter()
        .filter(|property| {
            property.title.to_lowercase().contains(&term)
                || property.address.to_lowercase().contains(&term)
                || property.city.to_lowercase().contains(&term)
                || property.description.to_lowercase().contains(&term)
        })
        .collect()
}
