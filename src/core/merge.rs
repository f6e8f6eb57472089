use std::collections::HashMap;

use crate::models::{Cuisine, Restaurant, RestaurantRecord};

/// Known-bad restaurant names in the source data and their replacements.
///
/// Matched against the whole name, never as a substring.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("Hearty ChowClick", "Hearty Chow Click"),
    (
        "Spicy PalaceClick to check domain availability.",
        "Spicy Palace Click",
    ),
];

/// Join restaurants with their cuisine into one denormalized table
///
/// Inner join on `cuisine_id == id`: restaurants whose cuisine cannot be
/// resolved are dropped without error. Output keeps restaurant order.
pub fn merge_dataset(restaurants: &[Restaurant], cuisines: &[Cuisine]) -> Vec<RestaurantRecord> {
    let mut by_id: HashMap<u32, Vec<&str>> = HashMap::with_capacity(cuisines.len());
    for cuisine in cuisines {
        by_id.entry(cuisine.id).or_default().push(cuisine.name.as_str());
    }

    let mut merged = Vec::with_capacity(restaurants.len());
    let mut orphans = 0usize;

    for restaurant in restaurants {
        let Some(names) = restaurant.cuisine_id.and_then(|id| by_id.get(&id)) else {
            orphans += 1;
            continue;
        };

        let name = correct_name(&restaurant.name);
        for cuisine in names {
            merged.push(RestaurantRecord {
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                customer_rating: restaurant.customer_rating,
                distance: restaurant.distance,
                price: restaurant.price,
            });
        }
    }

    tracing::debug!(
        "Merged {} restaurants with {} cuisines into {} rows ({} without a cuisine)",
        restaurants.len(),
        cuisines.len(),
        merged.len(),
        orphans
    );

    merged
}

#[inline]
fn correct_name(name: &str) -> &str {
    NAME_CORRECTIONS
        .iter()
        .find(|(bad, _)| *bad == name)
        .map(|(_, good)| *good)
        .unwrap_or(name)
}
