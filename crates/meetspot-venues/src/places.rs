//! Place records returned by the places-search proxy.
//!
//! The proxy fans a nearby search out over several provider place types and
//! returns loosely shaped JSON. This module maps interests to those place
//! types, merges per-type batches, and turns place records into
//! [`VenueRecord`]s the matching engine can rank. No network I/O happens here.

use meetspot_core::{Coordinate, VenueRecord};
use serde::{Deserialize, Serialize};

use crate::error::VenuesError;
use crate::hours::normalize_venue_type;

/// Places kept after merging.
pub const MAX_PLACES: usize = 10;

/// Provider type searched when no interest maps to anything.
pub const FALLBACK_PLACE_TYPE: &str = "point_of_interest";

/// Interest → provider place types.
const INTEREST_PLACE_TYPES: &[(&str, &[&str])] = &[
    ("coffee", &["cafe", "coffee_shop"]),
    ("reading", &["library", "book_store"]),
    ("nature", &["park"]),
    ("food", &["restaurant"]),
    ("drinks", &["bar", "night_club"]),
    ("art", &["art_gallery", "museum"]),
    ("fitness", &["gym"]),
    ("music", &["night_club"]),
    ("shopping", &["shopping_mall", "store"]),
    ("sports", &["stadium"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    /// Provider place ID.
    pub id: String,
    pub name: String,
    /// First provider type, e.g. `"cafe"`.
    #[serde(default = "default_category")]
    pub category: String,
    pub lat: f64,
    pub lng: f64,
    /// `0.0` when the provider has no rating.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub open_now: bool,
    /// Short street address.
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

fn default_category() -> String {
    "place".to_string()
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    places: Vec<PlaceRecord>,
}

/// Provider place types to search for `interests`, deduplicated in order.
///
/// Falls back to [`FALLBACK_PLACE_TYPE`] when nothing maps.
#[must_use]
pub fn place_types_for_interests<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    let mut types: Vec<&'static str> = Vec::new();
    for interest in interests {
        let key = S::as_ref(interest).to_lowercase();
        let mapped = INTEREST_PLACE_TYPES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, t)| t)
            .unwrap_or_default();
        for &t in mapped {
            if !types.contains(&t) {
                types.push(t);
            }
        }
    }
    if types.is_empty() {
        types.push(FALLBACK_PLACE_TYPE);
    }
    types
}

/// Parse a proxy response body of the form `{"places": [...]}`.
///
/// # Errors
///
/// Returns [`VenuesError::Deserialize`] if the body is not a valid response.
pub fn parse_places(body: &str) -> Result<Vec<PlaceRecord>, VenuesError> {
    serde_json::from_str::<PlacesResponse>(body)
        .map(|r| r.places)
        .map_err(|source| VenuesError::Deserialize {
            context: "places response".to_string(),
            source,
        })
}

/// Merge per-type search batches: first occurrence of each place ID wins,
/// then best-rated first, keeping at most [`MAX_PLACES`].
#[must_use]
pub fn merge_places<I>(batches: I) -> Vec<PlaceRecord>
where
    I: IntoIterator<Item = Vec<PlaceRecord>>,
{
    let mut merged: Vec<PlaceRecord> = Vec::new();
    for place in batches.into_iter().flatten() {
        if !merged.iter().any(|p| p.id == place.id) {
            merged.push(place);
        }
    }
    merged.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    merged.truncate(MAX_PLACES);
    merged
}

/// Convert one place record into a venue.
///
/// Provider types use underscores (`"book_store"`); they become spaces in the
/// display category. A zero rating means "unrated" and maps to `None`.
#[must_use]
pub fn place_to_venue(place: PlaceRecord) -> VenueRecord {
    let category = place.category.replace('_', " ");
    let mut venue = VenueRecord::new(
        place.id,
        place.name,
        &category,
        normalize_venue_type(&category),
        Coordinate::new(place.lat, place.lng),
    );
    venue.rating = (place.rating > 0.0).then_some(place.rating);
    venue.open_now = place.open_now;
    venue.tags = place
        .types
        .iter()
        .filter(|t| **t != place.category)
        .take(3)
        .map(|t| t.replace('_', " "))
        .collect();
    venue.description = place.vicinity;
    venue
}

/// Convert place records into venues, skipping any without finite coordinates.
#[must_use]
pub fn places_to_venues(places: Vec<PlaceRecord>) -> Vec<VenueRecord> {
    places
        .into_iter()
        .filter(|place| {
            let usable = place.lat.is_finite() && place.lng.is_finite();
            if !usable {
                tracing::warn!(place_id = %place.id, "skipping place without usable coordinates");
            }
            usable
        })
        .map(place_to_venue)
        .collect()
}
