//! Venue engine: catalogs, opening hours, interest mapping, and ranking.

pub mod catalog;
pub mod error;
pub mod geo;
pub mod hours;
pub mod interests;
pub mod matching;
pub mod places;

pub use catalog::{generate_catalog, load_catalog, parse_catalog, CatalogSettings};
pub use error::VenuesError;
pub use geo::{
    category_emoji, distance_meters, find_nearest_venue, format_distance, NearestVenue,
    DEFAULT_NEAREST_MAX_M,
};
pub use hours::{format_clock, normalize_venue_type, venue_status, venue_status_at};
pub use interests::{
    categories_for_interests, combined_interests, common_interests, tags_for_interests,
};
pub use matching::{personalized_venues, MatchRequest, DEFAULT_MAX_RESULTS};
pub use places::{
    merge_places, parse_places, place_to_venue, place_types_for_interests, places_to_venues,
    PlaceRecord,
};
