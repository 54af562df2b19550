//! Great-circle distance and proximity helpers.
//!
//! Inputs are not validated: NaN or out-of-range degrees flow through as NaN
//! distances and are the caller's problem to report.

use meetspot_core::{Coordinate, VenueRecord};
use serde::Serialize;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default search radius for [`find_nearest_venue`].
pub const DEFAULT_NEAREST_MAX_M: f64 = 150.0;

/// Haversine great-circle distance in meters.
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Render a distance for display: `"~950 m"` below a kilometer, `"~2.6 km"` above.
///
/// Meters round to the nearest 10; kilometers to one decimal, halves rounding
/// up (2550 m is `"~2.6 km"`).
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        let rounded = (meters / 10.0).round() * 10.0;
        return format!("~{rounded} m");
    }
    let km = (meters / 100.0).round() / 10.0;
    format!("~{km:.1} km")
}

/// Ordered keyword → emoji table; first match wins.
const CATEGORY_EMOJI: &[(&[&str], &str)] = &[
    (&["café", "coffee"], "☕"),
    (&["restaurant"], "🍽️"),
    (&["bar", "brewery"], "🍺"),
    (&["park", "garden"], "🌳"),
    (&["museum", "gallery"], "🎨"),
    (&["library"], "📚"),
    (&["gym"], "💪"),
    (&["music"], "🎵"),
    (&["shopping"], "🛍️"),
    (&["market"], "🛒"),
    (&["dessert", "ice cream"], "🍨"),
    (&["historic"], "🏛️"),
    (&["stadium"], "🏟️"),
    (&["mixed-use", "hangout"], "🏢"),
];

/// Map pin used when no keyword matches.
pub const FALLBACK_EMOJI: &str = "📍";

/// Emoji for a free-text venue category.
#[must_use]
pub fn category_emoji(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    CATEGORY_EMOJI
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(FALLBACK_EMOJI, |&(_, emoji)| emoji)
}

/// The venue a user is standing at, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestVenue {
    pub id: String,
    pub name: String,
    pub emoji: &'static str,
    pub distance_m: f64,
}

/// Closest venue within `max_distance_m` of `origin`.
///
/// Ties keep the earlier venue. NaN distances never qualify.
#[must_use]
pub fn find_nearest_venue(
    origin: Coordinate,
    venues: &[VenueRecord],
    max_distance_m: f64,
) -> Option<NearestVenue> {
    let mut nearest: Option<(&VenueRecord, f64)> = None;
    for venue in venues {
        let distance = distance_meters(origin, venue.coordinate);
        if distance > max_distance_m || distance.is_nan() {
            continue;
        }
        if !matches!(nearest, Some((_, best)) if best <= distance) {
            nearest = Some((venue, distance));
        }
    }

    nearest.map(|(venue, distance_m)| NearestVenue {
        id: venue.id.clone(),
        name: venue.name.clone(),
        emoji: category_emoji(&venue.category),
        distance_m,
    })
}

#[cfg(test)]
mod tests {
    use meetspot_core::VenueType;

    use super::*;

    fn venue_at(id: &str, category: &str, lat: f64, lng: f64) -> VenueRecord {
        VenueRecord::new(
            id,
            format!("Venue {id}"),
            category,
            VenueType::Default,
            Coordinate::new(lat, lng),
        )
    }

    #[test]
    fn distance_to_self_is_zero() {
        for c in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(35.994, -78.8986),
            Coordinate::new(-89.9, 179.9),
        ] {
            assert!(distance_meters(c, c).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(36.0019, -78.9384);
        let b = Coordinate::new(35.9940, -78.8986);
        assert!((distance_meters(a, b) - distance_meters(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn nan_input_propagates() {
        let d = distance_meters(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0));
        assert!(d.is_nan());
    }

    #[test]
    fn format_distance_meters_and_kilometers() {
        assert_eq!(format_distance(950.0), "~950 m");
        assert_eq!(format_distance(1000.0), "~1.0 km");
        assert_eq!(format_distance(2550.0), "~2.6 km");
    }

    #[test]
    fn format_distance_rounds_to_ten_meters() {
        assert_eq!(format_distance(0.0), "~0 m");
        assert_eq!(format_distance(44.0), "~40 m");
        assert_eq!(format_distance(45.0), "~50 m");
        assert_eq!(format_distance(996.0), "~1000 m");
    }

    #[test]
    fn category_emoji_first_rule_wins() {
        assert_eq!(category_emoji("Coffee Shop"), "☕");
        // "Juice Bar" hits the bar rule before anything else
        assert_eq!(category_emoji("Juice Bar"), "🍺");
        assert_eq!(category_emoji("Art Gallery"), "🎨");
        assert_eq!(category_emoji("Theater"), FALLBACK_EMOJI);
    }

    #[test]
    fn nearest_venue_within_radius() {
        let origin = Coordinate::new(36.0, -78.9);
        let venues = vec![
            venue_at("far", "Park", 36.01, -78.9),
            venue_at("near", "Cafe", 36.0005, -78.9),
            venue_at("nearer", "Library", 36.0002, -78.9),
        ];
        let nearest = find_nearest_venue(origin, &venues, DEFAULT_NEAREST_MAX_M).unwrap();
        assert_eq!(nearest.id, "nearer");
        assert_eq!(nearest.emoji, "📚");
        assert!(nearest.distance_m < 30.0);
    }

    #[test]
    fn nearest_venue_none_outside_radius() {
        let origin = Coordinate::new(36.0, -78.9);
        let venues = vec![venue_at("far", "Park", 36.01, -78.9)];
        assert!(find_nearest_venue(origin, &venues, DEFAULT_NEAREST_MAX_M).is_none());
        assert!(find_nearest_venue(origin, &[], DEFAULT_NEAREST_MAX_M).is_none());
    }

    #[test]
    fn nearest_venue_ties_keep_earlier_and_skip_nan() {
        let origin = Coordinate::new(36.0, -78.9);
        let venues = vec![
            venue_at("broken", "Coffee Shop", f64::NAN, f64::NAN),
            venue_at("first", "Coffee Shop", 36.0003, -78.9),
            venue_at("second", "Park", 36.0003, -78.9),
        ];
        let nearest = find_nearest_venue(origin, &venues, DEFAULT_NEAREST_MAX_M).unwrap();
        assert_eq!(nearest.id, "first");
        assert_eq!(nearest.emoji, "☕");
    }
}
