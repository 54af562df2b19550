//! Venue catalogs: the synthetic Durham generator and YAML catalog files.
//!
//! The generator stands in for a live places source. Its output is
//! structurally valid but the ratings, open flags and placeholder scores are
//! random, drawn from the injected `Rng`.

mod data;
mod file;

use std::f64::consts::TAU;

use chrono::NaiveTime;
use meetspot_core::{AppConfig, Coordinate, HoursInterval, VenueHours, VenueRecord, WeeklySchedule};
use rand::Rng;

use crate::geo::distance_meters;
use crate::hours::normalize_venue_type;
use data::{
    KnownVenue, CATEGORIES, CATEGORY_TAGS, DURHAM_VENUES, FALLBACK_LANDMARKS, GENERATED_LANDMARKS,
    KNOWN_LANDMARKS,
};

pub use file::{load_catalog, parse_catalog, CatalogFile};

/// Probability that a generated venue reports itself open.
const OPEN_PROBABILITY: f64 = 0.8;
const PLACEHOLDER_SCORE: std::ops::Range<u8> = 50..90;
const KNOWN_RATING: std::ops::Range<f64> = 3.5..5.0;
const GENERATED_RATING: std::ops::Range<f64> = 3.0..5.0;
const CATALOG_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSettings {
    /// Procedural venues added after the fixed Durham list.
    pub generated_count: usize,
    /// Maximum scatter radius around the center, in degrees (0.03° ≈ 3 km).
    pub radius_deg: f64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            generated_count: 23,
            radius_deg: 0.03,
        }
    }
}

impl CatalogSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            generated_count: config.generated_venues,
            radius_deg: config.generator_radius_deg,
        }
    }
}

/// Build the synthetic catalog around `center`, sorted nearest first.
///
/// Every venue carries `distance_m` from `center`, a derived `venue_type`,
/// category tags and landmarks, and the standard weekly hours table.
pub fn generate_catalog<R: Rng>(
    center: Coordinate,
    settings: &CatalogSettings,
    rng: &mut R,
) -> Vec<VenueRecord> {
    let mut venues = Vec::with_capacity(DURHAM_VENUES.len() + settings.generated_count);

    for (i, known) in DURHAM_VENUES.iter().enumerate() {
        venues.push(known_venue(i, known, center, rng));
    }

    for i in 0..settings.generated_count {
        let angle = rng.random_range(0.0..TAU);
        let radius = rng.random::<f64>() * settings.radius_deg;
        let coordinate = Coordinate::new(
            center.lat + radius * angle.cos(),
            center.lng + radius * angle.sin(),
        );
        let category_idx = rng.random_range(0..CATEGORIES.len());
        let category = CATEGORIES[category_idx];

        let mut venue = base_venue(
            format!("durham-venue-{i}"),
            format!("{category} {}", i + 1),
            category,
            category_idx,
            coordinate,
            center,
            rng,
        );
        venue.rating = Some(rng.random_range(GENERATED_RATING));
        venue.landmarks = landmarks_for(GENERATED_LANDMARKS, category);
        venue.description = Some(format!("A wonderful {} in Durham", category.to_lowercase()));
        venues.push(venue);
    }

    venues.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

    tracing::debug!(
        known = DURHAM_VENUES.len(),
        generated = settings.generated_count,
        total = venues.len(),
        center = %center,
        "generated venue catalog"
    );

    venues
}

fn known_venue<R: Rng>(
    index: usize,
    known: &KnownVenue,
    center: Coordinate,
    rng: &mut R,
) -> VenueRecord {
    // Categories outside the generator list borrow the first tag set.
    let category_idx = CATEGORIES
        .iter()
        .position(|c| *c == known.category)
        .unwrap_or(0);

    let mut venue = base_venue(
        format!("durham-real-{index}"),
        known.name.to_string(),
        known.category,
        category_idx,
        Coordinate::new(known.lat, known.lng),
        center,
        rng,
    );
    venue.rating = Some(rng.random_range(KNOWN_RATING));
    venue.landmarks = landmarks_for(KNOWN_LANDMARKS, known.category);
    venue.description = Some(format!("{} in Durham", known.name));
    venue
}

fn base_venue<R: Rng>(
    id: String,
    name: String,
    category: &str,
    category_idx: usize,
    coordinate: Coordinate,
    center: Coordinate,
    rng: &mut R,
) -> VenueRecord {
    let open_now = rng.random_bool(OPEN_PROBABILITY);
    let tags = CATEGORY_TAGS[category_idx % CATEGORY_TAGS.len()];

    let mut venue = VenueRecord::new(
        id,
        name,
        category,
        normalize_venue_type(category),
        coordinate,
    );
    venue.distance_m = distance_meters(center, coordinate);
    venue.match_score = rng.random_range(PLACEHOLDER_SCORE);
    venue.tags = tags.iter().map(|t| (*t).to_string()).collect();
    venue.open_now = open_now;
    venue.opens_at = if open_now {
        None
    } else {
        NaiveTime::from_hms_opt(9, 0, 0)
    };
    venue.hours = Some(standard_hours());
    venue
}

fn landmarks_for(table: &[(&str, [&str; 3])], category: &str) -> Vec<String> {
    let landmarks = table
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(FALLBACK_LANDMARKS, |(_, l)| *l);
    landmarks.iter().map(|l| (*l).to_string()).collect()
}

/// Mon–Thu 09:00–21:00, Fri 09:00–22:00, Sat 10:00–22:00, Sun 10:00–20:00.
#[must_use]
pub fn standard_hours() -> VenueHours {
    let interval = |open: &str, close: &str| vec![HoursInterval::new(open, close)];
    VenueHours {
        weekly: Some(WeeklySchedule {
            mon: interval("09:00", "21:00"),
            tue: interval("09:00", "21:00"),
            wed: interval("09:00", "21:00"),
            thu: interval("09:00", "21:00"),
            fri: interval("09:00", "22:00"),
            sat: interval("10:00", "22:00"),
            sun: interval("10:00", "20:00"),
        }),
        timezone: Some(CATALOG_TIMEZONE.to_string()),
        holiday_closed_today: false,
    }
}
