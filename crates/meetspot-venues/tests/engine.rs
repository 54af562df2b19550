use chrono::{NaiveDate, NaiveDateTime};
use meetspot_core::{Coordinate, DEFAULT_CENTER};
use meetspot_venues::{
    find_nearest_venue, format_distance, generate_catalog, personalized_venues, venue_status,
    CatalogSettings, MatchRequest,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// 2026-10-14 is a Wednesday.
fn wednesday(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

#[test]
fn generated_catalog_ranks_within_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let catalog = generate_catalog(DEFAULT_CENTER, &CatalogSettings::default(), &mut rng);

    let request = MatchRequest::new(
        &["coffee", "art", "nature"],
        &["coffee", "books"],
        DEFAULT_CENTER,
        wednesday(14),
    )
    .with_max_results(8);
    let results = personalized_venues(&request, &catalog, &mut rng);

    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.score() <= 100));
    assert!(results.windows(2).all(|w| w[0].score() >= w[1].score()));
    assert!(results.iter().all(|r| r.venue.rating.is_some()));
    // Every venue carries the standard hours, open 09:00-21:00 on Wednesdays.
    assert!(results.iter().all(|r| r.venue.open_now));
}

#[test]
fn top_result_status_and_distance_agree_with_ranking() {
    let mut rng = StdRng::seed_from_u64(3);
    let catalog = generate_catalog(DEFAULT_CENTER, &CatalogSettings::default(), &mut rng);
    let now = wednesday(22);

    let request = MatchRequest::new(&["food"], &["drinks"], DEFAULT_CENTER, now);
    let results = personalized_venues(&request, &catalog, &mut rng);
    let top = &results[0].venue;

    let status = venue_status(top, now);
    assert!(!status.open);
    assert_eq!(status.open, top.open_now);
    assert_eq!(status.label, "Closed · opens tomorrow");

    let label = format_distance(top.distance_m);
    assert!(label.starts_with('~'));
    assert!(label.ends_with(" m") || label.ends_with(" km"));
}

#[test]
fn nearest_venue_at_central_park() {
    let mut rng = StdRng::seed_from_u64(11);
    let settings = CatalogSettings {
        generated_count: 0,
        radius_deg: 0.03,
    };
    let catalog = generate_catalog(DEFAULT_CENTER, &settings, &mut rng);

    let nearest = find_nearest_venue(Coordinate::new(35.994, -78.8986), &catalog, 150.0).unwrap();
    assert_eq!(nearest.name, "Durham Central Park");
    assert_eq!(nearest.emoji, "🌳");
    assert!(nearest.distance_m < 1.0);

    assert!(find_nearest_venue(Coordinate::new(36.2, -78.5), &catalog, 150.0).is_none());
}
