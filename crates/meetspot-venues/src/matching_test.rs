use chrono::NaiveDate;
use meetspot_core::{HoursInterval, VenueHours, VenueType, WeeklySchedule};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

const ORIGIN: Coordinate = Coordinate::new(35.994, -78.8986);

// 2026-10-12 is a Monday.
fn monday_noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 12)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn venue(id: &str, category: &str, rating: Option<f64>) -> VenueRecord {
    let mut v = VenueRecord::new(id, format!("{category} {id}"), category, VenueType::Default, ORIGIN);
    v.rating = rating;
    v
}

fn open_all_day(mut v: VenueRecord) -> VenueRecord {
    let day = vec![HoursInterval::new("00:00", "23:59")];
    v.hours = Some(VenueHours {
        weekly: Some(WeeklySchedule {
            mon: day.clone(),
            tue: day.clone(),
            wed: day.clone(),
            thu: day.clone(),
            fri: day.clone(),
            sat: day.clone(),
            sun: day,
        }),
        timezone: None,
        holiday_closed_today: false,
    });
    v
}

fn request(user: &[&str], connection: &[&str]) -> MatchRequest {
    MatchRequest::new(user, connection, ORIGIN, monday_noon())
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// -----------------------------------------------------------------------
// personalized_venues
// -----------------------------------------------------------------------

#[test]
fn empty_catalog_yields_empty_results() {
    let results = personalized_venues(&request(&["coffee"], &["art"]), &[], &mut rng());
    assert!(results.is_empty());
}

#[test]
fn shared_interest_on_open_nearby_top_rated_venue_scores_100() {
    let catalog = vec![open_all_day(venue("a", "French Café", Some(5.0)))];
    let results = personalized_venues(&request(&["coffee"], &["tea"]), &catalog, &mut rng());
    assert_eq!(results.len(), 1);
    let top = &results[0];
    assert_eq!(top.score(), 100);
    assert!((top.breakdown.category - 50.0).abs() < f64::EPSILON);
    assert!((top.breakdown.rating - 30.0).abs() < f64::EPSILON);
    assert!((top.breakdown.distance - 20.0).abs() < f64::EPSILON);
    assert!((top.breakdown.open_now - 10.0).abs() < f64::EPSILON);
}

#[test]
fn category_match_without_both_people_grounded_gets_no_bonus() {
    // Only the "nature" side maps onto "park".
    let catalog = vec![venue("p", "Park", Some(0.0))];
    let results = personalized_venues(&request(&["coffee"], &["nature"]), &catalog, &mut rng());
    assert!((results[0].breakdown.category - 40.0).abs() < f64::EPSILON);
    assert_eq!(results[0].score(), 60);
}

#[test]
fn bonus_requires_each_side_to_map_independently() {
    // Both lists contain "nature"; each independently grounds on "park".
    let catalog = vec![venue("p", "Nature Park", Some(0.0))];
    let results = personalized_venues(
        &request(&["coffee", "nature"], &["nature"]),
        &catalog,
        &mut rng(),
    );
    assert!((results[0].breakdown.category - 50.0).abs() < f64::EPSILON);
}

#[test]
fn unmapped_interests_score_no_category_points_and_keep_venue_tags() {
    let mut v = venue("x", "Theater", Some(4.0));
    v.tags = vec!["performances".into(), "shows".into(), "events".into(), "extra".into()];
    let results = personalized_venues(&request(&["knitting"], &["origami"]), &[v], &mut rng());
    let top = &results[0];
    assert!(top.breakdown.category.abs() < f64::EPSILON);
    // 24 rating + 20 distance, closed
    assert_eq!(top.score(), 44);
    assert_eq!(top.venue.tags, vec!["performances", "shows", "events"]);
}

#[test]
fn suggested_tags_are_truncated_to_three() {
    let catalog = vec![venue("a", "Museum", Some(3.0))];
    let results =
        personalized_venues(&request(&["art", "history"], &["music"]), &catalog, &mut rng());
    assert_eq!(
        results[0].venue.tags,
        vec!["🎨 Creative", "🖼️ Visual", "📸 Photo-worthy"]
    );
}

#[test]
fn distance_points_decay_to_zero_at_horizon() {
    let mut far = venue("far", "Theater", Some(0.0));
    far.coordinate = Coordinate::new(ORIGIN.lat + 0.01, ORIGIN.lng);
    let results = personalized_venues(&request(&[], &[]), &[far], &mut rng());
    assert!(results[0].venue.distance_m > DISTANCE_HORIZON_M);
    assert!(results[0].breakdown.distance.abs() < f64::EPSILON);
    assert_eq!(results[0].score(), 0);
}

#[test]
fn distance_points_scale_linearly() {
    assert!((distance_points(0.0) - 20.0).abs() < f64::EPSILON);
    assert!((distance_points(400.0) - 10.0).abs() < f64::EPSILON);
    assert!(distance_points(800.0).abs() < f64::EPSILON);
    assert!(distance_points(5_000.0).abs() < f64::EPSILON);
    assert!(distance_points(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn rating_points_are_clamped() {
    assert!((rating_points(5.0) - 30.0).abs() < f64::EPSILON);
    assert!((rating_points(2.5) - 15.0).abs() < f64::EPSILON);
    assert!((rating_points(7.5) - 30.0).abs() < f64::EPSILON);
    assert!(rating_points(-1.0).abs() < f64::EPSILON);
    assert!(rating_points(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn nan_coordinates_do_not_escape_score_bounds() {
    let mut v = venue("nan", "Café", Some(5.0));
    v.coordinate = Coordinate::new(f64::NAN, f64::NAN);
    let results = personalized_venues(&request(&["coffee"], &["coffee"]), &[v], &mut rng());
    assert!(results[0].venue.distance_m.is_nan());
    assert_eq!(results[0].score(), 80);
}

#[test]
fn missing_rating_draws_placeholder_from_rng() {
    let catalog = vec![venue("a", "Café", None), venue("b", "Park", None)];
    let req = request(&["coffee"], &["nature"]);
    let first = personalized_venues(&req, &catalog, &mut rng());
    let second = personalized_venues(&req, &catalog, &mut rng());
    assert_eq!(first, second, "same seed must give the same ranking");
    for result in &first {
        let rating = result.venue.rating.unwrap();
        assert!(PLACEHOLDER_RATING.contains(&rating), "rating {rating} outside band");
    }
}

#[test]
fn open_flag_used_when_hours_absent() {
    let mut open = venue("open", "Theater", Some(0.0));
    open.open_now = true;
    let closed = venue("closed", "Theater", Some(0.0));
    let results = personalized_venues(&request(&[], &[]), &[closed, open], &mut rng());
    assert_eq!(results[0].venue.id, "open");
    assert!(results[0].venue.open_now);
    assert_eq!(results[0].score(), 30);
    assert_eq!(results[1].score(), 20);
}

#[test]
fn hours_take_precedence_over_open_flag() {
    let mut v = venue("v", "Theater", Some(0.0));
    v.open_now = true;
    v.hours = Some(VenueHours {
        weekly: Some(WeeklySchedule {
            mon: vec![HoursInterval::new("18:00", "23:00")],
            ..WeeklySchedule::default()
        }),
        timezone: None,
        holiday_closed_today: false,
    });
    let results = personalized_venues(&request(&[], &[]), &[v], &mut rng());
    assert!(!results[0].venue.open_now);
    assert!(results[0].breakdown.open_now.abs() < f64::EPSILON);
}

#[test]
fn results_sorted_truncated_and_ties_keep_catalog_order() {
    let catalog = vec![
        venue("t1", "Theater", Some(2.5)),
        venue("c1", "Café", Some(5.0)),
        venue("t2", "Theater", Some(2.5)),
        venue("t3", "Theater", Some(2.5)),
    ];
    let req = request(&["coffee"], &["coffee"]).with_max_results(3);
    let results = personalized_venues(&req, &catalog, &mut rng());
    let ids: Vec<&str> = results.iter().map(|r| r.venue.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "t1", "t2"]);
    assert!(results.windows(2).all(|w| w[0].score() >= w[1].score()));
}

#[test]
fn zero_max_results_returns_nothing() {
    let catalog = vec![venue("a", "Café", Some(5.0))];
    let req = request(&["coffee"], &["coffee"]).with_max_results(0);
    assert!(personalized_venues(&req, &catalog, &mut rng()).is_empty());
}

#[test]
fn stale_query_values_are_recomputed_and_catalog_untouched() {
    let mut v = venue("a", "Café", Some(5.0));
    v.distance_m = 12_345.0;
    v.match_score = 3;
    let catalog = vec![v.clone()];
    let results = personalized_venues(&request(&["coffee"], &[]), &catalog, &mut rng());
    assert!(results[0].venue.distance_m.abs() < f64::EPSILON);
    assert_eq!(results[0].score(), 90);
    assert_eq!(catalog[0], v);
}

#[test]
fn request_defaults_to_ten_results() {
    let req = request(&["coffee"], &["art"]);
    assert_eq!(req.max_results, DEFAULT_MAX_RESULTS);
    assert_eq!(req.user_interests, vec!["coffee"]);
    assert_eq!(req.connection_interests, vec!["art"]);
}
