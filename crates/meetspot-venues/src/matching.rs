//! Venue scoring and ranking for a pair of interest profiles.
//!
//! A score is the sum of four bounded components:
//!
//! | Component | Points |
//! |-----------|--------|
//! | Category alignment | 0, 40, or 50 with the shared-interest bonus |
//! | Rating | `rating / 5 × 30` |
//! | Distance | 20 at the origin, falling linearly to 0 at 800 m |
//! | Open now | 10 |
//!
//! The shared-interest bonus can lift the raw sum to 110; the rounded score
//! is capped so it always lands in `0..=100`. [`ScoreBreakdown`] keeps the
//! uncapped components.

use std::cmp::Reverse;
use std::ops::Range;

use chrono::NaiveDateTime;
use meetspot_core::{Coordinate, MatchResult, ScoreBreakdown, VenueRecord};
use rand::Rng;

use crate::geo::distance_meters;
use crate::hours::venue_status;
use crate::interests::{categories_for_interests, combined_interests, tags_for_interests};

pub const DEFAULT_MAX_RESULTS: usize = 10;

const CATEGORY_POINTS: f64 = 40.0;
const SHARED_INTEREST_POINTS: f64 = 10.0;
const RATING_POINTS: f64 = 30.0;
const MAX_RATING: f64 = 5.0;
const DISTANCE_POINTS: f64 = 20.0;
/// Venues at or beyond this distance earn no distance points.
pub const DISTANCE_HORIZON_M: f64 = 800.0;
const OPEN_NOW_POINTS: f64 = 10.0;
/// Stand-in rating band for venues whose source supplied none.
pub const PLACEHOLDER_RATING: Range<f64> = 4.2..4.8;
/// Suggested tags attached to each result.
const RESULT_TAG_LIMIT: usize = 3;

/// One ranking request for two people meeting up.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub user_interests: Vec<String>,
    pub connection_interests: Vec<String>,
    /// Reference point distances are measured from.
    pub origin: Coordinate,
    /// Venue-local wall-clock time used for open-now checks.
    pub now: NaiveDateTime,
    pub max_results: usize,
}

impl MatchRequest {
    pub fn new<S: AsRef<str>>(
        user_interests: &[S],
        connection_interests: &[S],
        origin: Coordinate,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            user_interests: user_interests.iter().map(|s| S::as_ref(s).to_string()).collect(),
            connection_interests: connection_interests
                .iter()
                .map(|s| S::as_ref(s).to_string())
                .collect(),
            origin,
            now,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Score every venue in `catalog` for `request`, best first, truncated to
/// `request.max_results`.
///
/// `catalog` is not modified. Each result carries a fresh copy of its venue
/// with `distance_m`, `match_score`, `tags`, `open_now` and `rating` set for
/// this request. Ties keep catalog order. `rng` is drawn from only for venues
/// without a rating.
pub fn personalized_venues<R: Rng>(
    request: &MatchRequest,
    catalog: &[VenueRecord],
    rng: &mut R,
) -> Vec<MatchResult> {
    let pooled = combined_interests(&request.user_interests, &request.connection_interests);
    let target_categories = categories_for_interests(&pooled);
    let suggested_tags = tags_for_interests(&pooled);

    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|venue| {
            let category = venue.category.to_lowercase();
            let distance_m = distance_meters(request.origin, venue.coordinate);
            let rating = venue
                .rating
                .unwrap_or_else(|| rng.random_range(PLACEHOLDER_RATING));
            let open_now = if venue.hours.is_some() {
                venue_status(venue, request.now).open
            } else {
                venue.open_now
            };

            let breakdown = ScoreBreakdown {
                category: category_points(
                    &category,
                    &target_categories,
                    &request.user_interests,
                    &request.connection_interests,
                ),
                rating: rating_points(rating),
                distance: distance_points(distance_m),
                open_now: if open_now { OPEN_NOW_POINTS } else { 0.0 },
            };

            let mut ranked = venue.clone();
            ranked.distance_m = distance_m;
            ranked.match_score = round_score(breakdown.total());
            ranked.tags = result_tags(&suggested_tags, venue);
            ranked.open_now = open_now;
            ranked.rating = Some(rating);

            MatchResult {
                venue: ranked,
                breakdown,
            }
        })
        .collect();

    // Stable sort: equal scores keep catalog order.
    results.sort_by_key(|r| Reverse(r.venue.match_score));
    results.truncate(request.max_results);

    tracing::debug!(
        candidates = catalog.len(),
        interests = pooled.len(),
        target_categories = target_categories.len(),
        returned = results.len(),
        top_score = results.first().map(MatchResult::score),
        "ranked venues"
    );

    results
}

/// 40 when any target keyword appears in the category, plus 10 when some
/// interest of each person independently maps onto the category.
fn category_points(
    category: &str,
    target_categories: &[&str],
    user_interests: &[String],
    connection_interests: &[String],
) -> f64 {
    if !target_categories.iter().any(|c| category.contains(c)) {
        return 0.0;
    }

    let grounded = |interest: &String| {
        categories_for_interests(std::slice::from_ref(interest))
            .iter()
            .any(|c| category.contains(c))
    };
    let shared = user_interests
        .iter()
        .any(|ui| connection_interests.iter().any(|ci| grounded(ui) && grounded(ci)));

    if shared {
        CATEGORY_POINTS + SHARED_INTEREST_POINTS
    } else {
        CATEGORY_POINTS
    }
}

fn rating_points(rating: f64) -> f64 {
    if !rating.is_finite() {
        return 0.0;
    }
    rating.clamp(0.0, MAX_RATING) / MAX_RATING * RATING_POINTS
}

/// NaN distances score zero; `f64::max` discards the NaN operand.
#[allow(clippy::manual_clamp)]
fn distance_points(distance_m: f64) -> f64 {
    (DISTANCE_POINTS - distance_m / DISTANCE_HORIZON_M * DISTANCE_POINTS)
        .max(0.0)
        .min(DISTANCE_POINTS)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}

/// Suggested interest tags, or the venue's own tags when the interests map to
/// none.
fn result_tags(suggested: &[&str], venue: &VenueRecord) -> Vec<String> {
    if suggested.is_empty() {
        venue.tags.iter().take(RESULT_TAG_LIMIT).cloned().collect()
    } else {
        suggested
            .iter()
            .take(RESULT_TAG_LIMIT)
            .map(|t| (*t).to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "matching_test.rs"]
mod tests;
