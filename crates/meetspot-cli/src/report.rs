//! Plain-text rendering for CLI output.

use meetspot_core::{MatchResult, VenueRecord, VenueStatus};
use meetspot_venues::{category_emoji, format_distance, NearestVenue};

fn rating_label(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Join lines with a trailing newline on each.
fn block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub(crate) fn render_catalog(venues: &[VenueRecord]) -> String {
    if venues.is_empty() {
        return "no venues in catalog\n".to_string();
    }

    let mut lines = vec![format!(
        "{:<22}{:<34}{:<20}{:<10}{:<8}OPEN",
        "ID", "NAME", "CATEGORY", "DISTANCE", "RATING"
    )];
    lines.extend(venues.iter().map(|venue| {
        format!(
            "{:<22}{:<34}{:<20}{:<10}{:<8}{}",
            truncate(&venue.id, 21),
            truncate(&venue.name, 33),
            truncate(&venue.category, 19),
            format_distance(venue.distance_m),
            rating_label(venue.rating),
            if venue.open_now { "yes" } else { "no" },
        )
    }));
    block(&lines)
}

/// Ranked results, one block per venue, with the live status label.
pub(crate) fn render_matches(
    results: &[(MatchResult, VenueStatus)],
    shared_interests: &[String],
) -> String {
    let mut lines = vec![if shared_interests.is_empty() {
        "no shared interests".to_string()
    } else {
        format!("shared interests: {}", shared_interests.join(", "))
    }];

    if results.is_empty() {
        lines.push("no venues matched".to_string());
        return block(&lines);
    }

    for (rank, (result, status)) in results.iter().enumerate() {
        let venue = &result.venue;
        let b = &result.breakdown;
        lines.push(String::new());
        lines.push(format!(
            "{:>2}. {} {}  [{}]",
            rank + 1,
            category_emoji(&venue.category),
            venue.name,
            result.score()
        ));
        lines.push(format!(
            "    {} · {} · rating {}",
            venue.category,
            format_distance(venue.distance_m),
            rating_label(venue.rating)
        ));
        lines.push(format!("    {}", status.label));
        if !venue.tags.is_empty() {
            lines.push(format!("    {}", venue.tags.join("  ")));
        }
        lines.push(format!(
            "    category {:.0} + rating {:.1} + distance {:.1} + open {:.0}",
            b.category, b.rating, b.distance, b.open_now
        ));
    }
    block(&lines)
}

pub(crate) fn render_status(venue: &VenueRecord, status: &VenueStatus) -> String {
    let mut lines = vec![
        format!(
            "{} {} ({})",
            category_emoji(&venue.category),
            venue.name,
            venue.category
        ),
        status.label.clone(),
    ];
    if let Some(tz) = venue.hours.as_ref().and_then(|h| h.timezone.as_deref()) {
        lines.push(format!("timezone: {tz}"));
    }
    if !venue.landmarks.is_empty() {
        lines.push(format!("meet at: {}", venue.landmarks.join(", ")));
    }
    block(&lines)
}

pub(crate) fn render_nearest(nearest: Option<&NearestVenue>, max_distance_m: f64) -> String {
    match nearest {
        Some(n) => format!(
            "{} {} ({}) {}\n",
            n.emoji,
            n.name,
            n.id,
            format_distance(n.distance_m)
        ),
        None => format!("no venue within {}\n", format_distance(max_distance_m)),
    }
}
