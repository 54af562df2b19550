//! Live open/closed resolution from structured weekly hours.
//!
//! Times are compared as zero-padded `"HH:MM"` strings, which order the same
//! way as the clock times they encode. The caller supplies venue-local
//! wall-clock time; nothing here reads the system clock.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeZone};
use meetspot_core::{HoursInterval, VenueRecord, VenueStatus, VenueType};

pub const HOURS_UNAVAILABLE: &str = "Hours unavailable";
pub const CLOSED_TODAY: &str = "Closed today";
/// Emitted when every interval today has already ended. Tomorrow's schedule is
/// not consulted, so this label never carries a time.
pub const OPENS_TOMORROW: &str = "Closed · opens tomorrow";

/// Open/closed status of `venue` at venue-local time `now`.
///
/// Intervals are checked in listed order and the first open one supplies the
/// closing time. An interval with `close < open` is treated as running past
/// midnight: open from `open` to the end of the day and from the start of the
/// day until `close`.
#[must_use]
pub fn venue_status(venue: &VenueRecord, now: NaiveDateTime) -> VenueStatus {
    let Some(hours) = &venue.hours else {
        return VenueStatus::closed(HOURS_UNAVAILABLE);
    };

    if hours.holiday_closed_today {
        return VenueStatus::closed(CLOSED_TODAY);
    }

    let today = hours
        .weekly
        .as_ref()
        .map(|weekly| weekly.day(now.weekday()))
        .unwrap_or_default();
    if today.is_empty() {
        return VenueStatus::closed(CLOSED_TODAY);
    }

    let current = now.format("%H:%M").to_string();

    if let Some(interval) = today.iter().find(|i| is_open_at(i, &current)) {
        return VenueStatus::open(format!(
            "Open now · closes {}",
            display_clock(&interval.close)
        ));
    }

    if let Some(next) = today.iter().find(|i| current.as_str() < i.open.as_str()) {
        return VenueStatus::closed(format!("Closed · opens {}", display_clock(&next.open)));
    }

    VenueStatus::closed(OPENS_TOMORROW)
}

/// [`venue_status`] for a zoned instant, using its local wall-clock reading.
#[must_use]
pub fn venue_status_at<Tz: TimeZone>(venue: &VenueRecord, at: &DateTime<Tz>) -> VenueStatus {
    venue_status(venue, at.naive_local())
}

fn is_open_at(interval: &HoursInterval, current: &str) -> bool {
    let open = interval.open.as_str();
    let close = interval.close.as_str();
    if interval.is_overnight() {
        current >= open || current < close
    } else {
        open <= current && current < close
    }
}

/// Render a clock time as `h:mm AM/PM`, e.g. `"5:00 PM"`.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Render an `"HH:MM"` string for labels. Unparseable input is shown as-is.
fn display_clock(hhmm: &str) -> String {
    NaiveTime::parse_from_str(hhmm, "%H:%M").map_or_else(|_| hhmm.to_string(), format_clock)
}

/// Returns `true` for a zero-padded 24-hour `"HH:MM"` string.
#[must_use]
pub fn is_clock_time(s: &str) -> bool {
    s.len() == 5 && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

/// Ordered category keyword rules. First match wins.
const VENUE_TYPE_RULES: &[(&[&str], VenueType)] = &[
    (&["coffee", "café", "cafe"], VenueType::Coffee),
    (&["stadium", "arena", "sport"], VenueType::Stadium),
    (&["garden", "park"], VenueType::Garden),
    (&["sight", "landmark", "museum"], VenueType::Sight),
    (&["bar", "lounge", "hangout"], VenueType::Hangout),
    (&["restaurant", "food", "dining"], VenueType::Restaurant),
    (&["study", "library", "cowork"], VenueType::Study),
    (&["shop", "mall", "retail"], VenueType::Shopping),
];

/// Derive the normalized type tag from a free-text category.
#[must_use]
pub fn normalize_venue_type(category: &str) -> VenueType {
    let lower = category.to_lowercase();
    VENUE_TYPE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(VenueType::Default, |&(_, venue_type)| venue_type)
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod tests;
