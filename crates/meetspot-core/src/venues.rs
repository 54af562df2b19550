use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Normalized venue category tag derived from the free-text category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Coffee,
    Stadium,
    Garden,
    Sight,
    Hangout,
    Restaurant,
    Study,
    Shopping,
    #[default]
    Default,
}

impl VenueType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VenueType::Coffee => "coffee",
            VenueType::Stadium => "stadium",
            VenueType::Garden => "garden",
            VenueType::Sight => "sight",
            VenueType::Hangout => "hangout",
            VenueType::Restaurant => "restaurant",
            VenueType::Study => "study",
            VenueType::Shopping => "shopping",
            VenueType::Default => "default",
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One opening interval in zero-padded 24-hour `"HH:MM"` form.
///
/// `close < open` marks an interval that runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursInterval {
    pub open: String,
    pub close: String,
}

impl HoursInterval {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }
}

/// Interval lists keyed by weekday. Lists are evaluated in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub mon: Vec<HoursInterval>,
    #[serde(default)]
    pub tue: Vec<HoursInterval>,
    #[serde(default)]
    pub wed: Vec<HoursInterval>,
    #[serde(default)]
    pub thu: Vec<HoursInterval>,
    #[serde(default)]
    pub fri: Vec<HoursInterval>,
    #[serde(default)]
    pub sat: Vec<HoursInterval>,
    #[serde(default)]
    pub sun: Vec<HoursInterval>,
}

impl WeeklySchedule {
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &[HoursInterval] {
        match weekday {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    /// Iterate all seven days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[HoursInterval])> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(move |d| (d, self.day(d)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueHours {
    #[serde(default)]
    pub weekly: Option<WeeklySchedule>,
    /// IANA zone name, e.g. `"America/New_York"`. Informational only; callers
    /// pass venue-local wall-clock time to the resolver.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub holiday_closed_today: bool,
}

/// A candidate venue.
///
/// `distance_m` and `match_score` are per-request values. The matching
/// engine overwrites them on the copies it returns; they are never read back
/// as inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub id: String,
    pub name: String,
    /// Free-text display category, e.g. `"Coffee Shop"`.
    pub category: String,
    #[serde(default, rename = "type")]
    pub venue_type: VenueType,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub distance_m: f64,
    #[serde(default)]
    pub match_score: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Precomputed open flag, used only when `hours` is absent.
    #[serde(default)]
    pub open_now: bool,
    #[serde(default)]
    pub opens_at: Option<NaiveTime>,
    #[serde(default)]
    pub hours: Option<VenueHours>,
    #[serde(default)]
    pub landmarks: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl VenueRecord {
    /// Bare record with no tags, rating, hours or landmarks.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        venue_type: VenueType,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            venue_type,
            coordinate,
            distance_m: 0.0,
            match_score: 0,
            tags: Vec::new(),
            rating: None,
            open_now: false,
            opens_at: None,
            hours: None,
            landmarks: Vec::new(),
            description: None,
        }
    }
}

/// Live open/closed state with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueStatus {
    pub open: bool,
    pub label: String,
}

impl VenueStatus {
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            open: true,
            label: label.into(),
        }
    }

    pub fn closed(label: impl Into<String>) -> Self {
        Self {
            open: false,
            label: label.into(),
        }
    }
}

/// Per-component contributions to a match score, before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0, 40 or 50.
    pub category: f64,
    /// 0..=30.
    pub rating: f64,
    /// 0..=20.
    pub distance: f64,
    /// 0 or 10.
    pub open_now: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.category + self.rating + self.distance + self.open_now
    }
}

/// A ranked venue for one pair of interest profiles.
///
/// `venue` is a copy whose `distance_m`, `match_score`, `tags`, `open_now`
/// and `rating` hold the values used for this request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub venue: VenueRecord,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult {
    #[must_use]
    pub fn score(&self) -> u8 {
        self.venue.match_score
    }
}
