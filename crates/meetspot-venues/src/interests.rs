//! Interest tag lookups.
//!
//! Interests are free text. Category and tag lookups lower-case the interest
//! first; [`common_interests`] compares exactly.

/// Interest → venue category keywords. Keywords are lower-case and matched as
/// substrings of a venue's lower-cased category.
pub const INTEREST_CATEGORIES: &[(&str, &[&str])] = &[
    ("coffee", &["café", "french café", "dessert"]),
    ("tea", &["café", "french café"]),
    ("yoga", &["park", "nature park"]),
    ("fitness", &["park", "nature park"]),
    ("art", &["museum", "gallery", "historic site"]),
    ("music", &["music venue"]),
    ("beer", &["brewery"]),
    ("wine", &["brewery"]),
    ("food", &["market", "mixed-use / hangout"]),
    ("sports", &["park"]),
    ("reading", &["bookstore", "café"]),
    ("books", &["bookstore", "café"]),
    ("gaming", &["games & comics", "arcade"]),
    ("shopping", &["thrift", "shopping", "market"]),
    ("nature", &["park", "nature park"]),
    ("history", &["historic site", "museum"]),
];

/// Interest → display tags.
pub const INTEREST_TAGS: &[(&str, &[&str])] = &[
    ("coffee", &["☕ Coffee", "💻 Work-friendly", "🔇 Quiet"]),
    ("tea", &["🍵 Tea", "🔇 Quiet", "📚 Reading-friendly"]),
    ("yoga", &["🧘 Wellness", "🌳 Peaceful", "🌞 Outdoor"]),
    ("fitness", &["💪 Active", "🌳 Outdoor", "🏃 Exercise"]),
    ("art", &["🎨 Creative", "🖼️ Visual", "📸 Photo-worthy"]),
    ("music", &["🎵 Live music", "🎤 Performance", "🎸 Entertainment"]),
    ("beer", &["🍺 Craft beer", "🍻 Social", "🎯 Hangout"]),
    ("wine", &["🍷 Wine", "🍻 Social", "🎯 Hangout"]),
    ("food", &["🍽️ Dining", "👨‍🍳 Local", "🌮 Tasty"]),
    ("sports", &["⚽ Sports", "🌳 Outdoor", "💪 Active"]),
    ("reading", &["📚 Books", "🔇 Quiet", "☕ Cozy"]),
    ("books", &["📚 Books", "🔇 Quiet", "☕ Cozy"]),
    ("gaming", &["🎮 Games", "👾 Arcade", "🎯 Fun"]),
    ("shopping", &["🛍️ Shopping", "👗 Unique finds", "💎 Local"]),
    ("nature", &["🌳 Nature", "🌞 Outdoor", "🦋 Scenic"]),
    ("history", &["🏛️ Historic", "📜 Educational", "🎓 Cultural"]),
];

/// Elements of `a` that also appear in `b`, in `a`'s order. Case-sensitive.
#[must_use]
pub fn common_interests<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<String> {
    a.iter()
        .map(S::as_ref)
        .filter(|interest| b.iter().any(|other| S::as_ref(other) == *interest))
        .map(str::to_string)
        .collect()
}

/// Category keywords for `interests`, deduplicated in first-appearance order.
#[must_use]
pub fn categories_for_interests<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    collect_mapped(interests, INTEREST_CATEGORIES)
}

/// Display tags for `interests`, deduplicated in first-appearance order.
#[must_use]
pub fn tags_for_interests<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    collect_mapped(interests, INTEREST_TAGS)
}

fn lookup(table: &[(&str, &'static [&'static str])], interest: &str) -> &'static [&'static str] {
    let key = interest.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, values)| values)
        .unwrap_or_default()
}

fn collect_mapped<S: AsRef<str>>(
    interests: &[S],
    table: &[(&str, &'static [&'static str])],
) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for interest in interests {
        for &value in lookup(table, S::as_ref(interest)) {
            if !out.contains(&value) {
                out.push(value);
            }
        }
    }
    out
}

/// Deduplicated union of two interest lists, `a` first.
#[must_use]
pub fn combined_interests<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(a.len() + b.len());
    for interest in a.iter().chain(b) {
        let interest = S::as_ref(interest);
        if !out.iter().any(|seen| seen == interest) {
            out.push(interest.to_string());
        }
    }
    out
}
