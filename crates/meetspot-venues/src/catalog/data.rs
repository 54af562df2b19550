//! Fixed tables behind the synthetic Durham catalog.

/// Categories drawn for procedurally placed venues. Index lines up with [`CATEGORY_TAGS`].
pub(crate) const CATEGORIES: &[&str] = &[
    "Coffee Shop",
    "Restaurant",
    "Bar",
    "Cafe",
    "Park",
    "Gym",
    "Library",
    "Museum",
    "Theater",
    "Bookstore",
    "Bakery",
    "Tea House",
    "Juice Bar",
    "Art Gallery",
    "Co-working Space",
];

pub(crate) const CATEGORY_TAGS: &[[&str; 3]] = &[
    ["cozy", "wifi", "quiet"],
    ["outdoor seating", "brunch", "lunch"],
    ["craft beer", "live music", "happy hour"],
    ["artisan", "local", "organic"],
    ["nature", "walking trails", "outdoor"],
    ["fitness", "wellness", "classes"],
    ["quiet", "study", "books"],
    ["culture", "exhibits", "art"],
    ["performances", "shows", "events"],
    ["indie", "used books", "reading"],
    ["fresh", "pastries", "breakfast"],
    ["relaxing", "herbal", "zen"],
    ["healthy", "smoothies", "fresh"],
    ["contemporary", "exhibits", "local artists"],
    ["productive", "networking", "coffee"],
];

/// Meeting points for the surveyed Durham venues, by exact category name.
pub(crate) const KNOWN_LANDMARKS: &[(&str, [&str; 3])] = &[
    ("Coffee Shop", ["Espresso bar", "Window seating", "Front counter"]),
    ("Restaurant", ["Host stand", "Bar area", "Main dining"]),
    ("Bar", ["Bar counter", "Patio", "Front entrance"]),
    ("Cafe", ["Counter", "Outdoor seating", "Window booth"]),
    ("Park", ["Main entrance", "Pavilion", "Central lawn"]),
    ("Gym", ["Front desk", "Lobby", "Main entrance"]),
    ("Library", ["Main entrance", "Reference desk", "Lobby"]),
    ("Museum", ["Visitor center", "Main hall", "Gift shop"]),
    ("Theater", ["Box office", "Main entrance", "Lobby"]),
    ("Bookstore", ["Front counter", "Main entrance", "Reading nook"]),
    ("Bakery", ["Display counter", "Main entrance", "Cafe area"]),
    ("Shopping", ["Main entrance", "Plaza", "Courtyard"]),
    ("Brewery", ["Bar", "Tasting room", "Front entrance"]),
    ("Market", ["Main entrance", "Vendor area", "Plaza"]),
    ("Dessert", ["Counter", "Seating area", "Main entrance"]),
    ("Historic", ["Main entrance", "Courtyard", "Lawn"]),
    ("Stadium", ["Main gate", "East entrance", "West entrance"]),
    ("Mixed-use", ["Main plaza", "Central courtyard", "Entrance"]),
];

/// Meeting points for procedurally placed venues. Covers every entry in
/// [`CATEGORIES`].
pub(crate) const GENERATED_LANDMARKS: &[(&str, [&str; 3])] = &[
    ("Coffee Shop", ["Espresso bar", "Window seating", "Front counter"]),
    ("Restaurant", ["Host stand", "Bar area", "Main dining"]),
    ("Bar", ["Bar counter", "Patio", "Front entrance"]),
    ("Cafe", ["Counter", "Outdoor seating", "Window booth"]),
    ("Park", ["Main entrance", "Pavilion", "Playground"]),
    ("Gym", ["Front desk", "Lobby", "Main entrance"]),
    ("Library", ["Main entrance", "Reference desk", "Lobby"]),
    ("Museum", ["Visitor center", "Main hall", "Gift shop"]),
    ("Theater", ["Box office", "Main entrance", "Lobby"]),
    ("Bookstore", ["Front counter", "Main entrance", "Reading nook"]),
    ("Bakery", ["Display counter", "Main entrance", "Cafe area"]),
    ("Tea House", ["Counter", "Seating area", "Main entrance"]),
    ("Juice Bar", ["Counter", "Front entrance", "Order station"]),
    ("Art Gallery", ["Main entrance", "Reception desk", "Gallery entrance"]),
    ("Co-working Space", ["Reception", "Main entrance", "Lobby"]),
];

pub(crate) const FALLBACK_LANDMARKS: [&str; 3] = ["Main entrance", "Reception", "Front area"];

pub(crate) struct KnownVenue {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub category: &'static str,
}

const fn known(name: &'static str, lat: f64, lng: f64, category: &'static str) -> KnownVenue {
    KnownVenue {
        name,
        lat,
        lng,
        category,
    }
}

/// Real Durham venues with surveyed coordinates.
pub(crate) const DURHAM_VENUES: &[KnownVenue] = &[
    // Duke University & Gardens
    known("Sarah P. Duke Gardens", 36.001_9, -78.938_4, "Park"),
    known("Duke Chapel", 36.001_2, -78.938_2, "Historic"),
    known("Perkins Library", 35.997_9, -78.937_7, "Library"),
    known("Duke University Visitor Center", 36.001_4, -78.937_8, "Museum"),
    known("Brodhead Center", 36.000_9, -78.939_1, "Co-working Space"),
    known("Wilson Gym", 35.998_7, -78.940_8, "Gym"),
    known("Cameron Indoor Stadium", 36.001_4, -78.940_3, "Stadium"),
    known("Duke Gardens Terrace Cafe", 36.002_2, -78.937_9, "Cafe"),
    known("Nasher Museum of Art", 36.002_7, -78.940_7, "Museum"),
    known("Duke Forest", 35.985_6, -78.943_4, "Park"),
    // Downtown
    known("Durham Central Park", 35.994_0, -78.898_6, "Park"),
    known("American Tobacco Campus", 35.995_8, -78.902_3, "Mixed-use"),
    known("Durham Performing Arts Center", 35.996_3, -78.902_0, "Theater"),
    known("21c Museum Hotel Durham", 35.996_7, -78.901_3, "Museum"),
    known("The Cookery", 35.994_5, -78.898_8, "Restaurant"),
    known("Brightleaf Square", 35.997_7, -78.905_2, "Shopping"),
    known("Guglhupf Bakery", 35.994_3, -78.899_1, "Bakery"),
    known("Bull City Burger", 35.995_8, -78.901_9, "Restaurant"),
    known("Fullsteam Brewery", 35.993_4, -78.901_9, "Brewery"),
    known("Durham Farmers Market", 35.993_9, -78.898_5, "Market"),
    // Ninth Street
    known("Ninth Street", 35.994_0, -78.927_3, "Shopping"),
    known("Francesca's Dessert Cafe", 35.993_8, -78.927_5, "Dessert"),
    known("Panzanella", 35.994_1, -78.927_1, "Restaurant"),
    known("Ninth Street Bakery", 35.993_7, -78.927_7, "Bakery"),
    known("Wine Authorities", 35.994_2, -78.926_9, "Bar"),
    // Duke East Campus
    known("Duke East Campus", 36.003_3, -78.913_5, "Historic"),
    known("Lilly Library", 36.003_0, -78.914_2, "Library"),
];
