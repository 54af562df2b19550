//! Where the CLI gets its venues, clock, and randomness from.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use meetspot_core::{AppConfig, VenueRecord};
use meetspot_venues::{
    distance_meters, generate_catalog, load_catalog, merge_places, parse_places,
    places_to_venues, CatalogSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Accepted format for `--at`.
pub(crate) const AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse an `--at` value as venue-local wall-clock time.
pub(crate) fn parse_local_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, AT_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM, got '{value}': {e}"))
}

/// `--at` when given, otherwise the local clock.
pub(crate) fn resolve_now(at: Option<NaiveDateTime>) -> NaiveDateTime {
    at.unwrap_or_else(|| Local::now().naive_local())
}

/// Seeded RNG when a seed is configured, OS entropy otherwise.
///
/// The `--seed` flag wins over `MEETSPOT_SEED`.
pub(crate) fn build_rng(flag: Option<u64>, config: &AppConfig) -> StdRng {
    match flag.or(config.seed) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Load the venue catalog for one command.
///
/// Precedence: a `--places` JSON dump, then `MEETSPOT_CATALOG_PATH`, then the
/// generated Durham catalog. File-backed catalogs get `distance_m` from the
/// configured center and are sorted nearest first, matching the generator.
///
/// # Errors
///
/// Returns an error if a catalog or places file cannot be read or parsed.
pub(crate) fn load_venues(
    config: &AppConfig,
    places: Option<&Path>,
    rng: &mut StdRng,
) -> anyhow::Result<Vec<VenueRecord>> {
    let venues = if let Some(path) = places {
        let body = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read places file {}: {e}", path.display()))?;
        let records = parse_places(&body)?;
        let fetched = records.len();
        let venues = places_to_venues(merge_places([records]));
        tracing::info!(path = %path.display(), fetched, kept = venues.len(), "loaded places dump");
        venues
    } else if let Some(path) = config.catalog_path.as_deref() {
        load_catalog(path)?
    } else {
        return Ok(generate_catalog(
            config.center,
            &CatalogSettings::from_app_config(config),
            rng,
        ));
    };

    Ok(measure_from(config, venues))
}

fn measure_from(config: &AppConfig, mut venues: Vec<VenueRecord>) -> Vec<VenueRecord> {
    for venue in &mut venues {
        venue.distance_m = distance_meters(config.center, venue.coordinate);
    }
    venues.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    venues
}
