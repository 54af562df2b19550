use std::collections::HashSet;
use std::path::Path;

use meetspot_core::VenueRecord;
use serde::Deserialize;

use crate::error::VenuesError;
use crate::hours::{is_clock_time, normalize_venue_type};

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub venues: Vec<VenueRecord>,
}

/// Load and validate a venue catalog from a YAML file.
///
/// `type` is always re-derived from `category`, and the per-request fields
/// (`distance_m`, `match_score`) are reset, whatever the file says.
///
/// # Errors
///
/// Returns `VenuesError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Vec<VenueRecord>, VenuesError> {
    let content = std::fs::read_to_string(path).map_err(|e| VenuesError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let venues = parse_catalog(&content)?;
    tracing::info!(path = %path.display(), count = venues.len(), "loaded venue catalog");
    Ok(venues)
}

/// Parse and validate catalog YAML already in memory.
///
/// # Errors
///
/// Returns `VenuesError` if the YAML does not parse or fails validation.
pub fn parse_catalog(yaml: &str) -> Result<Vec<VenueRecord>, VenuesError> {
    let catalog: CatalogFile = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;

    Ok(catalog
        .venues
        .into_iter()
        .map(|mut venue| {
            venue.venue_type = normalize_venue_type(&venue.category);
            venue.distance_m = 0.0;
            venue.match_score = 0;
            venue
        })
        .collect())
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), VenuesError> {
    let mut seen_ids = HashSet::new();

    for venue in &catalog.venues {
        if venue.id.trim().is_empty() {
            return Err(VenuesError::Validation(
                "venue id must be non-empty".to_string(),
            ));
        }

        if venue.name.trim().is_empty() {
            return Err(VenuesError::Validation(format!(
                "venue '{}' has an empty name",
                venue.id
            )));
        }

        if !seen_ids.insert(venue.id.as_str()) {
            return Err(VenuesError::Validation(format!(
                "duplicate venue id: '{}'",
                venue.id
            )));
        }

        if let Some(rating) = venue.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(VenuesError::Validation(format!(
                    "venue '{}' has rating {rating}; must be within 0.0..=5.0",
                    venue.id
                )));
            }
        }

        let Some(weekly) = venue.hours.as_ref().and_then(|h| h.weekly.as_ref()) else {
            continue;
        };
        for (day, intervals) in weekly.days() {
            for interval in intervals {
                for time in [&interval.open, &interval.close] {
                    if !is_clock_time(time) {
                        return Err(VenuesError::Validation(format!(
                            "venue '{}' has invalid {day} time '{time}'; expected HH:MM",
                            venue.id
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
