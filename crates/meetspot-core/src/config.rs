use crate::app_config::{AppConfig, Environment};
use crate::venues::Coordinate;
use crate::ConfigError;

/// Downtown Durham, NC.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(35.994, -78.8986);

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, format!("{raw} is not a finite number")))
        }
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("MEETSPOT_ENV", "development"))?;
    let log_level = or_default("MEETSPOT_LOG_LEVEL", "info");

    let lat = parse_f64("MEETSPOT_CENTER_LAT", &DEFAULT_CENTER.lat.to_string())?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(invalid(
            "MEETSPOT_CENTER_LAT",
            format!("{lat} is outside [-90, 90]"),
        ));
    }
    let lng = parse_f64("MEETSPOT_CENTER_LNG", &DEFAULT_CENTER.lng.to_string())?;
    if !(-180.0..=180.0).contains(&lng) {
        return Err(invalid(
            "MEETSPOT_CENTER_LNG",
            format!("{lng} is outside [-180, 180]"),
        ));
    }

    let max_results = parse_usize("MEETSPOT_MAX_RESULTS", "10")?;
    if max_results == 0 {
        return Err(invalid("MEETSPOT_MAX_RESULTS", "must be at least 1".into()));
    }
    let generated_venues = parse_usize("MEETSPOT_GENERATED_VENUES", "23")?;
    let generator_radius_deg = parse_f64("MEETSPOT_GENERATOR_RADIUS_DEG", "0.03")?;
    if generator_radius_deg < 0.0 {
        return Err(invalid(
            "MEETSPOT_GENERATOR_RADIUS_DEG",
            "must not be negative".into(),
        ));
    }
    let nearest_max_m = parse_f64("MEETSPOT_NEAREST_MAX_M", "150")?;

    let seed = match lookup("MEETSPOT_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("MEETSPOT_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };
    let catalog_path = lookup("MEETSPOT_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        center: Coordinate::new(lat, lng),
        max_results,
        generated_venues,
        generator_radius_deg,
        nearest_max_m,
        seed,
        catalog_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEETSPOT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
