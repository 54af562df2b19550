use std::path::PathBuf;

use crate::venues::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Reference point for distance annotation and catalog generation.
    pub center: Coordinate,
    pub max_results: usize,
    pub generated_venues: usize,
    pub generator_radius_deg: f64,
    pub nearest_max_m: f64,
    /// Fixed RNG seed; `None` means seed from OS entropy.
    pub seed: Option<u64>,
    /// YAML venue catalog; `None` means use the generated catalog.
    pub catalog_path: Option<PathBuf>,
}
