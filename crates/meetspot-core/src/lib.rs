//! Shared data model and configuration for the meetspot venue engine.

pub mod app_config;
pub mod config;
pub mod venues;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_CENTER};
pub use venues::{
    Coordinate, HoursInterval, MatchResult, ScoreBreakdown, VenueHours, VenueRecord, VenueStatus,
    VenueType, WeeklySchedule,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
