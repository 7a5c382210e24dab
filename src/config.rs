use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::scoring;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Scoring weights and distance tiers
///
/// Defaults are the production scoring contract; override only for
/// experiments, since scores produced with different values are not
/// comparable across deployments.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_category_weight")]
    pub category: u8,
    #[serde(default = "default_schedule_weight")]
    pub schedule: u8,
    #[serde(default = "default_proximity_near_weight")]
    pub proximity_near: u8,
    #[serde(default = "default_proximity_mid_weight")]
    pub proximity_mid: u8,
    #[serde(default = "default_near_tier_km")]
    pub near_tier_km: f64,
    #[serde(default = "default_mid_tier_km")]
    pub mid_tier_km: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            category: default_category_weight(),
            schedule: default_schedule_weight(),
            proximity_near: default_proximity_near_weight(),
            proximity_mid: default_proximity_mid_weight(),
            near_tier_km: default_near_tier_km(),
            mid_tier_km: default_mid_tier_km(),
        }
    }
}

fn default_category_weight() -> u8 {
    scoring::CATEGORY_WEIGHT
}
fn default_schedule_weight() -> u8 {
    scoring::SCHEDULE_WEIGHT
}
fn default_proximity_near_weight() -> u8 {
    scoring::PROXIMITY_NEAR_WEIGHT
}
fn default_proximity_mid_weight() -> u8 {
    scoring::PROXIMITY_MID_WEIGHT
}
fn default_near_tier_km() -> f64 {
    scoring::NEAR_TIER_KM
}
fn default_mid_tier_km() -> f64 {
    scoring::MID_TIER_KM
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
