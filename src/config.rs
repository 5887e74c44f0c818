//! Engine configuration.
//!
//! Defaults reproduce the standard pipeline. A JSON file can override any
//! subset of fields, and the binary applies command-line flags on top.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Where drones left without orders after the attack pass are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Rally at the centroid of all zones.
    Centroid,
    /// Head for the nearest zone by turn distance.
    NearestZone,
}

impl FromStr for Fallback {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "centroid" => Ok(Fallback::Centroid),
            "nearest_zone" | "nearest-zone" => Ok(Fallback::NearestZone),
            other => Err(ConfigError::UnknownFallback(other.to_string())),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown fallback strategy: '{0}'")]
    UnknownFallback(String),
}

/// Tuning knobs for the strategy pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Final pass for drones without orders.
    pub fallback: Fallback,
    /// Maximum per-axis offset added to centroid destinations (0 = none).
    pub centroid_jitter: i32,
    /// Seed for the jitter generator.
    pub seed: u64,
    /// Budget own drones around owned zones before the other passes.
    pub hold_the_line: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            fallback: Fallback::Centroid,
            centroid_jitter: 0,
            seed: 0,
            hold_the_line: false,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
