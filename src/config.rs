use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How boundary points that crowd the centerline are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// Splice points out of the live list while scanning it. A removal shifts
    /// the next point into the current slot, and that point is not examined
    /// until the scan comes around again, so results depend on scan order.
    /// Matches tracks produced by earlier generator releases.
    #[default]
    InPlace,
    /// Mark offending points against an unmodified snapshot, then filter.
    /// Order independent.
    Snapshot,
}

/// Tunable parameters of the track generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackGenConfig {
    /// Random points sampled before taking the hull
    pub point_count: usize,
    /// Sampling area width
    pub max_width: f64,
    /// Sampling area height
    pub max_height: f64,
    /// Perpendicular distance from centerline to each boundary
    pub track_width: f64,
    /// Centerline neighbours on each side checked during interference repair
    pub margin: usize,
    /// Fixed number of relaxation passes over the hull
    pub relax_iterations: usize,
    /// Desired minimum separation between hull vertices
    pub min_distance: f64,
    /// Exponent applied to the midpoint displacement draw
    pub difficulty: f64,
    /// Upper bound of the midpoint displacement
    pub max_displacement: f64,
    /// Spline parameter step; 0.005 yields 201 samples
    pub spline_step: f64,
    /// Slack subtracted from `track_width` before a point counts as too close
    pub interference_tolerance: f64,
    pub removal: RemovalStrategy,
}

impl Default for TrackGenConfig {
    fn default() -> Self {
        Self {
            point_count: 40,
            max_width: 8000.0,
            max_height: 6000.0,
            track_width: 400.0,
            margin: 10,
            relax_iterations: 3,
            min_distance: 1500.0,
            difficulty: 1.0,
            max_displacement: 800.0,
            spline_step: 0.005,
            interference_tolerance: 2.0,
            removal: RemovalStrategy::InPlace,
        }
    }
}

impl TrackGenConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.point_count < 4 {
            return Err(format!(
                "point_count must be at least 4, got {}",
                self.point_count
            ));
        }

        for (name, value) in [
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("track_width", self.track_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        for (name, value) in [
            ("min_distance", self.min_distance),
            ("difficulty", self.difficulty),
            ("max_displacement", self.max_displacement),
            ("interference_tolerance", self.interference_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be non-negative, got {}", name, value));
            }
        }

        if !(self.spline_step.is_finite() && self.spline_step > 0.0 && self.spline_step < 1.0) {
            return Err(format!(
                "spline_step must lie in (0, 1), got {}",
                self.spline_step
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where to write the generated track; stdout summary only when unset
    pub path: Option<String>,
    /// json, yaml or msgpack; inferred from the path extension when unset
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration file for the `apexsim-trackgen` tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: TrackGenConfig,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.generator.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {}, using defaults", e);
            Self::default()
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
