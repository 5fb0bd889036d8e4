//! Runtime settings, loadable from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Accounting;

/// Environment variable naming a config file to load
pub const CONFIG_ENV: &str = "INFINITE_LIFE_CONFIG";
/// File looked up in the working directory when the variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "infinite_life.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub default_gps: u32,
    pub min_gps: u32,
    pub max_gps: u32,
    /// Initial cell size in pixels
    pub square_size: f32,
    pub min_square_size: f32,
    pub max_square_size: f32,
    /// Pixels added to the cell size per wheel notch
    pub zoom_step: f32,
    /// Squared pointer movement (px²) before a press becomes a pan
    pub drag_threshold: f32,
    pub randomize_density: f64,
    pub accounting: Accounting,
    /// Fixed RNG seed for Randomize; entropy when absent
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            default_gps: 5,
            min_gps: 1,
            max_gps: 60,
            square_size: 30.0,
            min_square_size: 5.0,
            max_square_size: 120.0,
            zoom_step: 2.0,
            drag_threshold: 5.0,
            randomize_density: 0.5,
            accounting: Accounting::FullPlane,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: LifeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Path from `INFINITE_LIFE_CONFIG`, else `infinite_life.toml` if it exists
    pub fn discover_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                path.exists().then_some(path)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.min_gps == 0 {
            return invalid("min_gps must be at least 1".into());
        }
        if self.min_gps > self.max_gps {
            return invalid(format!("min_gps {} exceeds max_gps {}", self.min_gps, self.max_gps));
        }
        if !(self.min_gps..=self.max_gps).contains(&self.default_gps) {
            return invalid(format!(
                "default_gps {} outside [{}, {}]",
                self.default_gps, self.min_gps, self.max_gps
            ));
        }
        if !(self.min_square_size > 0.0 && self.min_square_size <= self.max_square_size) {
            return invalid(format!(
                "square size limits [{}, {}] are not a positive range",
                self.min_square_size, self.max_square_size
            ));
        }
        if !(self.min_square_size..=self.max_square_size).contains(&self.square_size) {
            return invalid(format!("square_size {} outside zoom limits", self.square_size));
        }
        if !(self.zoom_step > 0.0) {
            return invalid("zoom_step must be positive".into());
        }
        if !(self.drag_threshold >= 0.0) {
            return invalid("drag_threshold must not be negative".into());
        }
        if !(0.0..=1.0).contains(&self.randomize_density) {
            return invalid(format!("randomize_density {} outside [0, 1]", self.randomize_density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_gps, 5);
        assert_eq!(config.accounting, Accounting::FullPlane);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(LifeConfig::from_toml_str("").unwrap(), LifeConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LifeConfig::from_toml_str(
            r#"
            default_gps = 12
            accounting = "non_negative_quadrant"
            seed = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.default_gps, 12);
        assert_eq!(config.accounting, Accounting::NonNegativeQuadrant);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.square_size, 30.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(LifeConfig::from_toml_str("default_gps = \"fast\""), Err(ConfigError::Parse(_))));
        assert!(matches!(LifeConfig::from_toml_str("accounting = \"torus\""), Err(ConfigError::Parse(_))));
        assert!(matches!(LifeConfig::from_toml_str("speed = 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_errors() {
        for text in [
            "min_gps = 0",
            "default_gps = 100",
            "min_gps = 10\nmax_gps = 5",
            "randomize_density = 1.5",
            "min_square_size = 0.0",
            "square_size = 500.0",
            "zoom_step = 0.0",
            "drag_threshold = -1.0",
        ] {
            assert!(
                matches!(LifeConfig::from_toml_str(text), Err(ConfigError::Invalid(_))),
                "accepted: {}",
                text
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = LifeConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("not/here.toml"));
    }
}
