//! Layout checking configuration with documented constants
//!
//! The field size is fixed (see [`crate::core::types::COLS`] and
//! [`crate::core::types::ROWS`]); only numerical tolerances live here.

use crate::core::error::{OrapaError, Result};
use serde::Deserialize;
use std::path::Path;

/// Tolerances used by the contact classifier and layout equality
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum overlap area (field units squared) that counts as an overlap
    ///
    /// Intersections smaller than this are floating round-off from pieces
    /// that only share an edge or a corner.
    pub area_epsilon: f64,

    /// Maximum absolute difference for two anchor coordinates to compare equal
    pub equality_tolerance: f64,

    /// Touch points closer than this are merged into one
    ///
    /// Several edge pairs report the same corner when two outlines meet
    /// at a vertex.
    pub point_merge_tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area_epsilon: 1e-6,
            equality_tolerance: 1e-6,
            point_merge_tolerance: 1e-9,
        }
    }
}

impl LayoutConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("area_epsilon", self.area_epsilon),
            ("equality_tolerance", self.equality_tolerance),
            ("point_merge_tolerance", self.point_merge_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrapaError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<LayoutConfig> = OnceLock::new();

/// Get the global layout config (initializes with defaults if not set)
pub fn config() -> &'static LayoutConfig {
    CONFIG.get_or_init(LayoutConfig::default)
}

/// Set the global layout config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: LayoutConfig) -> std::result::Result<(), LayoutConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.area_epsilon, 1e-6);
        assert_eq!(config.equality_tolerance, 1e-6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml_str("equality_tolerance = 0.01\n").unwrap();
        assert_eq!(config.equality_tolerance, 0.01);
        assert_eq!(config.area_epsilon, 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let err = LayoutConfig::from_toml_str("area_epsilon = 0.0\n").unwrap_err();
        assert!(matches!(err, OrapaError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = LayoutConfig::from_toml_str("area_epsilon = \"big\"\n").unwrap_err();
        assert!(matches!(err, OrapaError::TomlError(_)));
    }
}
