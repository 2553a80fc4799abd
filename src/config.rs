//! Viewer configuration, stored as RON

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::math::PhysicalScale;
use crate::{ExplorerError, ExplorerResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub scale: PhysicalScale,
    pub viewport: ViewportConfig,
    pub window: WindowConfig,
}

/// How much of the surface the largest orbit may span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Fraction of the surface width the largest orbit's diameter may cover
    pub fill_fraction: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fill_fraction: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Exoplanet Explorer".to_string(),
            width: 1600.0,
            height: 900.0,
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            scale: PhysicalScale::default(),
            viewport: ViewportConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn from_ron_str(content: &str) -> ExplorerResult<Self> {
        let config: Self =
            ron::from_str(content).map_err(|e| ExplorerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> ExplorerResult<()> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.scale.radius_scale) || !positive(self.scale.orbit_scale) {
            return Err(ExplorerError::Config(format!(
                "scales must be positive, got radius_scale={} orbit_scale={}",
                self.scale.radius_scale, self.scale.orbit_scale
            )));
        }
        if !(positive(self.viewport.fill_fraction) && self.viewport.fill_fraction <= 1.0) {
            return Err(ExplorerError::Config(format!(
                "fill_fraction must be in (0, 1], got {}",
                self.viewport.fill_fraction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.scale.radius_scale, 36.0);
        assert_eq!(config.scale.orbit_scale, 600.0);
        assert_eq!(config.viewport.fill_fraction, 0.95);
    }

    #[test]
    fn test_partial_config() {
        let config = ExplorerConfig::from_ron_str(
            r#"(
                scale: (orbit_scale: 300.0),
                window: (title: "Kepler"),
            )"#,
        )
        .unwrap();

        assert_eq!(config.scale.orbit_scale, 300.0);
        assert_eq!(config.scale.radius_scale, 36.0);
        assert_eq!(config.window.title, "Kepler");
        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.viewport.fill_fraction, 0.95);
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = ExplorerConfig::from_ron_str(include_str!("../data/config.ron")).unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ExplorerConfig::from_ron_str("(scale: (orbit_scale: 0.0))"),
            Err(ExplorerError::Config(_))
        ));
        assert!(matches!(
            ExplorerConfig::from_ron_str("(viewport: (fill_fraction: 1.5))"),
            Err(ExplorerError::Config(_))
        ));
        assert!(matches!(
            ExplorerConfig::from_ron_str("(scale: "),
            Err(ExplorerError::Config(_))
        ));
    }
}
