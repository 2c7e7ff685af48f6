//! Site-wide configuration, loaded from one JSON document.
//!
//! Every section is optional; missing keys fall back to the built-in
//! defaults of the owning crate.

use std::path::Path;

use forms::FormEndpoints;
use globe::{GlobeConfig, InteractionConfig};
use serde::{Deserialize, Serialize};
use theme::ThemeConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("theme exit threshold {exit} must be below enter threshold {enter}")]
    ThresholdOrder { enter: f64, exit: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("rotation clamp is inverted: min {min} > max {max}")]
    InvertedClamp { min: f64, max: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub globe: GlobeConfig,
    pub interaction: InteractionConfig,
    pub forms: FormEndpoints,
}

impl SiteConfig {
    /// Parses and validates. An empty or whitespace-only document is the
    /// default config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.theme;
        unit("theme.enterThreshold", t.enter_threshold)?;
        unit("theme.exitThreshold", t.exit_threshold)?;
        if t.exit_threshold >= t.enter_threshold {
            return Err(ConfigError::ThresholdOrder {
                enter: t.enter_threshold,
                exit: t.exit_threshold,
            });
        }
        positive("theme.animationWindowMs", t.animation_window_ms)?;

        let g = &self.globe;
        positive("globe.radius", g.radius)?;
        positive("globe.canvasSize", g.canvas_size)?;
        unit("globe.minAlpha", g.min_alpha)?;
        let m = &g.motion;
        if m.rotation_x_min > m.rotation_x_max {
            return Err(ConfigError::InvertedClamp {
                min: m.rotation_x_min,
                max: m.rotation_x_max,
            });
        }
        unit("globe.motion.dragDecay", m.drag_decay)?;
        positive("globe.motion.spring.stiffness", m.spring.stiffness)?;
        positive("globe.motion.spring.mass", m.spring.mass)?;

        let i = &self.interaction;
        positive("interaction.hitRadiusPx", i.hit_radius_px)?;
        positive("interaction.autoDismissMs", i.auto_dismiss_ms)?;
        Ok(())
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
