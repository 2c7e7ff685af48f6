use serde::{Deserialize, Serialize};

use crate::spring::SpringConfig;

/// Geometry and shading of the globe.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobeConfig {
    /// Sphere radius in logical canvas pixels.
    pub radius: f64,
    /// Points sampled over the sphere before the land mask.
    pub sample_count: usize,
    /// Logical backing-store size (square).
    pub canvas_size: f64,
    /// Points and markers with projected depth below this are not drawn.
    pub cull_depth: f64,
    /// Points fainter than this are not drawn.
    pub min_alpha: f64,
    pub star_count: usize,
    pub star_seed: u64,
    pub motion: MotionConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 280.0,
            sample_count: 4000,
            canvas_size: 1000.0,
            cull_depth: -120.0,
            min_alpha: 0.15,
            star_count: 150,
            star_seed: 0x00E0_5A1D,
            motion: MotionConfig::default(),
        }
    }
}

/// Rotation, drag and inertia.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub initial_rotation_x: f64,
    pub rotation_x_min: f64,
    pub rotation_x_max: f64,
    /// Y-axis increment added every frame while idle (radians).
    pub idle_rate: f64,
    /// Multiplier applied to the drag velocity every idle frame.
    pub drag_decay: f64,
    /// Radians per CSS pixel of pointer travel.
    pub drag_sensitivity: f64,
    /// Share of the last horizontal drag delta carried as momentum.
    pub drag_velocity_gain: f64,
    pub spring: SpringConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            initial_rotation_x: 0.45,
            rotation_x_min: -0.6,
            rotation_x_max: 1.2,
            idle_rate: 0.0007,
            drag_decay: 0.985,
            drag_sensitivity: 0.005,
            drag_velocity_gain: 0.5,
            spring: SpringConfig::default(),
        }
    }
}

/// Hover/click behaviour.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Pointer must be strictly closer than this to a marker (canvas pixels).
    pub hit_radius_px: f64,
    /// Viewports at or below this width auto-dismiss selections.
    pub mobile_breakpoint_px: f64,
    pub auto_dismiss_ms: f64,
    /// Tooltip offset from the pointer (CSS pixels, both axes).
    pub tooltip_offset_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_radius_px: 20.0,
            mobile_breakpoint_px: 768.0,
            auto_dismiss_ms: 3000.0,
            tooltip_offset_px: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GlobeConfig, InteractionConfig};

    #[test]
    fn nested_overrides_keep_sibling_defaults() {
        let cfg: GlobeConfig =
            serde_json::from_str(r#"{"radius":300,"motion":{"idleRate":0.001}}"#).expect("parse");
        assert_eq!(cfg.radius, 300.0);
        assert_eq!(cfg.motion.idle_rate, 0.001);
        assert_eq!(cfg.motion.rotation_x_max, 1.2);
        assert_eq!(cfg.sample_count, 4000);
    }

    #[test]
    fn empty_object_is_default() {
        let cfg: InteractionConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, InteractionConfig::default());
    }
}
