use serde::{Deserialize, Serialize};

/// Tunables for [`crate::ThemeObserver`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Max visibility at or above which a dark page turns light.
    pub enter_threshold: f64,
    /// Max visibility at or below which a light page turns dark.
    pub exit_threshold: f64,
    /// How long the transition flag stays raised after each flip.
    pub animation_window_ms: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            enter_threshold: 0.68,
            exit_threshold: 0.58,
            animation_window_ms: 260.0,
        }
    }
}
