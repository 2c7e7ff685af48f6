use crate::config::ThemeConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Applies the enter/exit band to the current mode.
///
/// Between the two thresholds the current mode is kept.
pub fn next_mode(current: ThemeMode, max_ratio: f64, config: &ThemeConfig) -> ThemeMode {
    match current {
        ThemeMode::Dark if max_ratio >= config.enter_threshold => ThemeMode::Light,
        ThemeMode::Light if max_ratio <= config.exit_threshold => ThemeMode::Dark,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, next_mode};
    use crate::config::ThemeConfig;

    #[test]
    fn enter_threshold_is_inclusive() {
        let cfg = ThemeConfig::default();
        assert_eq!(next_mode(ThemeMode::Dark, 0.679, &cfg), ThemeMode::Dark);
        assert_eq!(next_mode(ThemeMode::Dark, 0.68, &cfg), ThemeMode::Light);
    }

    #[test]
    fn exit_threshold_is_inclusive() {
        let cfg = ThemeConfig::default();
        assert_eq!(next_mode(ThemeMode::Light, 0.581, &cfg), ThemeMode::Light);
        assert_eq!(next_mode(ThemeMode::Light, 0.58, &cfg), ThemeMode::Dark);
    }

    #[test]
    fn band_keeps_current_mode() {
        let cfg = ThemeConfig::default();
        assert_eq!(next_mode(ThemeMode::Dark, 0.62, &cfg), ThemeMode::Dark);
        assert_eq!(next_mode(ThemeMode::Light, 0.62, &cfg), ThemeMode::Light);
    }
}
