//! Feeds a visibility trace for one section through the theme observer.

use foundation::time::Millis;
use serde::Serialize;
use theme::{IntersectionSample, RecordingThemeSink, SectionId, ThemeConfig, ThemeMode, ThemeObserver};

/// Simulated time between trace steps.
pub const STEP_MS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub at_ms: f64,
    pub ratio: f64,
    pub theme: &'static str,
    pub flipped: bool,
    pub animating: bool,
}

pub fn replay(ratios: &[f64], config: ThemeConfig) -> Vec<ReplayStep> {
    const SECTION: SectionId = SectionId(0);
    let mut observer = ThemeObserver::new([SECTION], config, RecordingThemeSink::new());
    let mut steps = Vec::with_capacity(ratios.len());
    for (i, &ratio) in ratios.iter().enumerate() {
        let now = Millis(i as f64 * STEP_MS);
        observer.poll_timers(now);
        observer.observe(&[IntersectionSample {
            target: SECTION,
            intersection_ratio: ratio,
            intersection_height: 0.0,
            root_height: None,
        }]);
        let flipped = observer.on_frame(now).is_some();
        steps.push(ReplayStep {
            at_ms: now.0,
            ratio,
            theme: observer.mode().as_str(),
            flipped,
            animating: observer.is_animating(),
        });
    }
    observer.teardown();
    steps
}

pub fn final_mode(steps: &[ReplayStep]) -> ThemeMode {
    match steps.last() {
        Some(s) if s.theme == ThemeMode::Light.as_str() => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::{final_mode, replay};
    use pretty_assertions::assert_eq;
    use theme::{ThemeConfig, ThemeMode};

    #[test]
    fn hysteresis_trace() {
        let steps = replay(&[0.2, 0.70, 0.60, 0.55, 0.55, 0.55, 0.55], ThemeConfig::default());
        let themes: Vec<_> = steps.iter().map(|s| s.theme).collect();
        assert_eq!(themes, vec!["dark", "light", "light", "dark", "dark", "dark", "dark"]);
        assert!(steps[1].flipped && steps[1].animating);
        // 300ms after the flip at 300ms the 260ms window is closed.
        assert!(!steps[6].animating);
        assert_eq!(final_mode(&steps), ThemeMode::Dark);
    }

    #[test]
    fn empty_trace() {
        assert!(replay(&[], ThemeConfig::default()).is_empty());
        assert_eq!(final_mode(&[]), ThemeMode::Dark);
    }
}
