use std::collections::BTreeMap;

/// Handle for one observed page section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u32);

/// One intersection report for a section, in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionSample {
    pub target: SectionId,
    /// Visible fraction of the element itself, as reported by the host.
    pub intersection_ratio: f64,
    /// Height of the element's visible rectangle.
    pub intersection_height: f64,
    /// Height of the observation root, when the host reports one.
    pub root_height: Option<f64>,
}

/// Larger of the raw ratio and the share of the viewport the section fills.
///
/// Tall sections never reach a high raw ratio (most of them is off-screen),
/// so the viewport share is what lets them turn the page light.
pub fn effective_visibility(sample: &IntersectionSample, viewport_height: f64) -> f64 {
    let root_height = sample.root_height.unwrap_or(viewport_height);
    let by_height = if root_height > 0.0 {
        (sample.intersection_height / root_height).min(1.0)
    } else {
        0.0
    };
    let ratio = sample.intersection_ratio.max(by_height);
    if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
}

/// Latest effective visibility per observed section.
///
/// Ordering contract:
/// - Iteration is in ascending `SectionId` order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VisibilityLedger {
    ratios: BTreeMap<SectionId, f64>,
}

impl VisibilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every target at zero visibility.
    pub fn with_targets(targets: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            ratios: targets.into_iter().map(|t| (t, 0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn contains(&self, target: SectionId) -> bool {
        self.ratios.contains_key(&target)
    }

    pub fn get(&self, target: SectionId) -> Option<f64> {
        self.ratios.get(&target).copied()
    }

    /// Updates a known section. Returns `false` for unknown sections.
    pub fn record(&mut self, target: SectionId, ratio: f64) -> bool {
        match self.ratios.get_mut(&target) {
            Some(slot) => {
                *slot = ratio;
                true
            }
            None => false,
        }
    }

    /// Maximum visibility across all sections (0 when empty).
    pub fn max_ratio(&self) -> f64 {
        self.ratios.values().copied().fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, f64)> + '_ {
        self.ratios.iter().map(|(k, v)| (*k, *v))
    }

    pub fn clear(&mut self) {
        self.ratios.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionSample, SectionId, VisibilityLedger, effective_visibility};
    use pretty_assertions::assert_eq;

    fn sample(ratio: f64, height: f64, root: Option<f64>) -> IntersectionSample {
        IntersectionSample {
            target: SectionId(0),
            intersection_ratio: ratio,
            intersection_height: height,
            root_height: root,
        }
    }

    #[test]
    fn tall_section_uses_viewport_share() {
        // 3000px section, 720px visible in a 900px root: raw ratio 0.24.
        let v = effective_visibility(&sample(0.24, 720.0, Some(900.0)), 1080.0);
        assert!((v - 0.8).abs() < 1e-12);
    }

    #[test]
    fn short_section_uses_raw_ratio() {
        let v = effective_visibility(&sample(0.9, 90.0, Some(900.0)), 1080.0);
        assert_eq!(v, 0.9);
    }

    #[test]
    fn missing_root_falls_back_to_viewport() {
        let v = effective_visibility(&sample(0.0, 540.0, None), 1080.0);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn empty_root_ignores_height() {
        assert_eq!(effective_visibility(&sample(0.3, 500.0, Some(0.0)), 0.0), 0.3);
        assert_eq!(effective_visibility(&sample(0.0, 5000.0, Some(100.0)), 0.0), 1.0);
    }

    #[test]
    fn ledger_tracks_known_sections_only() {
        let mut ledger = VisibilityLedger::with_targets([SectionId(2), SectionId(1)]);
        assert!(ledger.record(SectionId(1), 0.4));
        assert!(!ledger.record(SectionId(9), 1.0));
        assert!(ledger.record(SectionId(2), 0.7));

        let got: Vec<_> = ledger.iter().collect();
        assert_eq!(got, vec![(SectionId(1), 0.4), (SectionId(2), 0.7)]);
        assert_eq!(ledger.max_ratio(), 0.7);
    }

    #[test]
    fn empty_ledger_max_is_zero() {
        assert_eq!(VisibilityLedger::new().max_ratio(), 0.0);
    }
}
