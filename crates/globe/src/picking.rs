use foundation::math::Vec2;
use foundation::math::precision::stable_total_cmp_f64;

use crate::markers::MarkerId;
use crate::projection::MarkerSnapshot;

/// Backing-store vs. displayed size of the canvas element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasMetrics {
    pub backing: Vec2,
    pub display: Vec2,
}

impl CanvasMetrics {
    pub fn new(backing: Vec2, display: Vec2) -> Self {
        Self { backing, display }
    }

    /// Maps a CSS-pixel offset inside the element to logical canvas pixels.
    ///
    /// `None` while the element has no layout size.
    pub fn css_to_canvas(&self, css: Vec2) -> Option<Vec2> {
        if !(self.display.x > 0.0 && self.display.y > 0.0) {
            return None;
        }
        Some(Vec2::new(
            css.x * self.backing.x / self.display.x,
            css.y * self.backing.y / self.display.y,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    /// Hits must be strictly closer than this.
    pub radius_px: f64,
    pub cull_depth: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            radius_px: 20.0,
            cull_depth: -120.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerHit {
    pub index: usize,
    pub id: MarkerId,
    pub distance_px: f64,
}

/// Deterministic marker picking against a frame snapshot.
///
/// Ordering contract:
/// - The closest marker within `radius_px` wins.
/// - At equal distance, the lower marker index wins.
/// - Markers with depth below `cull_depth` are never hit.
pub fn pick_marker(snapshot: &MarkerSnapshot, at: Vec2, opts: PickOptions) -> Option<MarkerHit> {
    let mut best: Option<MarkerHit> = None;
    for m in &snapshot.markers {
        if m.depth < opts.cull_depth {
            continue;
        }
        let d = m.screen.distance(at);
        if d.is_nan() || d >= opts.radius_px {
            continue;
        }
        let hit = MarkerHit {
            index: m.index,
            id: m.id,
            distance_px: d,
        };
        best = match best {
            None => Some(hit),
            Some(b) => {
                let ord = stable_total_cmp_f64(d, b.distance_px).then_with(|| m.index.cmp(&b.index));
                if ord.is_lt() { Some(hit) } else { Some(b) }
            }
        };
    }
    best
}

/// Screen picking wrapper: CSS pixels in, snapshot hit out.
pub fn pick_screen(
    snapshot: &MarkerSnapshot,
    css: Vec2,
    metrics: CanvasMetrics,
    opts: PickOptions,
) -> Option<MarkerHit> {
    let at = metrics.css_to_canvas(css)?;
    pick_marker(snapshot, at, opts)
}

#[cfg(test)]
mod tests {
    use super::{CanvasMetrics, PickOptions, pick_marker, pick_screen};
    use crate::markers::{MarkerId, data_centers};
    use crate::projection::{MarkerSnapshot, ProjectedMarker, project_markers};
    use foundation::math::{EulerYX, Vec2};
    use proptest::prelude::*;

    fn marker(index: usize, id: &'static str, x: f64, y: f64, depth: f64) -> ProjectedMarker {
        ProjectedMarker {
            index,
            id: MarkerId(id),
            screen: Vec2::new(x, y),
            depth,
        }
    }

    fn snapshot(markers: Vec<ProjectedMarker>) -> MarkerSnapshot {
        MarkerSnapshot {
            frame_index: 1,
            markers,
        }
    }

    #[test]
    fn empty_snapshot_reports_nothing() {
        let s = MarkerSnapshot::default();
        assert!(pick_marker(&s, Vec2::new(0.0, 0.0), PickOptions::default()).is_none());
    }

    #[test]
    fn radius_is_exclusive() {
        let s = snapshot(vec![marker(0, "a", 100.0, 100.0, 50.0)]);
        let opts = PickOptions::default();
        assert!(pick_marker(&s, Vec2::new(119.9, 100.0), opts).is_some());
        assert!(pick_marker(&s, Vec2::new(120.0, 100.0), opts).is_none());
        assert!(pick_marker(&s, Vec2::new(121.0, 100.0), opts).is_none());
    }

    #[test]
    fn culled_markers_are_skipped() {
        let s = snapshot(vec![marker(0, "a", 100.0, 100.0, -150.0)]);
        assert!(pick_marker(&s, Vec2::new(100.0, 100.0), PickOptions::default()).is_none());
    }

    #[test]
    fn nearest_wins_then_lower_index() {
        let s = snapshot(vec![
            marker(3, "far", 100.0, 100.0, 10.0),
            marker(1, "near", 108.0, 100.0, 20.0),
            marker(0, "tie", 112.0, 100.0, 30.0),
        ]);
        let hit = pick_marker(&s, Vec2::new(110.0, 100.0), PickOptions::default()).expect("hit");
        assert_eq!(hit.id, MarkerId("tie"));
        let hit = pick_marker(&s, Vec2::new(101.0, 100.0), PickOptions::default()).expect("hit");
        assert_eq!(hit.id, MarkerId("far"));
    }

    #[test]
    fn css_pixels_are_scaled_per_axis() {
        let metrics = CanvasMetrics::new(Vec2::new(1000.0, 1000.0), Vec2::new(500.0, 250.0));
        assert_eq!(metrics.css_to_canvas(Vec2::new(100.0, 100.0)), Some(Vec2::new(200.0, 400.0)));
        let collapsed = CanvasMetrics::new(Vec2::new(1000.0, 1000.0), Vec2::new(0.0, 100.0));
        assert_eq!(collapsed.css_to_canvas(Vec2::new(1.0, 1.0)), None);

        let s = snapshot(vec![marker(0, "a", 200.0, 400.0, 0.0)]);
        let hit = pick_screen(&s, Vec2::new(100.0, 100.0), metrics, PickOptions::default());
        assert_eq!(hit.map(|h| h.id), Some(MarkerId("a")));
    }

    proptest! {
        #[test]
        fn exact_position_always_hits_that_marker(rx in -0.6f64..1.2, ry in -10.0f64..10.0) {
            let markers = data_centers(280.0);
            let projected = project_markers(&markers, &EulerYX::new(rx, ry), Vec2::new(500.0, 500.0));
            let s = snapshot(projected.clone());
            let opts = PickOptions::default();
            for m in projected.iter().filter(|m| m.depth >= opts.cull_depth) {
                let hit = pick_marker(&s, m.screen, opts).expect("hit");
                prop_assert_eq!(hit.id, m.id);
            }
        }

        #[test]
        fn far_clicks_miss(rx in -0.6f64..1.2, ry in -10.0f64..10.0) {
            let markers = data_centers(280.0);
            let projected = project_markers(&markers, &EulerYX::new(rx, ry), Vec2::new(500.0, 500.0));
            let s = snapshot(projected);
            // The network is confined to a small cap; the canvas corner is far from all of it.
            prop_assert!(pick_marker(&s, Vec2::new(0.0, 0.0), PickOptions::default()).is_none());
        }
    }
}
