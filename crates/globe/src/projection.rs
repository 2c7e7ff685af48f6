//! Rotation of world points into view space relative to the canvas center.
//!
//! View space: `x` right, `y` down, `z` toward the viewer. Screen position is
//! `canvas_center + (x, y)`; there is no perspective.

use std::sync::Arc;

use foundation::math::precision::stable_total_cmp_f64;
use foundation::math::{EulerYX, Vec2};

use crate::cloud::SurfacePoint;
use crate::markers::{DataCenter, MarkerId};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedPoint {
    /// Offset from the canvas center.
    pub offset: Vec2,
    pub depth: f64,
    pub weight: f64,
}

/// Rotates `points` into `out` (cleared first), sorted far to near.
pub fn project_points_into(points: &[SurfacePoint], rotation: &EulerYX, out: &mut Vec<ProjectedPoint>) {
    out.clear();
    out.extend(points.iter().map(|p| {
        let v = rotation.apply(p.position);
        ProjectedPoint {
            offset: v.xy(),
            depth: v.z,
            weight: p.alpha,
        }
    }));
    out.sort_by(|a, b| stable_total_cmp_f64(a.depth, b.depth));
}

/// A marker as placed in one rendered frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedMarker {
    /// Index into the globe's marker list.
    pub index: usize,
    pub id: MarkerId,
    /// Position in logical canvas pixels.
    pub screen: Vec2,
    pub depth: f64,
}

/// Immutable per-frame marker placement used for hit testing between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSnapshot {
    pub frame_index: u64,
    /// Far to near.
    pub markers: Vec<ProjectedMarker>,
}

impl MarkerSnapshot {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

pub fn project_markers(markers: &[DataCenter], rotation: &EulerYX, center: Vec2) -> Vec<ProjectedMarker> {
    let mut out: Vec<ProjectedMarker> = markers
        .iter()
        .enumerate()
        .map(|(index, m)| {
            let v = rotation.apply(m.position);
            ProjectedMarker {
                index,
                id: m.id,
                screen: center + v.xy(),
                depth: v.z,
            }
        })
        .collect();
    out.sort_by(|a, b| stable_total_cmp_f64(a.depth, b.depth).then_with(|| a.index.cmp(&b.index)));
    out
}

/// Opacity from depth and distance to the silhouette.
///
/// `weight * (z + R) / 2R * max(0, 1 - dist / (R + 1))^0.6`
pub fn rim_alpha(offset: Vec2, depth: f64, weight: f64, radius: f64) -> f64 {
    let depth_term = (depth + radius) / (2.0 * radius);
    let edge = (1.0 - offset.length() / (radius + 1.0)).max(0.0).powf(0.6);
    weight * depth_term * edge
}
