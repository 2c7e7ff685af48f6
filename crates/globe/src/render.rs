use foundation::math::Vec2;

use crate::config::GlobeConfig;
use crate::projection::{ProjectedMarker, ProjectedPoint, rim_alpha};
use crate::surface::{Rgba, Surface};

pub const MARKER_CORE_RADIUS: f64 = 6.5;
pub const MARKER_GLOW_RADIUS: f64 = 10.0;

const OUTER_GLOW: Rgba = Rgba::new(255, 100, 0, 0.25);
const MID_GLOW: Rgba = Rgba::new(255, 120, 0, 0.45);
const INNER_GLOW: Rgba = Rgba::new(255, 140, 0, 0.65);
const CORE: Rgba = Rgba::new(255, 160, 0, 0.95);
const SPECULAR: Rgba = Rgba::new(255, 200, 100, 0.8);
const SPECULAR_OFFSET: Vec2 = Vec2 { x: -1.5, y: -1.5 };

/// Dot radius grows toward the viewer.
pub fn dot_size(depth: f64) -> f64 {
    ((depth + 300.0) / 110.0).max(3.0)
}

/// Draws depth-sorted surface points. Returns how many were drawn.
pub fn draw_points<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[ProjectedPoint],
    center: Vec2,
    config: &GlobeConfig,
) -> usize {
    let mut drawn = 0;
    for p in points {
        if p.depth < config.cull_depth {
            continue;
        }
        let alpha = rim_alpha(p.offset, p.depth, p.weight, config.radius);
        if alpha < config.min_alpha {
            continue;
        }
        let lum = (230.0 + 50.0 * alpha).floor().min(255.0) as u8;
        let color = Rgba::new(lum, lum, lum, (alpha * 0.8).min(0.6));
        surface.fill_circle(center + p.offset, dot_size(p.depth), color);
        drawn += 1;
    }
    drawn
}

/// Draws markers as layered beacons. Returns how many were drawn.
pub fn draw_markers<S: Surface + ?Sized>(
    surface: &mut S,
    markers: &[ProjectedMarker],
    center: Vec2,
    config: &GlobeConfig,
) -> usize {
    let mut drawn = 0;
    for m in markers {
        if m.depth < config.cull_depth {
            continue;
        }
        let alpha = rim_alpha(m.screen - center, m.depth, 1.0, config.radius);
        if alpha < config.min_alpha {
            continue;
        }
        let at = m.screen;
        surface.fill_circle(at, MARKER_GLOW_RADIUS, OUTER_GLOW.with_alpha(alpha * OUTER_GLOW.a));
        surface.fill_circle(at, MARKER_GLOW_RADIUS * 0.65, MID_GLOW.with_alpha(alpha * MID_GLOW.a));
        surface.fill_circle(at, MARKER_GLOW_RADIUS * 0.35, INNER_GLOW.with_alpha(alpha * INNER_GLOW.a));
        surface.fill_circle(at, MARKER_CORE_RADIUS, CORE.with_alpha(alpha.min(CORE.a)));
        surface.fill_circle(
            at + SPECULAR_OFFSET,
            MARKER_CORE_RADIUS * 0.4,
            SPECULAR.with_alpha(alpha * SPECULAR.a),
        );
        drawn += 1;
    }
    drawn
}
