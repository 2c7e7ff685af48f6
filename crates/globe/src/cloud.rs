use foundation::math::{Vec3, spherical_to_cartesian, spiral_samples};

use crate::land::is_land;

/// One static dot on the globe surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    /// Brightness weight in `[0, 1]`.
    pub alpha: f64,
}

/// Samples `count` spiral points and keeps those on land.
pub fn generate_point_cloud(count: usize, radius: f64) -> Vec<SurfacePoint> {
    spiral_samples(count)
        .filter(|s| is_land(s.theta, s.phi_wrapped()))
        .map(|s| SurfacePoint {
            position: spherical_to_cartesian(s.theta, s.phi, radius),
            alpha: 1.0,
        })
        .collect()
}
