use std::f64::consts::{PI, TAU};

use super::Vec3;

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl LatLon {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Standard spherical-to-Cartesian mapping.
///
/// `theta` is the polar angle measured from +Z, `phi` the azimuth in the
/// x/y plane measured from +X.
pub fn spherical_to_cartesian(theta: f64, phi: f64, radius: f64) -> Vec3 {
    let sin_theta = theta.sin();
    Vec3::new(
        radius * sin_theta * phi.cos(),
        radius * sin_theta * phi.sin(),
        radius * theta.cos(),
    )
}

/// Maps a lat/lon pair onto a sphere of `radius`.
///
/// Longitude is offset by 180° so the prime meridian faces -X.
pub fn lat_lon_to_sphere(geo: LatLon, radius: f64) -> Vec3 {
    let theta = (90.0 - geo.lat_deg).to_radians();
    let phi = (180.0 + geo.lon_deg).to_radians();
    spherical_to_cartesian(theta, phi, radius)
}

/// One sample of the golden-spiral sphere walk.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralSample {
    /// Polar angle in `[0, PI]`.
    pub theta: f64,
    /// Unwrapped azimuth; grows with `theta`.
    pub phi: f64,
}

impl SpiralSample {
    /// Azimuth wrapped into `[0, TAU)`.
    pub fn phi_wrapped(&self) -> f64 {
        self.phi.rem_euclid(TAU)
    }
}

/// Walks `count` points spread evenly in `cos(theta)` along a spiral.
///
/// Deterministic: the same `count` always yields the same samples.
pub fn spiral_samples(count: usize) -> impl Iterator<Item = SpiralSample> {
    let n = count as f64;
    let winding = (n * PI).sqrt();
    (0..count).map(move |i| {
        let theta = (-1.0 + (2.0 * i as f64) / n).clamp(-1.0, 1.0).acos();
        SpiralSample {
            theta,
            phi: winding * theta,
        }
    })
}
