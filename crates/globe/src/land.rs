//! Rough land mask over (polar angle, wrapped azimuth).
//!
//! Each band is a rectangle in the sampling coordinates of
//! [`foundation::math::spiral_samples`]; together they scatter dots in
//! continent-like clusters. Not a geographic dataset.

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LandBand {
    pub name: &'static str,
    pub theta: (f64, f64),
    pub phi: (f64, f64),
}

impl LandBand {
    const fn new(name: &'static str, theta: (f64, f64), phi: (f64, f64)) -> Self {
        Self { name, theta, phi }
    }

    pub fn contains(&self, theta: f64, phi: f64) -> bool {
        theta > self.theta.0 && theta < self.theta.1 && phi > self.phi.0 && phi < self.phi.1
    }
}

pub const LAND_BANDS: [LandBand; 6] = [
    LandBand::new("africa", (0.55, 1.25), (0.0, 0.9)),
    LandBand::new("europe", (1.25, 1.45), (0.0, 0.8)),
    LandBand::new("north-america", (0.95, 1.45), (4.6, 5.8)),
    LandBand::new("south-america", (0.4, 1.05), (4.5, 5.2)),
    LandBand::new("eurasia", (0.9, 1.5), (0.8, 3.2)),
    LandBand::new("australia", (0.4, 0.7), (2.0, 2.7)),
];

/// Polar cap kept regardless of azimuth.
pub const POLAR_CAP_THETA: f64 = 0.2;

pub fn is_land(theta: f64, phi_wrapped: f64) -> bool {
    theta < POLAR_CAP_THETA || LAND_BANDS.iter().any(|b| b.contains(theta, phi_wrapped))
}

#[cfg(test)]
mod tests {
    use super::{LAND_BANDS, is_land};

    #[test]
    fn band_interiors_are_land() {
        for band in LAND_BANDS {
            let theta = (band.theta.0 + band.theta.1) * 0.5;
            let phi = (band.phi.0 + band.phi.1) * 0.5;
            assert!(is_land(theta, phi), "{} center should be land", band.name);
        }
    }

    #[test]
    fn polar_cap_is_land_everywhere() {
        assert!(is_land(0.1, 0.0));
        assert!(is_land(0.1, 4.0));
    }

    #[test]
    fn open_ocean_is_not_land() {
        assert!(!is_land(2.5, 3.5));
        assert!(!is_land(0.3, 4.0));
    }
}
