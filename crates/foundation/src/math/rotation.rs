use super::Vec3;

/// Two-axis Euler rotation: spin (`y_rad`) in the x/y plane, then tilt
/// (`x_rad`) in the y/z plane.
///
/// Not gimbal-safe; callers keep the tilt clamped away from the poles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EulerYX {
    pub x_rad: f64,
    pub y_rad: f64,
    sin_x: f64,
    cos_x: f64,
    sin_y: f64,
    cos_y: f64,
}

impl EulerYX {
    pub fn new(x_rad: f64, y_rad: f64) -> Self {
        Self {
            x_rad,
            y_rad,
            sin_x: x_rad.sin(),
            cos_x: x_rad.cos(),
            sin_y: y_rad.sin(),
            cos_y: y_rad.cos(),
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Rotates `p`; the result's `z` is depth toward the viewer.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let x = p.x * self.cos_y - p.y * self.sin_y;
        let y = p.x * self.sin_y + p.y * self.cos_y;
        let z = p.z;
        Vec3::new(
            x,
            y * self.cos_x - z * self.sin_x,
            y * self.sin_x + z * self.cos_x,
        )
    }
}

impl Default for EulerYX {
    fn default() -> Self {
        Self::identity()
    }
}
