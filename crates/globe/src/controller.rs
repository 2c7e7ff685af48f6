//! Two-axis globe controller with drag, momentum and spring smoothing.
//!
//! Pointer drags move the *targets* of two springs; the rendered angles
//! follow through [`SpringValue`]. While idle the Y target advances by a
//! fixed step plus the decaying drag momentum.

use foundation::math::{EulerYX, Vec2};

use crate::config::MotionConfig;
use crate::spring::SpringValue;

#[derive(Debug, Clone)]
pub struct GlobeController {
    config: MotionConfig,

    /// Tilt around X, clamped to `[rotation_x_min, rotation_x_max]`.
    rot_x: SpringValue,

    /// Spin around Y, unbounded.
    rot_y: SpringValue,

    /// Y momentum carried after a drag, in radians per frame.
    drag_velocity: f64,

    dragging: bool,

    /// Last pointer position in CSS pixels.
    last_pos_px: Vec2,
}

impl Default for GlobeController {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl GlobeController {
    pub fn new(config: MotionConfig) -> Self {
        let x0 = config
            .initial_rotation_x
            .clamp(config.rotation_x_min, config.rotation_x_max);
        Self {
            config,
            rot_x: SpringValue::at_rest(x0),
            rot_y: SpringValue::at_rest(0.0),
            drag_velocity: 0.0,
            dragging: false,
            last_pos_px: Vec2::default(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn target_x(&self) -> f64 {
        self.rot_x.target
    }

    pub fn target_y(&self) -> f64 {
        self.rot_y.target
    }

    pub fn drag_velocity(&self) -> f64 {
        self.drag_velocity
    }

    /// Smoothed rotation used for projection.
    pub fn angles(&self) -> EulerYX {
        EulerYX::new(self.rot_x.value, self.rot_y.value)
    }

    /// Jumps straight to an orientation, bypassing the springs.
    pub fn snap_to(&mut self, x_rad: f64, y_rad: f64) {
        let x = x_rad.clamp(self.config.rotation_x_min, self.config.rotation_x_max);
        self.rot_x = SpringValue::at_rest(x);
        self.rot_y = SpringValue::at_rest(y_rad);
        self.drag_velocity = 0.0;
    }

    pub fn on_pointer_down(&mut self, pos_px: Vec2) {
        self.dragging = true;
        self.last_pos_px = pos_px;
    }

    pub fn on_pointer_move(&mut self, pos_px: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = pos_px - self.last_pos_px;
        self.last_pos_px = pos_px;

        let dx = delta.x * self.config.drag_sensitivity;
        let dy = delta.y * self.config.drag_sensitivity;

        self.rot_y.target -= dx;
        self.rot_x.target = (self.rot_x.target + dy)
            .clamp(self.config.rotation_x_min, self.config.rotation_x_max);
        self.drag_velocity = -dx * self.config.drag_velocity_gain;
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Advances one animation frame of `dt_s` seconds.
    pub fn update(&mut self, dt_s: f64) {
        if !self.dragging {
            self.drag_velocity *= self.config.drag_decay;
            self.rot_y.target += self.config.idle_rate + self.drag_velocity;
        }
        self.rot_x.step(dt_s, &self.config.spring);
        self.rot_y.step(dt_s, &self.config.spring);
    }
}
