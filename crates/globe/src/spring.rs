use serde::{Deserialize, Serialize};

/// Damped spring parameters (unit mass by default).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Below this distance and speed the value snaps onto the target.
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 40.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 1e-4,
        }
    }
}

/// Integration step; keeps the explicit integrator stable for stiff springs.
const MAX_SUBSTEP_S: f64 = 1.0 / 120.0;

/// A value that follows `target` through a damped spring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpringValue {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl SpringValue {
    pub fn at_rest(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the spring by `dt_s` seconds.
    pub fn step(&mut self, dt_s: f64, cfg: &SpringConfig) {
        if dt_s <= 0.0 || self.is_at_rest() {
            return;
        }
        let mass = cfg.mass.max(1e-6);
        let steps = (dt_s / MAX_SUBSTEP_S).ceil().max(1.0);
        let h = dt_s / steps;
        for _ in 0..steps as u32 {
            let displacement = self.value - self.target;
            let accel = (-cfg.stiffness * displacement - cfg.damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < cfg.rest_delta && self.velocity.abs() < cfg.rest_delta
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SpringConfig, SpringValue};

    #[test]
    fn converges_to_target() {
        let cfg = SpringConfig::default();
        let mut s = SpringValue::at_rest(0.0);
        s.target = 1.0;
        for _ in 0..600 {
            s.step(1.0 / 60.0, &cfg);
        }
        assert!(s.is_at_rest(), "spring still moving: {s:?}");
        assert_eq!(s.value, 1.0);
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let cfg = SpringConfig::default();
        let mut s = SpringValue::at_rest(0.0);
        s.target = 1.0;
        for _ in 0..240 {
            s.step(1.0 / 60.0, &cfg);
            assert!(s.value <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn zero_dt_is_noop() {
        let cfg = SpringConfig::default();
        let mut s = SpringValue::at_rest(0.0);
        s.target = 2.0;
        s.step(0.0, &cfg);
        assert_eq!(s.value, 0.0);
    }
}
