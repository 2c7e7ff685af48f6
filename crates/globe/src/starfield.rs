//! Decorative twinkling star layer behind the globe.

use std::f64::consts::TAU;

use foundation::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::surface::{Rgba, Surface};

/// Seconds of twinkle phase added per drawn frame.
pub const TWINKLE_STEP_S: f64 = 0.016;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub opacity: f64,
    pub size: f64,
    pub twinkle_period: f64,
    pub phase: f64,
}

impl Star {
    /// Opacity after applying the twinkle at `elapsed_s`.
    pub fn opacity_at(&self, elapsed_s: f64) -> f64 {
        let twinkle = (elapsed_s / self.twinkle_period + self.phase).sin() * 0.5 + 0.5;
        self.opacity * (0.4 + 0.6 * twinkle)
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    elapsed_s: f64,
}

impl Starfield {
    pub fn generate(count: usize, canvas: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // An empty range would panic in `gen_range`.
        let count = if canvas.x > 0.0 && canvas.y > 0.0 { count } else { 0 };
        let stars = (0..count)
            .map(|_| Star {
                position: Vec2::new(rng.gen_range(0.0..canvas.x), rng.gen_range(0.0..canvas.y)),
                opacity: rng.gen_range(0.3..0.9),
                size: rng.gen_range(0.5..2.0),
                twinkle_period: rng.gen_range(2.0..5.0),
                phase: rng.gen_range(0.0..TAU),
            })
            .collect();
        Self {
            stars,
            elapsed_s: 0.0,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// Draws the current frame and advances the twinkle clock.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        for star in &self.stars {
            let opacity = star.opacity_at(self.elapsed_s);
            let white = Rgba::new(255, 255, 255, opacity);
            surface.fill_circle(star.position, star.size, white);
            surface.stroke_circle(star.position, star.size, white.with_alpha(opacity * 0.5), 0.5);
        }
        self.elapsed_s += TWINKLE_STEP_S;
    }
}
