use crate::constants::*;
use crate::surface::{Glow, Rgba};

/// Tunables for particle creation and drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count_per_pixel: f32,
    pub max_particles: usize,
    pub max_speed: f32,
    pub max_radius: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub alpha_pulse: f32,
    pub glow_probability: f64,
    pub color: [u8; 3],
    pub glow: Glow,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count_per_pixel: COUNT_PER_PIXEL,
            max_particles: MAX_PARTICLES,
            max_speed: MAX_SPEED,
            max_radius: MAX_RADIUS,
            alpha_min: ALPHA_MIN,
            alpha_max: ALPHA_MAX,
            alpha_pulse: ALPHA_PULSE,
            glow_probability: GLOW_PROBABILITY,
            color: PARTICLE_RGB,
            glow: Glow {
                blur: GLOW_BLUR,
                color: Rgba::new(PARTICLE_RGB, GLOW_ALPHA),
            },
        }
    }
}

impl FieldParams {
    /// Particles to spawn for a viewport `width` pixels wide. A fractional
    /// target rounds up; zero, negative or non-finite width gives an empty field.
    pub fn target_count(&self, width: f32) -> usize {
        if !width.is_finite() {
            return 0;
        }
        let target = (width * self.count_per_pixel).min(self.max_particles as f32);
        if target > 0.0 {
            target.ceil() as usize
        } else {
            0
        }
    }
}
