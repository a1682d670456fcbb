use crate::params::FieldParams;
use crate::surface::{DrawSurface, Rgba, Viewport};
use glam::Vec2;
use rand::Rng;

/// A single drifting point-light.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub glow: bool,
}

impl Particle {
    /// Spawn at a uniformly random spot inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(bounds: Viewport, params: &FieldParams, rng: &mut R) -> Self {
        let position = Vec2::new(
            wrap_axis(rng.gen::<f32>() * bounds.width(), bounds.width()),
            wrap_axis(rng.gen::<f32>() * bounds.height(), bounds.height()),
        );
        let speed = params.max_speed;
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * speed,
        );
        let radius = rng.gen::<f32>() * params.max_radius;
        let alpha = params.alpha_min + rng.gen::<f32>() * (params.alpha_max - params.alpha_min);
        let glow = rng.gen_bool(params.glow_probability.clamp(0.0, 1.0));
        Self {
            position,
            velocity,
            radius,
            alpha,
            glow,
        }
    }

    /// One frame of motion: drift, wrap at the edges, pulse the alpha.
    pub fn advance<R: Rng + ?Sized>(&mut self, bounds: Viewport, params: &FieldParams, rng: &mut R) {
        self.position += self.velocity;
        self.position.x = wrap_axis(self.position.x, bounds.width());
        self.position.y = wrap_axis(self.position.y, bounds.height());

        let nudge = (rng.gen::<f32>() - 0.5) * 2.0 * params.alpha_pulse;
        self.alpha = (self.alpha + nudge).clamp(params.alpha_min, params.alpha_max);
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, params: &FieldParams) {
        surface.fill_circle(self.position, self.radius, Rgba::new(params.color, self.alpha));
        if self.glow {
            surface.set_glow(Some(params.glow));
            surface.fill_circle(self.position, self.radius, Rgba::new(params.color, self.alpha));
            surface.set_glow(None);
        }
    }
}

/// Toroidal correction for one axis. Leaving past the far edge resets to 0
/// (not the overflow remainder); leaving below 0 lands just inside the far
/// edge so the coordinate stays in `[0, bound)`.
#[inline]
pub fn wrap_axis(v: f32, bound: f32) -> f32 {
    if v < 0.0 {
        (bound * (1.0 - f32::EPSILON)).max(0.0)
    } else if v >= bound {
        0.0
    } else {
        v
    }
}
