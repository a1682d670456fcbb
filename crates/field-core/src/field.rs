use crate::error::FieldError;
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::surface::{DrawSurface, Viewport};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Running,
}

/// Owns the particles, the wraparound bounds and the random source.
pub struct Field<R = StdRng> {
    pub params: FieldParams,
    particles: Vec<Particle>,
    bounds: Viewport,
    state: FieldState,
    rng: R,
}

impl Field<StdRng> {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FieldParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }
}

impl<R: Rng> Field<R> {
    pub fn with_rng(params: FieldParams, rng: R) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Viewport::default(),
            state: FieldState::Uninitialized,
            rng,
        }
    }

    /// Capture `viewport` and repopulate. The count is fixed here, from the
    /// viewport width, and later resizes leave it alone.
    pub fn initialize(&mut self, viewport: Viewport) {
        self.bounds = viewport;
        let count = self.params.target_count(viewport.width());
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(self.bounds, &self.params, &mut self.rng);
            self.particles.push(p);
        }
        self.state = FieldState::Running;
        log::debug!(
            "[field] initialized {}x{} with {} particles",
            viewport.width(),
            viewport.height(),
            count
        );
    }

    /// Update the wraparound bounds. Existing particles keep going and wrap
    /// against the new edges on their next advance.
    pub fn resize(&mut self, viewport: Viewport) {
        self.bounds = viewport;
        log::debug!("[field] resized to {}x{}", viewport.width(), viewport.height());
    }

    /// Clear the surface, then advance and draw every particle once.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Result<(), FieldError> {
        if self.state == FieldState::Uninitialized {
            return Err(FieldError::Uninitialized);
        }
        surface.clear(self.bounds.width(), self.bounds.height());
        for p in &mut self.particles {
            p.advance(self.bounds, &self.params, &mut self.rng);
            p.render(surface, &self.params);
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn state(&self) -> FieldState {
        self.state
    }
}
