// Tuning constants for the particle field. `FieldParams::default()` is built from these.

// Population
pub const COUNT_PER_PIXEL: f32 = 0.1; // particles per pixel of viewport width
pub const MAX_PARTICLES: usize = 100;

// Motion (pixels per frame)
pub const MAX_SPEED: f32 = 0.25;

// Size and opacity
pub const MAX_RADIUS: f32 = 2.0;
pub const ALPHA_MIN: f32 = 0.1;
pub const ALPHA_MAX: f32 = 0.6;
pub const ALPHA_PULSE: f32 = 0.01; // max alpha drift per frame, either direction

// Glow
pub const GLOW_PROBABILITY: f64 = 0.1;
pub const GLOW_BLUR: f32 = 10.0;
pub const GLOW_ALPHA: f32 = 0.8;

// Gold
pub const PARTICLE_RGB: [u8; 3] = [212, 175, 55];
