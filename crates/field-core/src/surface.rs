//! Drawing-side types shared by the simulation and the platform front-ends.
//!
//! The field never talks to a canvas directly; it issues calls on a
//! [`DrawSurface`]. The web front-end implements it on a 2D canvas context and
//! tests implement it with a recorder.

use glam::Vec2;
use std::fmt;

/// Straight (non-premultiplied) colour with 8-bit channels and a float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Formats as a CSS colour, e.g. `rgba(212, 175, 55, 0.4)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Soft halo drawn around subsequent fills while enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

/// Viewport size in CSS pixels. Only constructible through [`Viewport::new`],
/// so both dimensions are always finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

pub trait DrawSurface {
    /// Erase the rectangle from the origin to `(width, height)`.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// `None` turns the glow mode off.
    fn set_glow(&mut self, glow: Option<Glow>);
}
