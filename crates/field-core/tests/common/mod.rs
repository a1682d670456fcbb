#![allow(dead_code)]
use field_core::{DrawSurface, Glow, Rgba};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f32, f32),
    Fill(Vec2, f32, Rgba),
    Glow(Option<Glow>),
}

/// Surface that remembers every call, in order.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn fills(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Fill(..))).count()
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count()
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Fill(center, radius, color));
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.ops.push(Op::Glow(glow));
    }
}
