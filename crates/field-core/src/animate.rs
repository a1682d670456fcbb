//! Cooperative frame driver.
//!
//! The host's frame clock calls [`Animator::step`] once per repaint and asks
//! for another frame only while it returns [`Step::Continue`]. Stopping is a
//! matter of tripping the [`StopToken`]; the next step observes it and draws
//! nothing.

use crate::error::FieldError;
use crate::field::Field;
use crate::surface::DrawSurface;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Cloneable cancellation flag. All clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

pub struct Animator<S, R> {
    pub field: Field<R>,
    pub surface: S,
    token: StopToken,
    frames: u64,
}

impl<S: DrawSurface, R: Rng> Animator<S, R> {
    pub fn new(field: Field<R>, surface: S) -> Self {
        Self {
            field,
            surface,
            token: StopToken::new(),
            frames: 0,
        }
    }

    pub fn token(&self) -> StopToken {
        self.token.clone()
    }

    pub fn step(&mut self) -> Result<Step, FieldError> {
        if self.token.is_stopped() {
            return Ok(Step::Stop);
        }
        self.field.tick(&mut self.surface)?;
        self.frames += 1;
        Ok(Step::Continue)
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
