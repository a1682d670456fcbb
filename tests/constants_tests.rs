// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use field_core::{FieldParams, ALPHA_MAX, ALPHA_MIN, GLOW_ALPHA, MAX_PARTICLES};

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_in_observer_options_are_sane() {
    assert!(FADE_IN_THRESHOLD > 0.0 && FADE_IN_THRESHOLD <= 1.0);
    assert_eq!(FADE_IN_SELECTOR, format!(".{}", FADE_IN_CLASS));
    assert_ne!(FADE_IN_CLASS, VISIBLE_CLASS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn header_threshold_is_positive() {
    assert!(HEADER_SCROLL_THRESHOLD_PX > 0.0);
    assert_ne!(HEADER_BG_SCROLLED, HEADER_BG_TOP);
}

#[test]
fn anchor_selector_targets_fragment_links() {
    assert!(ANCHOR_SELECTOR.starts_with("a[href^="));
    assert!(ANCHOR_SELECTOR.contains('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_has_logical_relationships() {
    // glow halo reads brighter than any particle body
    assert!(GLOW_ALPHA > ALPHA_MAX);
    assert!(ALPHA_MIN > 0.0 && ALPHA_MIN < ALPHA_MAX);
    assert!(MAX_PARTICLES > 0);

    let params = FieldParams::default();
    assert!(params.glow_probability > 0.0 && params.glow_probability < 1.0);
    assert!(params.alpha_pulse < params.alpha_max - params.alpha_min);
}
