mod common;

use common::{Op, Recorder};
use field_core::*;

fn field_for(width: f32, height: f32) -> Field {
    let mut field = Field::new(FieldParams::default(), 42);
    field.initialize(Viewport::new(width, height));
    field
}

#[test]
fn count_scales_with_width_and_caps_at_hundred() {
    assert_eq!(field_for(1000.0, 800.0).particles().len(), 100);
    assert_eq!(field_for(500.0, 800.0).particles().len(), 50);
    assert_eq!(field_for(0.0, 800.0).particles().len(), 0);
    assert_eq!(field_for(3840.0, 2160.0).particles().len(), 100);
}

#[test]
fn fractional_target_rounds_up() {
    assert_eq!(field_for(505.0, 400.0).particles().len(), 51);
    assert_eq!(field_for(1.0, 1.0).particles().len(), 1);
    assert_eq!(FieldParams::default().target_count(-20.0), 0);
}

#[test]
fn resize_keeps_particle_count() {
    let mut field = field_for(500.0, 400.0);
    assert_eq!(field.particles().len(), 50);

    field.resize(Viewport::new(1920.0, 1080.0));
    assert_eq!(field.particles().len(), 50);
    assert_eq!(field.bounds(), Viewport::new(1920.0, 1080.0));

    field.resize(Viewport::new(0.0, 0.0));
    assert_eq!(field.particles().len(), 50);
}

#[test]
fn shrinking_viewport_pulls_particles_back_in_bounds() {
    let mut field = field_for(1000.0, 1000.0);
    field.resize(Viewport::new(200.0, 150.0));
    let mut surface = Recorder::default();
    field.tick(&mut surface).unwrap();
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 200.0);
        assert!(p.position.y >= 0.0 && p.position.y < 150.0);
    }
}

#[test]
fn empty_field_tick_only_clears() {
    let mut field = field_for(0.0, 600.0);
    let mut surface = Recorder::default();
    field.tick(&mut surface).unwrap();
    assert_eq!(surface.ops, vec![Op::Clear(0.0, 600.0)]);
}

#[test]
fn tick_clears_once_then_draws_every_particle() {
    let mut field = field_for(400.0, 300.0);
    let glowing = field.particles().iter().filter(|p| p.glow).count();
    let mut surface = Recorder::default();
    field.tick(&mut surface).unwrap();

    assert_eq!(surface.ops.first(), Some(&Op::Clear(400.0, 300.0)));
    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.fills(), field.particles().len() + glowing);
}

#[test]
fn tick_before_initialize_is_rejected() {
    let mut field = Field::new(FieldParams::default(), 1);
    assert_eq!(field.state(), FieldState::Uninitialized);
    let mut surface = Recorder::default();
    assert_eq!(field.tick(&mut surface), Err(FieldError::Uninitialized));
    assert!(surface.ops.is_empty());

    // resize alone does not start the field
    field.resize(Viewport::new(100.0, 100.0));
    assert_eq!(field.tick(&mut surface), Err(FieldError::Uninitialized));

    field.initialize(Viewport::new(100.0, 100.0));
    assert_eq!(field.state(), FieldState::Running);
    assert!(field.tick(&mut surface).is_ok());
}

#[test]
fn reinitialize_replaces_population() {
    let mut field = field_for(300.0, 300.0);
    assert_eq!(field.particles().len(), 30);
    field.initialize(Viewport::new(800.0, 300.0));
    assert_eq!(field.particles().len(), 80);
}

#[test]
fn same_seed_same_field() {
    let mut a = field_for(640.0, 480.0);
    let mut b = field_for(640.0, 480.0);
    assert_eq!(a.particles(), b.particles());
    let (mut sa, mut sb) = (Recorder::default(), Recorder::default());
    for _ in 0..10 {
        a.tick(&mut sa).unwrap();
        b.tick(&mut sb).unwrap();
    }
    assert_eq!(a.particles(), b.particles());
    assert_eq!(sa.ops, sb.ops);
}

#[test]
fn viewport_sanitizes_dimensions() {
    assert_eq!(Viewport::new(-5.0, f32::NAN), Viewport::new(0.0, 0.0));
    assert_eq!(Viewport::new(f32::INFINITY, 10.0).width(), 0.0);
}

#[test]
fn animator_steps_until_stopped() {
    let mut anim = Animator::new(field_for(200.0, 200.0), Recorder::default());
    let token = anim.token();
    for _ in 0..3 {
        assert_eq!(anim.step(), Ok(Step::Continue));
    }
    assert_eq!(anim.frames(), 3);
    assert_eq!(anim.surface.clears(), 3);

    token.stop();
    assert!(anim.token().is_stopped());
    assert_eq!(anim.step(), Ok(Step::Stop));
    assert_eq!(anim.frames(), 3);
    assert_eq!(anim.surface.clears(), 3);
}

#[test]
fn animator_surfaces_uninitialized_field() {
    let field = Field::new(FieldParams::default(), 0);
    let mut anim = Animator::new(field, Recorder::default());
    assert_eq!(anim.step(), Err(FieldError::Uninitialized));
    assert_eq!(anim.frames(), 0);
}

#[test]
fn non_finite_sizes_never_reach_the_particles() {
    let params = FieldParams::default();
    assert_eq!(params.target_count(f32::NAN), 0);
    assert_eq!(params.target_count(f32::INFINITY), 0);
    assert_eq!(params.target_count(f32::NEG_INFINITY), 0);

    let mut field = Field::new(FieldParams::default(), 11);
    field.initialize(Viewport::new(f32::NAN, 10.0));
    assert!(field.particles().is_empty());

    let mut field = field_for(300.0, 200.0);
    field.resize(Viewport::new(f32::NAN, f32::INFINITY));
    let mut surface = Recorder::default();
    for _ in 0..5 {
        field.tick(&mut surface).unwrap();
    }
    assert_eq!(field.particles().len(), 30);
    for p in field.particles() {
        assert!(p.position.is_finite(), "position {:?}", p.position);
    }
}
