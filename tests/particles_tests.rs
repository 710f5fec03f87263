// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use fx::constants::{PARTICLE_MAX_COUNT, POINTER_RADIUS, REPEL_STEP_MAX};
use fx::particles::*;
use glam::Vec2;

fn far_pointer() -> PointerState {
    PointerState {
        pos: Vec2::new(1.0e6, 1.0e6),
        radius: POINTER_RADIUS,
    }
}

#[test]
fn target_count_follows_area_and_cap() {
    // 300x300 = 90000 px^2 -> 6 particles
    assert_eq!(target_count(300.0, 300.0), 6);
    // full HD saturates the cap
    assert_eq!(target_count(1920.0, 1080.0), PARTICLE_MAX_COUNT);
    // degenerate surface -> empty field
    assert_eq!(target_count(0.0, 0.0), 0);
    assert_eq!(target_count(100.0, 100.0), 0);
}

#[test]
fn resize_repopulates_within_bounds() {
    let mut field = ParticleField::new(7);
    field.resize(640.0, 480.0);
    assert_eq!(field.len(), target_count(640.0, 480.0));
    assert!(!field.is_empty());

    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
        assert!(p.size >= 0.5 && p.size < 2.5);
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        assert!(p.color.alpha >= 0.1 && p.color.alpha < 0.6);
        assert!(p.color.red >= 155);
        assert!(p.color.green >= 155);
    }
}

#[test]
fn resize_replaces_the_whole_population() {
    let mut field = ParticleField::new(7);
    field.resize(1920.0, 1080.0);
    assert_eq!(field.len(), PARTICLE_MAX_COUNT);
    field.resize(300.0, 300.0);
    assert_eq!(field.len(), 6);
    for p in field.particles() {
        assert!(p.pos.x <= 300.0 && p.pos.y <= 300.0);
    }
}

#[test]
fn same_seed_means_same_population() {
    let mut a = ParticleField::new(42);
    let mut b = ParticleField::new(42);
    a.resize(800.0, 600.0);
    b.resize(800.0, 600.0);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.color, pb.color);
    }
}

#[test]
fn wrap_reenters_at_the_opposite_edge() {
    // exiting right re-enters at x = 0, not mirrored
    assert_eq!(wrap(305.0, 300.0), 0.0);
    assert_eq!(wrap(-0.1, 300.0), 300.0);
    // in-bounds coordinates are untouched, including the boundary itself
    assert_eq!(wrap(150.0, 300.0), 150.0);
    assert_eq!(wrap(0.0, 300.0), 0.0);
    assert_eq!(wrap(300.0, 300.0), 300.0);
}

#[test]
fn step_keeps_every_position_inside_the_surface() {
    let mut field = ParticleField::new(3);
    field.resize(500.0, 400.0);
    let mut pointer = PointerState::default();
    for i in 0..500 {
        // sweep the pointer across the surface to exercise the force field
        pointer.pos = Vec2::new((i % 500) as f32, (i % 400) as f32);
        field.step(&pointer);
        for p in field.particles() {
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
            assert!(p.pos.x >= 0.0 && p.pos.x <= 500.0, "x out of bounds: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 400.0, "y out of bounds: {}", p.pos.y);
        }
    }
}

// 150x100 yields exactly one particle, which makes single-step expectations
// easy to write down.
fn single_particle_field(seed: u64) -> ParticleField {
    let mut field = ParticleField::new(seed);
    field.resize(150.0, 100.0);
    assert_eq!(field.len(), 1);
    field
}

#[test]
fn step_without_pointer_force_advances_by_velocity() {
    let mut field = single_particle_field(11);
    let before = field.particles()[0].clone();
    field.step(&far_pointer());
    let after = field.particles()[0].pos;
    let expected = Vec2::new(
        wrap(before.pos.x + before.vel.x, 150.0),
        wrap(before.pos.y + before.vel.y, 100.0),
    );
    assert!((after - expected).length() < 1e-4);
}

#[test]
fn step_pushes_particles_away_from_the_pointer() {
    let mut field = single_particle_field(11);
    let before = field.particles()[0].clone();
    let drifted = before.pos + before.vel;

    // pointer 10px to the right of where the particle drifts to
    let pointer = PointerState {
        pos: drifted + Vec2::new(10.0, 0.0),
        radius: POINTER_RADIUS,
    };
    field.step(&pointer);

    let push = repulsion_magnitude(10.0, POINTER_RADIUS);
    let expected = Vec2::new(wrap(drifted.x - push, 150.0), wrap(drifted.y, 100.0));
    assert!((field.particles()[0].pos - expected).length() < 1e-3);
}

#[test]
fn pointer_exactly_on_a_particle_is_harmless() {
    let mut field = single_particle_field(11);
    let before = field.particles()[0].clone();
    let drifted = before.pos + before.vel;

    let pointer = PointerState {
        pos: drifted,
        radius: POINTER_RADIUS,
    };
    field.step(&pointer);

    let after = field.particles()[0].pos;
    assert!(after.x.is_finite() && after.y.is_finite());
    // zero distance applies no force at all
    let expected = Vec2::new(wrap(drifted.x, 150.0), wrap(drifted.y, 100.0));
    assert!((after - expected).length() < 1e-4);
}

#[test]
fn repulsion_magnitude_matches_the_linear_profile() {
    let r = POINTER_RADIUS;
    assert_eq!(repulsion_magnitude(0.0, r), REPEL_STEP_MAX);
    assert!((repulsion_magnitude(25.0, r) - 3.75).abs() < 1e-6);
    assert!((repulsion_magnitude(50.0, r) - 2.5).abs() < 1e-6);
    assert_eq!(repulsion_magnitude(r, r), 0.0);
    assert_eq!(repulsion_magnitude(r + 100.0, r), 0.0);
}

#[test]
fn repulsion_magnitude_decreases_with_distance() {
    let r = POINTER_RADIUS;
    let mut prev = repulsion_magnitude(0.0, r);
    for d in 1..=100 {
        let m = repulsion_magnitude(d as f32, r);
        assert!(m <= prev, "force grew between {} and {}", d - 1, d);
        prev = m;
    }
}

#[test]
fn connection_alpha_fades_with_distance() {
    assert!((connection_alpha(0.0).unwrap() - 0.1).abs() < 1e-6);
    assert!((connection_alpha(50.0).unwrap() - 0.05).abs() < 1e-6);
    assert!(connection_alpha(99.0).unwrap() > 0.0);
    assert_eq!(connection_alpha(100.0), None);
    assert_eq!(connection_alpha(250.0), None);
}

#[test]
fn particle_color_renders_as_css_rgba() {
    let color = ParticleColor {
        red: 160,
        green: 200,
        alpha: 0.25,
    };
    assert_eq!(color.css(), "rgba(160, 200, 255, 0.25)");
}
