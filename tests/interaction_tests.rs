// Host-side tests for the pure interaction state: cursor easing, hover
// tilt math, the title rotator, and the navigation menu. The main crate is
// wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod rotator {
        include!("../src/core/rotator.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
}

use fx::follower::{ease_toward, FollowerState};
use fx::nav::MenuState;
use fx::rotator::TitleRotator;
use fx::tilt::*;
use glam::Vec2;

#[test]
fn follower_moves_a_fixed_fraction_per_frame() {
    let mut state = FollowerState::default();
    state.set_target(100.0, 40.0);

    let shown = state.step();
    assert!((shown.x - 15.0).abs() < 1e-4);
    assert!((shown.y - 6.0).abs() < 1e-4);

    let shown = state.step();
    assert!((shown.x - 27.75).abs() < 1e-4);
}

#[test]
fn follower_converges_on_a_still_target() {
    let mut state = FollowerState::default();
    state.set_target(300.0, -120.0);
    for _ in 0..200 {
        state.step();
    }
    assert!((state.shown - state.target).length() < 0.01);
}

#[test]
fn ease_toward_is_a_partial_step() {
    assert_eq!(ease_toward(0.0, 10.0, 0.5), 5.0);
    assert_eq!(ease_toward(10.0, 10.0, 0.15), 10.0);
    // overshoot never happens for alpha in (0, 1]
    let next = ease_toward(0.0, 1.0, 1.0);
    assert_eq!(next, 1.0);
}

#[test]
fn center_offset_is_normalized_per_axis() {
    // dead center
    let c = center_offset(Vec2::new(100.0, 50.0), 200.0, 100.0);
    assert_eq!(c, Vec2::ZERO);
    // corners hit the extremes
    let tl = center_offset(Vec2::new(0.0, 0.0), 200.0, 100.0);
    assert_eq!(tl, Vec2::new(-1.0, -1.0));
    let br = center_offset(Vec2::new(200.0, 100.0), 200.0, 100.0);
    assert_eq!(br, Vec2::new(1.0, 1.0));
    // degenerate boxes stay neutral
    assert_eq!(center_offset(Vec2::new(5.0, 5.0), 0.0, 100.0), Vec2::ZERO);
}

#[test]
fn effects_disable_below_the_desktop_threshold() {
    assert!(!effects_enabled(320.0));
    assert!(!effects_enabled(767.9));
    assert!(effects_enabled(768.0));
    assert!(effects_enabled(1920.0));
}

#[test]
fn tilt_angles_follow_the_pointer() {
    // pointer at the top-right corner: yaw right, pitch up
    let a = tilt_angles(Vec2::new(1.0, -1.0), 10.0);
    assert_eq!(a.rotate_y_deg, 10.0);
    assert_eq!(a.rotate_x_deg, 10.0);
    // bottom-left mirrors it
    let b = tilt_angles(Vec2::new(-1.0, 1.0), 10.0);
    assert_eq!(b.rotate_y_deg, -10.0);
    assert_eq!(b.rotate_x_deg, -10.0);
    // center is neutral
    let c = tilt_angles(Vec2::ZERO, 10.0);
    assert_eq!(c.rotate_x_deg, 0.0);
    assert_eq!(c.rotate_y_deg, 0.0);
}

#[test]
fn magnet_translation_scales_with_offset() {
    let shift = magnet_translation(Vec2::new(1.0, -0.5), 10.0);
    assert_eq!(shift, Vec2::new(10.0, -5.0));
    assert_eq!(magnet_transform(shift), "translate(10.00px, -5.00px)");
}

#[test]
fn cube_and_card_transforms_render_as_css() {
    let angles = tilt_angles(Vec2::new(0.5, -0.5), 10.0);
    assert_eq!(
        cube_transform(&angles),
        "perspective(1000px) rotateX(5.00deg) rotateY(5.00deg) translateZ(20px)"
    );
    let angles = tilt_angles(Vec2::new(1.0, 0.0), 5.0);
    assert_eq!(
        card_transform(&angles),
        "perspective(1000px) rotateX(-0.00deg) rotateY(5.00deg) translateY(-15px)"
    );
}

#[test]
fn card_image_counter_parallax() {
    // bottom-right corner of a 200x100 card
    let shift = parallax_shift(Vec2::new(200.0, 100.0), 200.0, 100.0);
    assert!((shift - Vec2::new(5.0, 2.5)).length() < 1e-5);
    assert_eq!(
        card_image_transform(shift),
        "translate(5.00px, 2.50px) scale(1.05)"
    );
    // neutral string is what pointer-exit restores
    assert_eq!(CARD_IMAGE_NEUTRAL, "translate(0, 0) scale(1)");
}

#[test]
fn rotator_cycles_through_four_items() {
    let mut rotator = TitleRotator::new(4);
    assert_eq!(rotator.count(), 4);
    assert_eq!(rotator.active(), None);

    // startup tick activates the first item
    assert_eq!(rotator.advance(), Some(0));
    assert!(rotator.is_active(0));

    // three interval ticks walk 1 -> 2 -> 3, the fourth wraps to 0
    assert_eq!(rotator.advance(), Some(1));
    assert_eq!(rotator.advance(), Some(2));
    assert_eq!(rotator.advance(), Some(3));
    assert_eq!(rotator.advance(), Some(0));
}

#[test]
fn rotator_handles_degenerate_lists() {
    let mut empty = TitleRotator::new(0);
    assert_eq!(empty.advance(), None);
    assert_eq!(empty.active(), None);

    let mut single = TitleRotator::new(1);
    assert_eq!(single.advance(), Some(0));
    assert_eq!(single.advance(), Some(0));
}

#[test]
fn rotator_only_one_item_is_active() {
    let mut rotator = TitleRotator::new(3);
    rotator.advance();
    rotator.advance();
    let active: Vec<bool> = (0..3).map(|i| rotator.is_active(i)).collect();
    assert_eq!(active.iter().filter(|a| **a).count(), 1);
    assert!(rotator.is_active(1));
}

#[test]
fn menu_toggle_locks_and_unlocks_scroll() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());
    assert!(!menu.scroll_locked());

    // toggle while closed -> open with scroll locked
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(menu.scroll_locked());

    // nav-link selection closes and unlocks
    assert!(menu.close());
    assert!(!menu.is_open());
    assert!(!menu.scroll_locked());
}

#[test]
fn menu_close_is_idempotent() {
    let mut menu = MenuState::default();
    assert!(!menu.close());
    menu.toggle();
    assert!(menu.close());
    assert!(!menu.close());
}

#[test]
fn menu_toggle_flips_both_ways() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(!menu.is_open());
}
