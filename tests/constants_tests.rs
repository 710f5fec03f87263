// Host-side tests for tuning constants and the scroll-reveal plan.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use fx::constants::*;
use fx::reveal::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_sane_bounds() {
    assert!(PARTICLE_AREA_PER > 0.0);
    assert!(PARTICLE_MAX_COUNT > 0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    assert!(PARTICLE_SPEED_HALF_RANGE > 0.0);

    // color sampling can never overflow a channel
    assert!(PARTICLE_CHANNEL_BASE as u16 + PARTICLE_CHANNEL_SPAN as u16 <= 255);
    // alpha stays translucent
    assert!(PARTICLE_ALPHA_MIN > 0.0);
    assert!(PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_have_logical_relationships() {
    // the zero-distance guard sits far inside the force field
    assert!(REPEL_MIN_DISTANCE > 0.0);
    assert!(REPEL_MIN_DISTANCE < POINTER_RADIUS);
    assert!(REPEL_STEP_MAX > 0.0);

    assert!(CONNECT_DISTANCE > 0.0);
    assert!(CONNECT_ALPHA_SCALE > 0.0 && CONNECT_ALPHA_SCALE <= 1.0);

    // easing must actually converge
    assert!(FOLLOWER_EASE > 0.0 && FOLLOWER_EASE < 1.0);

    assert!(MAGNET_STRENGTH_PX > 0.0);
    assert!(CUBE_TILT_DEG > 0.0);
    assert!(CARD_TILT_DEG > 0.0);
    // cards tilt more subtly than cubes
    assert!(CARD_TILT_DEG < CUBE_TILT_DEG);
    assert!(CARD_PARALLAX_COEFF > 0.0 && CARD_PARALLAX_COEFF < 1.0);
    assert!(CARD_IMAGE_SCALE >= 1.0);
    assert!(TILT_MIN_VIEWPORT_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timer_constants_are_ordered() {
    assert!(TITLE_START_DELAY_MS > 0);
    assert!(TITLE_INTERVAL_MS > 0);
    // items must stay highlighted longer than the startup delay
    assert!(TITLE_INTERVAL_MS >= TITLE_START_DELAY_MS);

    assert!(FORM_SEND_LATENCY_MS > 0);
    assert!(FORM_RESET_DELAY_MS > 0);
    // the transient message outlives the fade that removes it
    assert!(FORM_MESSAGE_TTL_MS > FORM_MESSAGE_FADE_MS);

    assert!(ANCHOR_SCROLL_OFFSET_PX > 0.0);
}

#[test]
fn reveal_plan_covers_the_page_groups() {
    let plan = page_reveals();
    let targets: Vec<&str> = plan.iter().map(|s| s.targets).collect();
    for expected in [
        "section:not(.hero)",
        ".skill-cube",
        ".project-card",
        ".hero-glass",
        ".image-frame",
        ".about-text",
    ] {
        assert!(targets.contains(&expected), "missing reveal for {expected}");
    }
}

#[test]
fn reveal_plan_entries_are_well_formed() {
    for spec in page_reveals() {
        assert!(!spec.targets.is_empty());
        assert!(!spec.trigger.is_empty());
        assert!(spec.duration > 0.0, "{} has no duration", spec.targets);
        assert!(!spec.ease.is_empty());
        assert!(!spec.window.start.is_empty());
        if let Some(stagger) = spec.stagger {
            assert!(stagger > 0.0);
        }
        if let Some(opacity) = spec.opacity {
            assert!((0.0..=1.0).contains(&opacity));
        }
    }
}

#[test]
fn only_the_section_sweep_triggers_per_element() {
    let plan = page_reveals();
    let per_element: Vec<&str> = plan
        .iter()
        .filter(|s| s.per_element)
        .map(|s| s.targets)
        .collect();
    assert_eq!(per_element, vec!["section:not(.hero)"]);
}

#[test]
fn the_hero_parallax_is_the_only_scrubbed_tween() {
    let plan = page_reveals();
    let scrubbed: Vec<&RevealSpec> = plan.iter().filter(|s| s.window.scrub.is_some()).collect();
    assert_eq!(scrubbed.len(), 1);
    let hero = scrubbed[0];
    assert_eq!(hero.targets, ".hero-glass");
    assert_eq!(hero.kind, TweenKind::To);
    // scrubbed tweens pace themselves off the scroll position
    assert!(hero.window.toggle_actions.is_none());
}

#[test]
fn staggered_groups_animate_from_hidden() {
    for spec in page_reveals().iter().filter(|s| s.stagger.is_some()) {
        assert_eq!(spec.kind, TweenKind::From);
        assert_eq!(spec.opacity, Some(0.0));
        assert!(spec.y > 0.0);
    }
}

#[test]
fn initial_visible_targets_cover_both_groups() {
    assert!(INITIAL_VISIBLE_TARGETS.contains(".skill-cube"));
    assert!(INITIAL_VISIBLE_TARGETS.contains(".project-card"));
}
