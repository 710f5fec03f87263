// Hover tilt/magnet math and the CSS transform strings the web layer
// applies. Pointer coordinates arrive element-local (relative to the
// bounding box), offsets are normalized to [-1, 1] on both axes.

use super::constants::{
    CARD_IMAGE_SCALE, CARD_LIFT_PX, CARD_PARALLAX_COEFF, CUBE_LIFT_PX, TILT_MIN_VIEWPORT_PX,
};
use glam::Vec2;

/// Hover effects are desktop-only; below this width they read as glitches
/// on touch devices.
#[inline]
pub fn effects_enabled(viewport_width: f32) -> bool {
    viewport_width >= TILT_MIN_VIEWPORT_PX
}

/// Offset of a local pointer position from the element center, normalized
/// to [-1, 1] per axis. Degenerate boxes yield a neutral offset.
pub fn center_offset(local: Vec2, width: f32, height: f32) -> Vec2 {
    let cx = width / 2.0;
    let cy = height / 2.0;
    if cx <= 0.0 || cy <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((local.x - cx) / cx, (local.y - cy) / cy)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAngles {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

/// Horizontal offset becomes yaw, vertical offset becomes inverted pitch,
/// both proportional to the strength constant.
pub fn tilt_angles(offset: Vec2, strength_deg: f32) -> TiltAngles {
    TiltAngles {
        rotate_x_deg: -offset.y * strength_deg,
        rotate_y_deg: offset.x * strength_deg,
    }
}

/// Translation for magnetic buttons.
pub fn magnet_translation(offset: Vec2, strength_px: f32) -> Vec2 {
    offset * strength_px
}

/// Counter-parallax shift for a card's inner image, in px from center.
pub fn parallax_shift(local: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (local.x - width / 2.0) * CARD_PARALLAX_COEFF,
        (local.y - height / 2.0) * CARD_PARALLAX_COEFF,
    )
}

pub fn magnet_transform(shift: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", shift.x, shift.y)
}

pub const MAGNET_NEUTRAL: &str = "translate(0px, 0px)";

pub fn cube_transform(angles: &TiltAngles) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
        angles.rotate_x_deg, angles.rotate_y_deg, CUBE_LIFT_PX
    )
}

pub const CUBE_NEUTRAL: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

pub fn card_transform(angles: &TiltAngles) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{}px)",
        angles.rotate_x_deg, angles.rotate_y_deg, CARD_LIFT_PX
    )
}

pub const CARD_NEUTRAL: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

pub fn card_image_transform(shift: Vec2) -> String {
    format!(
        "translate({:.2}px, {:.2}px) scale({})",
        shift.x, shift.y, CARD_IMAGE_SCALE
    )
}

pub const CARD_IMAGE_NEUTRAL: &str = "translate(0, 0) scale(1)";
