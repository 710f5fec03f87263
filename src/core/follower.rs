// Eased pointer-follow state for the cursor marker.

use super::constants::FOLLOWER_EASE;
use glam::Vec2;

/// `shown` chases `target` by a fixed fraction of the remaining distance
/// each frame (exponential smoothing).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerState {
    pub target: Vec2,
    pub shown: Vec2,
}

impl FollowerState {
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Advance one frame and return the new displayed position.
    pub fn step(&mut self) -> Vec2 {
        self.shown.x = ease_toward(self.shown.x, self.target.x, FOLLOWER_EASE);
        self.shown.y = ease_toward(self.shown.y, self.target.y, FOLLOWER_EASE);
        self.shown
    }
}

#[inline]
pub fn ease_toward(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}
