// Pointer and scroll math behind the page's interaction handlers.

use crate::core::constants::*;
use fnv::FnvHashSet;
use glam::Vec2;
use rand::Rng;

/// Max dodge displacement for `count` dodges: min(count * 20, 200).
#[inline]
pub fn dodge_magnitude(count: u32) -> f32 {
    (count as f32 * DODGE_STEP_PX).min(DODGE_MAX_PX)
}

/// Companion (confirm) control scale; grows without bound.
#[inline]
pub fn companion_scale(count: u32) -> f32 {
    1.0 + count as f32 * COMPANION_SCALE_STEP
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dodge {
    pub count: u32,
    pub max_movement: f32,
    pub offset: Vec2,
    pub companion_scale: f32,
}

impl Dodge {
    pub fn control_transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.offset.x, self.offset.y)
    }

    pub fn companion_transform(&self) -> String {
        format!("scale({})", self.companion_scale)
    }
}

/// Escalation counter for the declining control. Never reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct DodgeCounter {
    count: u32,
}

impl DodgeCounter {
    pub fn dodge(&mut self, rng: &mut impl Rng) -> Dodge {
        self.count = self.count.saturating_add(1);
        let max_movement = dodge_magnitude(self.count);
        let offset = Vec2::new(
            (rng.gen::<f32>() - 0.5) * max_movement,
            (rng.gen::<f32>() - 0.5) * max_movement,
        );
        Dodge {
            count: self.count,
            max_movement,
            offset,
            companion_scale: companion_scale(self.count),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Pointer offset from the viewport centre, each axis roughly in [-0.5, 0.5].
#[inline]
pub fn parallax_offset(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    client / viewport - Vec2::splat(0.5)
}

pub fn panel_perspective_transform(offset: Vec2) -> String {
    format!(
        "perspective(1000px) rotateY({:.3}deg) rotateX({:.3}deg)",
        offset.x * PANEL_TILT_DEG_PER_UNIT,
        -offset.y * PANEL_TILT_DEG_PER_UNIT
    )
}

/// Tilt angles (rotateX, rotateY) in degrees for a pointer at `local`
/// inside a card of `size`.
#[inline]
pub fn tilt_angles(local: Vec2, size: Vec2) -> (f32, f32) {
    let center = size * 0.5;
    (
        (local.y - center.y) / TILT_DIVISOR,
        (center.x - local.x) / TILT_DIVISOR,
    )
}

pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "translateY(-15px) scale(1.05) rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x, rotate_y
    )
}

pub const NEUTRAL_TILT: &str = "translateY(0) scale(1) rotateX(0) rotateY(0)";

/// Whether a box spanning `top..bottom` sits in the reveal band of a
/// viewport `viewport_h` tall (100px slack at the bottom edge).
#[inline]
pub fn in_reveal_band(top: f64, bottom: f64, viewport_h: f64) -> bool {
    top < viewport_h - REVEAL_BOTTOM_SLACK_PX && bottom > 0.0
}

/// Monotonic record of which fade-marked elements have been shown.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    shown: FnvHashSet<usize>,
}

impl RevealTracker {
    /// Returns `true` only the first time `index` enters the reveal band.
    pub fn observe(&mut self, index: usize, top: f64, bottom: f64, viewport_h: f64) -> bool {
        if self.shown.contains(&index) {
            return false;
        }
        if in_reveal_band(top, bottom, viewport_h) {
            self.shown.insert(index);
            return true;
        }
        false
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.contains(&index)
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }
}
