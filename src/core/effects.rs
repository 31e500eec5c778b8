// Randomized parameters for the page's short-lived DOM effects.
//
// Generators here only decide *what* to draw; `fx.rs` turns them into
// elements and registers their lifetimes.

use crate::core::constants::*;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// One ambient emoji heart rising through the hearts container.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingHeart {
    pub glyph: &'static str,
    pub left_vw: f32,
    pub duration_s: f32,
    pub font_px: f32,
}

impl FloatingHeart {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            glyph: HEART_GLYPHS.choose(rng).copied().unwrap_or(HEART_GLYPHS[0]),
            left_vw: rng.gen::<f32>() * 100.0,
            duration_s: rng.gen::<f32>() * AMBIENT_DURATION_SPAN_S + AMBIENT_DURATION_MIN_S,
            font_px: rng.gen::<f32>() * AMBIENT_FONT_SPAN_PX + AMBIENT_FONT_MIN_PX,
        }
    }

    /// Removal is fixed at 8 s regardless of `duration_s`.
    #[inline]
    pub fn lifetime_ms(&self) -> f64 {
        AMBIENT_LIFETIME_MS
    }
}

/// Spawn offsets (ms after startup) of the opening heart burst.
pub fn initial_burst_delays() -> impl Iterator<Item = f64> {
    (0..INITIAL_BURST_COUNT)
        .map(|i| INITIAL_BURST_DELAY_MS + i as f64 * INITIAL_BURST_STAGGER_MS)
}

/// One glyph of the confirmation explosion.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstPiece {
    pub angle: f32,
    pub velocity: f32,
    pub font_px: f32,
    pub spin_deg: f32,
}

impl BurstPiece {
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.velocity
    }

    pub fn end_transform(&self) -> String {
        let d = self.displacement();
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.1}deg) scale(0)",
            d.x, d.y, self.spin_deg
        )
    }
}

/// Exactly `EXPLOSION_COUNT` pieces at uniform angular steps 2π·i/N.
pub fn explosion_burst(rng: &mut impl Rng) -> Vec<BurstPiece> {
    (0..EXPLOSION_COUNT)
        .map(|i| BurstPiece {
            angle: std::f32::consts::TAU * i as f32 / EXPLOSION_COUNT as f32,
            velocity: rng.gen::<f32>() * EXPLOSION_VELOCITY_SPAN + EXPLOSION_VELOCITY_MIN,
            font_px: rng.gen::<f32>() * EXPLOSION_FONT_SPAN_PX + EXPLOSION_FONT_MIN_PX,
            spin_deg: rng.gen::<f32>() * EXPLOSION_SPIN_MAX_DEG,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    /// Spawn delay relative to the start of the shower.
    pub delay_ms: f64,
    pub left_vw: f32,
    pub width_px: f32,
    pub height_px: f32,
    pub color: &'static str,
    pub start_spin_deg: f32,
    pub round: bool,
    pub duration_ms: f64,
    pub drift_px: f32,
    pub end_spin_deg: f32,
}

impl ConfettiPiece {
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            delay_ms: index as f64 * CONFETTI_STAGGER_MS,
            left_vw: rng.gen::<f32>() * 100.0,
            width_px: rng.gen::<f32>() * CONFETTI_SIZE_SPAN_PX + CONFETTI_SIZE_MIN_PX,
            height_px: rng.gen::<f32>() * CONFETTI_SIZE_SPAN_PX + CONFETTI_SIZE_MIN_PX,
            color: CONFETTI_COLORS
                .choose(rng)
                .copied()
                .unwrap_or(CONFETTI_COLORS[0]),
            start_spin_deg: rng.gen::<f32>() * CONFETTI_START_SPIN_MAX_DEG,
            round: rng.gen::<f32>() > 0.5,
            duration_ms: rng.gen::<f64>() * CONFETTI_DURATION_SPAN_MS + CONFETTI_DURATION_MIN_MS,
            drift_px: (rng.gen::<f32>() - 0.5) * CONFETTI_DRIFT_SPAN_PX,
            end_spin_deg: rng.gen::<f32>() * CONFETTI_END_SPIN_MAX_DEG,
        }
    }

    pub fn start_transform(&self) -> String {
        format!("rotate({:.1}deg)", self.start_spin_deg)
    }

    pub fn end_transform(&self) -> String {
        format!(
            "translate({:.2}px, 100vh) rotate({:.1}deg)",
            self.drift_px, self.end_spin_deg
        )
    }

    pub fn border_radius(&self) -> &'static str {
        if self.round {
            "50%"
        } else {
            "0"
        }
    }
}

/// Exactly `CONFETTI_COUNT` pieces, staggered `CONFETTI_STAGGER_MS` apart.
pub fn confetti_shower(rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..CONFETTI_COUNT)
        .map(|i| ConfettiPiece::random(i, rng))
        .collect()
}
