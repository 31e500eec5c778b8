// Host-side tests for the randomized DOM effect generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use crate::core::constants::*;
use crate::core::effects::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn explosion_has_fifty_evenly_spaced_pieces() {
    let mut rng = StdRng::seed_from_u64(1);
    let burst = explosion_burst(&mut rng);
    assert_eq!(burst.len(), EXPLOSION_COUNT);
    let step = std::f32::consts::TAU / EXPLOSION_COUNT as f32;
    for (i, p) in burst.iter().enumerate() {
        assert!((p.angle - step * i as f32).abs() < 1e-5);
        assert!(p.velocity >= 200.0 && p.velocity < 500.0);
        assert!(p.font_px >= 15.0 && p.font_px < 35.0);
        assert!(p.spin_deg >= 0.0 && p.spin_deg < 720.0);
    }
}

#[test]
fn burst_displacement_follows_angle_and_velocity() {
    let p = BurstPiece {
        angle: std::f32::consts::FRAC_PI_2,
        velocity: 300.0,
        font_px: 20.0,
        spin_deg: 90.0,
    };
    let d = p.displacement();
    assert!(d.x.abs() < 1e-3);
    assert!((d.y - 300.0).abs() < 1e-3);
    assert!(p.end_transform().ends_with("300.00px) rotate(90.0deg) scale(0)"));
}

#[test]
fn confetti_shower_is_staggered_and_in_range() {
    let mut rng = StdRng::seed_from_u64(2);
    let shower = confetti_shower(&mut rng);
    assert_eq!(shower.len(), CONFETTI_COUNT);
    for (i, c) in shower.iter().enumerate() {
        assert_eq!(c.delay_ms, i as f64 * 20.0);
        assert!((0.0..100.0).contains(&c.left_vw));
        assert!(c.width_px >= 5.0 && c.width_px < 15.0);
        assert!(c.height_px >= 5.0 && c.height_px < 15.0);
        assert!(CONFETTI_COLORS.contains(&c.color));
        assert!(c.start_spin_deg >= 0.0 && c.start_spin_deg < 360.0);
        assert!(c.duration_ms >= 2000.0 && c.duration_ms < 5000.0);
        assert!(c.drift_px.abs() <= 100.0);
        assert!(c.end_spin_deg >= 0.0 && c.end_spin_deg < 720.0);
    }
    // Last piece spawns 1.98s after the first.
    assert_eq!(shower.last().map(|c| c.delay_ms), Some(1980.0));
}

#[test]
fn confetti_shapes_mix_round_and_square() {
    let mut rng = StdRng::seed_from_u64(3);
    let shower = confetti_shower(&mut rng);
    let round = shower.iter().filter(|c| c.round).count();
    assert!(round > 0 && round < shower.len());
    for c in &shower {
        let expected = if c.round { "50%" } else { "0" };
        assert_eq!(c.border_radius(), expected);
    }
}

#[test]
fn confetti_transforms_fall_one_viewport() {
    let c = ConfettiPiece {
        delay_ms: 0.0,
        left_vw: 10.0,
        width_px: 8.0,
        height_px: 8.0,
        color: "#ff4f81",
        start_spin_deg: 45.0,
        round: false,
        duration_ms: 3000.0,
        drift_px: -25.5,
        end_spin_deg: 400.0,
    };
    assert_eq!(c.start_transform(), "rotate(45.0deg)");
    assert_eq!(c.end_transform(), "translate(-25.50px, 100vh) rotate(400.0deg)");
}

#[test]
fn floating_hearts_pick_from_palette() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let h = FloatingHeart::random(&mut rng);
        assert!(HEART_GLYPHS.contains(&h.glyph));
        assert!((0.0..100.0).contains(&h.left_vw));
        assert!(h.duration_s >= 5.0 && h.duration_s < 8.0);
        assert!(h.font_px >= 15.0 && h.font_px < 30.0);
        assert_eq!(h.lifetime_ms(), 8000.0);
    }
}

#[test]
fn initial_burst_is_ten_hearts_from_half_a_second() {
    let delays: Vec<f64> = initial_burst_delays().collect();
    assert_eq!(delays.len(), 10);
    assert_eq!(delays[0], 500.0);
    assert_eq!(delays[9], 1400.0);
    assert!(delays.windows(2).all(|w| w[1] - w[0] == 100.0));
}
