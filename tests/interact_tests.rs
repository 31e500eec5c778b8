// Host-side tests for the dodge, parallax, tilt and scroll-reveal math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interact {
        include!("../src/core/interact.rs");
    }
}

use crate::core::interact::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn dodge_magnitude_grows_then_caps() {
    let mags: Vec<f32> = (0..=15).map(dodge_magnitude).collect();
    assert!(mags.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(dodge_magnitude(1), 20.0);
    assert_eq!(dodge_magnitude(10), 200.0);
    assert_eq!(dodge_magnitude(15), 200.0);
}

#[test]
fn third_dodge_scales_companion_and_bounds_offset() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut counter = DodgeCounter::default();
    counter.dodge(&mut rng);
    counter.dodge(&mut rng);
    let d = counter.dodge(&mut rng);
    assert_eq!(d.count, 3);
    assert_eq!(counter.count(), 3);
    assert_eq!(d.max_movement, 60.0);
    assert!((d.companion_scale - 1.3).abs() < 1e-6);
    assert!(d.offset.x.abs() <= 30.0 && d.offset.y.abs() <= 30.0);
}

#[test]
fn dodge_offsets_stay_within_half_of_max_after_cap() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut counter = DodgeCounter::default();
    for _ in 0..50 {
        let d = counter.dodge(&mut rng);
        assert!(d.offset.x.abs() <= d.max_movement * 0.5);
        assert!(d.offset.y.abs() <= d.max_movement * 0.5);
    }
    // Companion keeps growing past the displacement cap.
    assert!((companion_scale(counter.count()) - 6.0).abs() < 1e-5);
}

#[test]
fn dodge_transforms_format_pixels_and_scale() {
    let d = Dodge {
        count: 2,
        max_movement: 40.0,
        offset: Vec2::new(12.5, -3.25),
        companion_scale: 1.2,
    };
    assert_eq!(d.control_transform(), "translate(12.50px, -3.25px)");
    assert_eq!(d.companion_transform(), "scale(1.2)");
}

#[test]
fn parallax_offset_is_centred_on_viewport() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(parallax_offset(Vec2::new(400.0, 300.0), vp), Vec2::ZERO);
    assert_eq!(parallax_offset(Vec2::ZERO, vp), Vec2::new(-0.5, -0.5));
    assert_eq!(parallax_offset(Vec2::new(800.0, 600.0), vp), Vec2::new(0.5, 0.5));
    assert_eq!(parallax_offset(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn panel_tilt_follows_pointer_offset() {
    let s = panel_perspective_transform(Vec2::new(0.5, 0.25));
    assert_eq!(s, "perspective(1000px) rotateY(5.000deg) rotateX(-2.500deg)");
}

#[test]
fn tilt_is_zero_at_card_centre_and_signed_at_corners() {
    let size = Vec2::new(200.0, 100.0);
    assert_eq!(tilt_angles(Vec2::new(100.0, 50.0), size), (0.0, 0.0));
    let (rx, ry) = tilt_angles(Vec2::ZERO, size);
    assert_eq!(rx, -5.0);
    assert_eq!(ry, 10.0);
    assert_eq!(
        tilt_transform(rx, ry),
        "translateY(-15px) scale(1.05) rotateX(-5.00deg) rotateY(10.00deg)"
    );
}

#[test]
fn reveal_band_uses_bottom_slack() {
    assert!(in_reveal_band(100.0, 300.0, 800.0));
    assert!(!in_reveal_band(750.0, 900.0, 800.0));
    assert!(!in_reveal_band(-400.0, -10.0, 800.0));
    assert!(in_reveal_band(-400.0, 1.0, 800.0));
}

#[test]
fn reveal_tracker_is_idempotent_and_monotonic() {
    let mut t = RevealTracker::default();
    assert!(!t.observe(0, 900.0, 1100.0, 800.0));
    assert!(!t.is_shown(0));
    assert!(t.observe(0, 200.0, 400.0, 800.0));
    assert!(!t.observe(0, 200.0, 400.0, 800.0));
    // Scrolling back out never hides it again.
    assert!(!t.observe(0, 2000.0, 2200.0, 800.0));
    assert!(t.is_shown(0));
    assert!(t.observe(1, 0.0, 50.0, 800.0));
    assert_eq!(t.shown_count(), 2);
}
