// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(AMBIENT_INTERVAL_MS > 0.0);
    // Hearts outlive their slowest CSS rise.
    assert!(AMBIENT_LIFETIME_MS >= ((AMBIENT_DURATION_MIN_S + AMBIENT_DURATION_SPAN_S) * 1000.0) as f64);
    assert!(TRANSITION_KICK_MS < TRAIL_LIFETIME_MS);
    assert!(TRANSITION_KICK_MS < EXPLOSION_LIFETIME_MS);
    assert_eq!(SHAKE_MS, CONFIRM_REVEAL_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dodge_cap_is_reached_in_whole_steps() {
    assert_eq!((DODGE_MAX_PX / DODGE_STEP_PX).fract(), 0.0);
    assert!(COMPANION_SCALE_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_fits_inside_camera_frustum() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    // The farthest heart is still well inside the far plane.
    assert!(CAMERA_Z + HEART_SPREAD < CAMERA_ZFAR);
    assert!(POINT_LIGHT_RANGE > HEART_SPREAD);
    assert!(HEART_OPACITY > 0.0 && HEART_OPACITY <= 1.0);
    for c in HEART_COLORS.iter().chain(std::iter::once(&POINT_LIGHT_COLOR)) {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn palettes_are_valid_hex_and_glyphs_non_empty() {
    for c in CONFETTI_COLORS {
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
    assert!(HEART_GLYPHS.iter().all(|g| !g.is_empty()));
    assert_eq!(CONFETTI_COUNT as f64 * CONFETTI_STAGGER_MS, 2000.0);
}
