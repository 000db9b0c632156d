// Host-side tests for the aim tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod aim {
        include!("../src/core/aim.rs");
    }
}

use crate::core::aim::AimTracker;
use glam::Vec2;

#[test]
fn first_aim_sets_display_to_raw() {
    let mut aim = AimTracker::new();
    let raw = aim.aim(Vec2::ZERO, Vec2::new(0.0, 10.0), -109.0);
    assert!((raw - 199.0).abs() < 1e-3);
    assert_eq!(aim.raw_deg(), raw);
    assert_eq!(aim.display_deg(), raw);
}

#[test]
fn display_angle_unwraps_across_seam() {
    let mut aim = AimTracker::new();
    aim.aim(Vec2::ZERO, Vec2::new(-100.0, -1.0), 0.0);
    let before = aim.display_deg();
    assert!(before < -179.0);

    // Crossing the negative x axis flips the raw angle to ~+179.4
    let raw = aim.aim(Vec2::ZERO, Vec2::new(-100.0, 1.0), 0.0);
    assert!(raw > 179.0);
    let after = aim.display_deg();
    assert!(
        (after - before).abs() < 2.0,
        "display jumped from {before} to {after}"
    );
    assert!(after < -180.0);
}

#[test]
fn display_angle_matches_raw_modulo_full_turns() {
    let mut aim = AimTracker::new();
    // Walk two full turns around the pivot.
    for i in 0..=720 {
        let a = (i as f32).to_radians();
        let raw = aim.aim(Vec2::ZERO, Vec2::new(a.cos(), a.sin()) * 80.0, -109.0);
        let diff = (aim.display_deg() - raw).rem_euclid(360.0);
        assert!(diff < 0.05 || diff > 360.0 - 0.05, "step {i}: diff {diff}");
    }
    // Continuous accumulation: roughly two turns beyond the start.
    assert!(aim.display_deg() > 109.0 + 700.0);
}
