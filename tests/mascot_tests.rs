// Host-side tests for the reactive mascot state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod mascot {
        include!("../src/core/mascot.rs");
    }
}

use crate::core::mascot::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);
const NEAR: Vec2 = Vec2::new(100.0, 600.0); // 100px above the anchor centre
const FAR: Vec2 = Vec2::new(600.0, 100.0);

fn params() -> MascotParams {
    MascotParams {
        left_px: 40.0,
        bottom_px: 40.0,
        size_px: 120.0,
        eye_fractions: [Vec2::new(0.36, 0.42), Vec2::new(0.64, 0.42)],
        proximity_px: 180.0,
        pupil_max_px: 5.0,
        revert_ms: 3000.0,
    }
}

fn make_mascot() -> Mascot {
    Mascot::new(params(), VIEWPORT)
}

#[test]
fn anchor_sits_in_bottom_left_corner() {
    let m = make_mascot();
    assert_eq!(m.anchor().min, Vec2::new(40.0, 640.0));
    assert_eq!(m.anchor().center(), Vec2::new(100.0, 700.0));
}

#[test]
fn proximity_toggles_idle_and_frightened() {
    let mut m = make_mascot();
    assert_eq!(m.expression(), Expression::Idle);
    m.track(NEAR);
    assert_eq!(m.expression(), Expression::Frightened);
    m.track(FAR);
    assert_eq!(m.expression(), Expression::Idle);
}

#[test]
fn threshold_is_strict() {
    let mut m = make_mascot();
    let center = m.anchor().center();
    m.track(center + Vec2::new(180.0, 0.0));
    assert_eq!(m.expression(), Expression::Idle);
    m.track(center + Vec2::new(179.9, 0.0));
    assert_eq!(m.expression(), Expression::Frightened);
}

#[test]
fn kill_ignores_proximity_until_revert() {
    let mut m = make_mascot();
    m.track(FAR);
    m.kill(0.0);
    assert_eq!(m.expression(), Expression::Dead);

    m.track(NEAR);
    assert_eq!(m.expression(), Expression::Dead);
    m.track(FAR);
    assert!(!m.tick(2_999.0, FAR));
    assert_eq!(m.expression(), Expression::Dead);

    assert!(m.tick(3_000.0, FAR));
    assert_eq!(m.expression(), Expression::Idle);
    assert_eq!(m.revert_at_ms(), None);
}

#[test]
fn revert_lands_on_proximity_state() {
    let mut m = make_mascot();
    m.kill(0.0);
    m.track(NEAR);
    m.tick(3_000.0, NEAR);
    assert_eq!(m.expression(), Expression::Frightened);
}

#[test]
fn second_click_restarts_countdown() {
    let mut m = make_mascot();
    m.kill(0.0);
    m.kill(2_000.0);
    assert_eq!(m.revert_at_ms(), Some(5_000.0));

    m.tick(3_000.0, FAR);
    assert_eq!(m.expression(), Expression::Dead);
    m.tick(4_999.0, FAR);
    assert_eq!(m.expression(), Expression::Dead);
    m.tick(5_000.0, FAR);
    assert_eq!(m.expression(), Expression::Idle);
}

#[test]
fn hit_test_follows_round_face() {
    let m = make_mascot();
    assert!(m.hit(Vec2::new(100.0, 700.0)));
    // Rim of the face, straight out from the centre.
    assert!(m.hit(Vec2::new(160.0, 700.0)));
    assert!(m.hit(Vec2::new(100.0, 640.0)));
    // Inside the anchor box but outside the circle.
    assert!(!m.hit(Vec2::new(41.0, 641.0)));
    assert!(!m.hit(Vec2::new(40.0, 640.0)));
    assert!(!m.hit(Vec2::new(159.0, 759.0)));
    assert!(!m.hit(NEAR));
    assert!(!m.hit(FAR));
}

#[test]
fn pupils_follow_pointer_within_clamp() {
    let mut m = make_mascot();
    let eyes = m.eye_anchors();

    m.track(eyes[0] + Vec2::new(2.0, 0.0));
    assert!((m.pupils()[0] - Vec2::new(2.0, 0.0)).length() < 1e-4);

    m.track(FAR);
    for (i, p) in m.pupils().iter().enumerate() {
        assert!((p.length() - 5.0).abs() < 1e-4, "pupil {i} length {}", p.length());
        let dir = (FAR - eyes[i]).normalize();
        assert!(p.normalize().dot(dir) > 0.999);
    }
}

#[test]
fn pupils_keep_tracking_while_dead() {
    let mut m = make_mascot();
    m.kill(0.0);
    m.track(FAR);
    assert!(m.pupils()[0].length() > 0.0);
}

#[test]
fn layout_follows_viewport_height() {
    let mut m = make_mascot();
    m.layout(Vec2::new(1000.0, 500.0));
    assert_eq!(m.anchor().min, Vec2::new(40.0, 340.0));
}
