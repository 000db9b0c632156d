// Host-side tests for pivot and rotation math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec2;

const CALIBRATION: f32 = -109.0;

fn layout() -> GunLayout {
    GunLayout {
        width_px: 500.0,
        height_px: 500.0,
        right_px: 20.0,
        bottom_px: -250.0,
        pivot_fraction: Vec2::new(0.5, 0.8),
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn pivot_matches_layout_for_desktop_viewport() {
    let pivot = pivot_point(&layout(), Vec2::new(1280.0, 800.0));
    // 1280 - 20 - 250 and (800 + 250) - 100
    assert_eq!(pivot, Vec2::new(1010.0, 950.0));
}

#[test]
fn pivot_stays_inside_gun_box_for_all_viewports() {
    let l = layout();
    for w in (0..=4000).step_by(137) {
        for h in (0..=3000).step_by(113) {
            let viewport = Vec2::new(w as f32, h as f32);
            let pivot = pivot_point(&l, viewport);
            let bx = l.container(viewport);
            assert!(
                pivot.cmpge(bx.min).all() && pivot.cmple(bx.min + bx.size).all(),
                "pivot {pivot:?} outside {bx:?} for viewport {viewport:?}"
            );
            assert!(pivot.x >= viewport.x - l.right_px - l.width_px);
            assert!(pivot.x <= viewport.x - l.right_px);
            assert!(pivot.y >= viewport.y - l.bottom_px - l.height_px);
            assert!(pivot.y <= viewport.y - l.bottom_px);
        }
    }
}

#[test]
fn pivot_fraction_extremes_land_on_box_corners() {
    let mut l = layout();
    let viewport = Vec2::new(800.0, 600.0);
    l.pivot_fraction = Vec2::ZERO;
    assert_eq!(pivot_point(&l, viewport), l.container(viewport).min);
    l.pivot_fraction = Vec2::ONE;
    let bx = l.container(viewport);
    assert_eq!(pivot_point(&l, viewport), bx.min + bx.size);
}

#[test]
fn rotation_for_cardinal_directions() {
    let pivot = pivot_point(&layout(), Vec2::new(1280.0, 800.0));

    let right = rotation_deg(pivot, pivot + Vec2::new(100.0, 0.0), CALIBRATION);
    let below = rotation_deg(pivot, pivot + Vec2::new(0.0, 100.0), CALIBRATION);
    let left = rotation_deg(pivot, pivot + Vec2::new(-100.0, 0.0), CALIBRATION);
    let above = rotation_deg(pivot, pivot + Vec2::new(0.0, -100.0), CALIBRATION);

    assert!(approx(right, 0.0 - CALIBRATION), "right: {right}");
    assert!(approx(below, 90.0 - CALIBRATION), "below: {below}");
    assert!(approx(left, 180.0 - CALIBRATION), "left: {left}");
    assert!(approx(above, -90.0 - CALIBRATION), "above: {above}");
}

#[test]
fn rotation_is_angle_minus_calibration() {
    let pivot = Vec2::new(10.0, 20.0);
    for &(dx, dy) in &[(3.0, 4.0), (-7.0, 2.0), (-1.0, -9.0), (5.0, -5.0)] {
        let pointer = pivot + Vec2::new(dx, dy);
        let expected = (dy as f32).atan2(dx as f32).to_degrees() - 25.0;
        assert!(approx(rotation_deg(pivot, pointer, 25.0), expected));
    }
}

#[test]
fn pointer_angle_range_is_half_open() {
    let origin = Vec2::ZERO;
    for i in 0..360 {
        let a = (i as f32).to_radians();
        let deg = pointer_angle_deg(origin, Vec2::new(a.cos(), a.sin()) * 50.0);
        assert!(deg > -180.0 - 1e-3 && deg <= 180.0 + 1e-3, "angle {deg}");
    }
}

#[test]
fn wrap_delta_takes_short_way_round() {
    assert!(approx(wrap_delta_deg(350.0), -10.0));
    assert!(approx(wrap_delta_deg(-350.0), 10.0));
    assert!(approx(wrap_delta_deg(180.0), 180.0));
    assert!(approx(wrap_delta_deg(-180.0), 180.0));
    assert!(approx(wrap_delta_deg(725.0), 5.0));
    assert!(approx(wrap_delta_deg(0.0), 0.0));
}

#[test]
fn rect_center_is_midpoint() {
    let r = Rect::new(40.0, 640.0, 120.0, 120.0);
    assert_eq!(r.center(), Vec2::new(100.0, 700.0));
    assert_eq!(Rect::new(0.0, 0.0, 0.0, 0.0).center(), Vec2::ZERO);
}
